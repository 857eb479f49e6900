mod identifiers;
mod setters;
