pub mod identifiers;
pub mod setters;

#[cfg(test)]
mod tests;
