pub mod codegen;
pub mod collector;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod model;
pub mod naming;
pub mod orchestrator;
pub mod output;

#[cfg(test)]
mod tests;
