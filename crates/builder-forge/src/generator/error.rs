use std::path::PathBuf;

use thiserror::Error;

/// A descriptor file that cannot describe a well-formed hierarchy.
#[derive(Debug, Error)]
pub enum DescriptorError {
  #[error("descriptor is not valid JSON: {0}")]
  Json(#[from] serde_json::Error),
  #[error("`{0}` is not a valid type name")]
  InvalidTypeName(String),
  #[error("type `{0}` is declared more than once")]
  DuplicateType(String),
  #[error("`{type_name}.{field}` is not a valid field name")]
  InvalidFieldName { type_name: String, field: String },
  #[error("field `{field}` is declared more than once in `{type_name}`")]
  DuplicateField { type_name: String, field: String },
  #[error("field `{type_name}.{field}` has type `{ty}` which is not a Rust type: {source}")]
  InvalidFieldType {
    type_name: String,
    field: String,
    ty: String,
    source: syn::Error,
  },
  #[error("path of type `{type_name}` is not a Rust path: {source}")]
  InvalidPath { type_name: String, source: syn::Error },
  #[error("`{entry}` is not a valid use tree: {source}")]
  InvalidUse { entry: String, source: syn::Error },
  #[error("type `{type_name}` extends unknown type `{parent}`")]
  UnknownParent { type_name: String, parent: String },
  #[error("type `{0}` has a parent but no `parent_field` to reach it")]
  MissingParentField(String),
  #[error("the hierarchy of `{0}` contains a cycle")]
  ParentCycle(String),
}

/// A generation run that must abort before any output is written.
#[derive(Debug, Error)]
pub enum GenerateError {
  #[error(transparent)]
  Descriptor(#[from] DescriptorError),
  #[error("target type `{0}` is not declared in the descriptor")]
  UnknownTarget(String),
  #[error("companion builder entry `{ty}` -> `{builder}` is invalid: {source}")]
  InvalidCompanion {
    ty: String,
    builder: String,
    source: syn::Error,
  },
  #[error("constructor `{constructor}` is not a Rust path: {source}")]
  InvalidConstructor { constructor: String, source: syn::Error },
  #[error("setter prefix `{0}` is not a valid identifier or clashes with a builder method")]
  InvalidPrefix(String),
  #[error("generated code does not parse: {0}")]
  Syntax(#[from] syn::Error),
  #[error("file {} already exists and may not be overwritten", .0.display())]
  DestinationExists(PathBuf),
  #[error("failed to write {}: {source}", path.display())]
  Io { path: PathBuf, source: std::io::Error },
}

/// Non-fatal observations made while resolving a builder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationWarning {
  #[error("upper bound `{bound}` is not an ancestor of `{target}`; the whole hierarchy is included")]
  UpperBoundNotAncestor { bound: String, target: String },
  #[error("excluded type `{excluded}` is not part of the hierarchy of `{target}`")]
  ExcludedTypeNotInHierarchy { excluded: String, target: String },
}
