//! The resolved, side-effect-free model handed to the emission engine.

use std::fmt::{Display, Formatter};

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{
  codegen::Visibility,
  config::{CompanionBuilder, OverwritePolicy},
  descriptor::{FieldAccess, FieldDescriptor, TypeId},
  naming::identifiers::ident,
};

/// Collision-free identifier of one field inside the generated builder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BuilderFieldName(String);

impl BuilderFieldName {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for BuilderFieldName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for BuilderFieldName {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodName(String);

impl MethodName {
  pub fn new(name: impl Into<String>) -> Self {
    Self(name.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl Display for MethodName {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

impl ToTokens for MethodName {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    ident(&self.0).to_tokens(tokens);
  }
}

/// The public setter resolved for one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetterBinding {
  pub method_name: MethodName,
  /// True when the name is the bare prefix because the field's type is unique.
  pub bare: bool,
  /// Companion builder accepted by a second overload of the same method.
  pub companion: Option<CompanionBuilder>,
}

impl SetterBinding {
  pub fn has_delegate_overload(&self) -> bool {
    self.companion.is_some()
  }
}

/// A field as the emission engine sees it: where it lives and how it is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelField {
  pub field: FieldDescriptor,
  pub builder_name: BuilderFieldName,
  pub access: FieldAccess,
  /// Parent fields leading from the target to the declaring level.
  pub parent_path: Vec<String>,
  pub setter: SetterBinding,
}

impl ModelField {
  /// Place expression of the declaring level inside `root`, e.g. `result.sub.base`.
  pub fn level_place(&self, root: &syn::Ident) -> TokenStream {
    let segments = self.parent_path.iter().map(|segment| ident(segment));
    quote! { #root #(.#segments)* }
  }

  /// Place expression of the field itself inside `root`, e.g. `result.base.here`.
  pub fn field_place(&self, root: &syn::Ident) -> TokenStream {
    let level = self.level_place(root);
    let name = ident(&self.field.name);
    quote! { #level.#name }
  }

  /// `Base::here`, used in docs and diagnostics.
  pub fn qualified_name(&self) -> String {
    format!("{}::{}", self.field.declaring_type, self.field.name)
  }
}

/// Resolved construction strategy of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionStrategy {
  Direct,
  Indirect { constructor: syn::Path },
}

impl ConstructionStrategy {
  pub fn is_indirect(&self) -> bool {
    matches!(self, Self::Indirect { .. })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionModel {
  pub target: TypeId,
  pub target_path: Option<syn::Path>,
  pub builder_name: String,
  pub fields: Vec<ModelField>,
  pub construction: ConstructionStrategy,
  pub overwrite_policy: OverwritePolicy,
  pub visibility: Visibility,
  /// Additional `use` items copied from the descriptor.
  pub uses: Vec<syn::UseTree>,
}

impl EmissionModel {
  pub fn is_sparse(&self) -> bool {
    self.overwrite_policy == OverwritePolicy::Sparse
  }

  pub fn target_ident(&self) -> syn::Ident {
    ident(self.target.as_str())
  }

  pub fn builder_ident(&self) -> syn::Ident {
    ident(&self.builder_name)
  }

  pub fn error_ident(&self) -> syn::Ident {
    ident(&format!("{}Error", self.builder_name))
  }
}
