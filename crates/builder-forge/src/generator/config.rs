use std::collections::{BTreeMap, BTreeSet};

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::{
  codegen::Visibility,
  descriptor::{DescriptorSet, TypeId, TypeRef},
  error::GenerateError,
  naming::identifiers::is_plain_identifier,
};

pub const DEFAULT_SETTER_PREFIX: &str = "with";

/// Inherent methods every emitted builder defines.
pub(crate) const RESERVED_METHODS: &[&str] = &["create", "clear", "starting_from", "build"];

/// Which fields the emitted `build` writes into the result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OverwritePolicy {
  /// Only fields whose setter was called since the builder was created or seeded.
  #[default]
  Sparse,
  /// Every field, using the stored value or its zero-equivalent.
  Total,
}

/// How the emitted builder obtains the instance it fills in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Construction {
  /// `Target::default()` when the builder is created.
  #[default]
  Direct,
  /// A fallible constructor called at `build` time unless an instance was seeded.
  /// `None` means `Target::try_new`.
  Indirect { constructor: Option<String> },
}

/// A pre-existing builder whose `build()` result can be passed to a setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionBuilder {
  path: syn::Path,
}

impl CompanionBuilder {
  pub fn parse(path: &str) -> Result<Self, syn::Error> {
    Ok(Self {
      path: syn::parse_str(path)?,
    })
  }

  /// Last path segment, the name the emitted code refers to.
  pub fn name(&self) -> String {
    self
      .path
      .segments
      .last()
      .map(|segment| segment.ident.to_string())
      .unwrap_or_default()
  }

  /// A `use` item is needed when the builder is given by a qualified path.
  pub fn import(&self) -> Option<&syn::Path> {
    (self.path.segments.len() > 1).then_some(&self.path)
  }
}

impl ToTokens for CompanionBuilder {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    let name = syn::Ident::new(&self.name(), proc_macro2::Span::call_site());
    tokens.extend(quote! { #name });
  }
}

/// Maps a field type to the companion builder that produces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanionBuilderMap(BTreeMap<String, CompanionBuilder>);

impl CompanionBuilderMap {
  /// Registers a companion, replacing an earlier entry for the same type.
  pub fn insert(&mut self, ty: &str, builder: &str) -> Result<(), GenerateError> {
    let invalid = |source| GenerateError::InvalidCompanion {
      ty: ty.to_string(),
      builder: builder.to_string(),
      source,
    };
    let type_ref = TypeRef::parse(ty).map_err(invalid)?;
    let companion = CompanionBuilder::parse(builder).map_err(invalid)?;
    self.0.insert(type_ref.key().to_string(), companion);
    Ok(())
  }

  /// Companions declared in the descriptor file, then `overrides` on top.
  pub fn from_sources<'a>(
    descriptors: &'a DescriptorSet,
    overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
  ) -> Result<Self, GenerateError> {
    let mut map = Self::default();
    for (ty, builder) in descriptors.companions().chain(overrides) {
      map.insert(ty, builder)?;
    }
    Ok(map)
  }

  pub fn get(&self, ty: &TypeRef) -> Option<&CompanionBuilder> {
    self.0.get(ty.key())
  }
}

/// Everything one generation run needs, fixed before the run starts.
#[derive(Debug, Clone, bon::Builder)]
pub struct GeneratorConfig {
  #[builder(into)]
  pub target: TypeId,
  /// Highest ancestor whose fields are included. `None` includes the whole hierarchy.
  #[builder(into)]
  pub upper_bound: Option<TypeId>,
  /// Hierarchy levels whose fields are skipped.
  #[builder(default)]
  pub excluded: BTreeSet<TypeId>,
  #[builder(default)]
  pub overwrite_policy: OverwritePolicy,
  /// Name setters for unique field types with the bare prefix.
  #[builder(default = true)]
  pub omit_field_name_for_unique_types: bool,
  #[builder(default)]
  pub companions: CompanionBuilderMap,
  #[builder(default)]
  pub construction: Construction,
  #[builder(default = true)]
  pub allow_file_overwriting: bool,
  #[builder(default = DEFAULT_SETTER_PREFIX.to_string(), into)]
  pub setter_prefix: String,
  #[builder(default)]
  pub visibility: Visibility,
}

impl GeneratorConfig {
  pub fn builder_name(&self) -> String {
    format!("{}Builder", self.target)
  }

  pub(crate) fn validate(&self) -> Result<(), GenerateError> {
    if !is_plain_identifier(&self.setter_prefix) || RESERVED_METHODS.contains(&self.setter_prefix.as_str()) {
      return Err(GenerateError::InvalidPrefix(self.setter_prefix.clone()));
    }
    Ok(())
  }
}
