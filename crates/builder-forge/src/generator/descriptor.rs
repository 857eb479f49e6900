//! Declarative type descriptors.
//!
//! A descriptor file lists the data types a builder can be generated for, the
//! fields each type declares and how the types nest. Inheritance is expressed
//! by composition: a type with a `parent` embeds that parent in its
//! `parent_field`, so a field declared on an ancestor is reached through the
//! chain of parent fields.

use std::{
  collections::{BTreeSet, HashSet},
  fmt::{Display, Formatter},
  str::FromStr,
};

use indexmap::IndexMap;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use serde::Deserialize;
use string_cache::DefaultAtom;

use super::{error::DescriptorError, naming::identifiers::is_plain_identifier};

/// Simple name of a type participating in a hierarchy.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeId(DefaultAtom);

impl TypeId {
  pub fn new(name: &str) -> Self {
    Self(DefaultAtom::from(name.trim()))
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for TypeId {
  fn from(name: &str) -> Self {
    Self::new(name)
  }
}

impl From<String> for TypeId {
  fn from(name: String) -> Self {
    Self::new(&name)
  }
}

impl Display for TypeId {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    self.0.fmt(f)
  }
}

/// Scalar types whose zero-equivalent is a literal rather than `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumString, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Scalar {
  Bool,
  Char,
  I8,
  I16,
  I32,
  I64,
  I128,
  Isize,
  U8,
  U16,
  U32,
  U64,
  U128,
  Usize,
  F32,
  F64,
}

/// A field's semantic type, written as Rust type text.
///
/// Equality and ordering use the token form, so `Vec<String>` and
/// `Vec< String >` are the same type. Generic arguments are not interpreted.
#[derive(Debug, Clone)]
pub struct TypeRef {
  key: String,
  ty: syn::Type,
}

impl TypeRef {
  pub fn parse(text: &str) -> Result<Self, syn::Error> {
    let ty: syn::Type = syn::parse_str(text.trim())?;
    let key = ty.to_token_stream().to_string();
    Ok(Self { key, ty })
  }

  /// Canonical text of the type, stable across formatting differences in the input.
  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn scalar(&self) -> Option<Scalar> {
    Scalar::from_str(&self.key).ok()
  }

  /// Readable form, e.g. `Vec<String>`.
  pub fn display_name(&self) -> String {
    self.key.replace(" < ", "<").replace(" >", ">").replace(" ,", ",").replace(" :: ", "::")
  }
}

impl ToTokens for TypeRef {
  fn to_tokens(&self, tokens: &mut TokenStream) {
    self.ty.to_tokens(tokens);
  }
}

impl PartialEq for TypeRef {
  fn eq(&self, other: &Self) -> bool {
    self.key == other.key
  }
}

impl Eq for TypeRef {}

impl std::hash::Hash for TypeRef {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.key.hash(state);
  }
}

impl PartialOrd for TypeRef {
  fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for TypeRef {
  fn cmp(&self, other: &Self) -> std::cmp::Ordering {
    self.key.cmp(&other.key)
  }
}

/// How the generated builder writes the fields of one hierarchy level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FieldAccess {
  /// Plain assignment; the builder must be placed where the fields are visible.
  #[default]
  Field,
  /// Calls `set_<field>(value) -> Result<(), E>` on the level; failures are logged and skipped.
  Setter,
}

/// One field declared at one level of a hierarchy.
///
/// Identity is `(name, declaring_type)`: the same name declared at two levels
/// describes two distinct fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldDescriptor {
  pub name: String,
  pub declaring_type: TypeId,
  pub semantic_type: TypeRef,
  pub primitive_like: bool,
}

/// Key used to decide whether two fields share a semantic type.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticKey {
  pub type_key: String,
  pub primitive_like: bool,
}

impl FieldDescriptor {
  pub fn semantic_key(&self) -> SemanticKey {
    SemanticKey {
      type_key: self.semantic_type.key().to_string(),
      primitive_like: self.primitive_like,
    }
  }

  /// The type held by the target and by the builder slot: `T` for primitive-like fields, `Option<T>` otherwise.
  pub fn storage_type(&self) -> TokenStream {
    let ty = &self.semantic_type;
    if self.primitive_like {
      quote! { #ty }
    } else {
      quote! { Option<#ty> }
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
  pub id: TypeId,
  pub path: Option<syn::Path>,
  pub parent: Option<TypeId>,
  pub parent_field: Option<String>,
  pub access: FieldAccess,
  pub fields: Vec<FieldDescriptor>,
}

/// Validated set of type descriptors loaded from one descriptor file.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
  types: IndexMap<TypeId, TypeDescriptor>,
  uses: Vec<syn::UseTree>,
  companions: IndexMap<String, String>,
}

impl DescriptorSet {
  pub fn from_json(json: &[u8]) -> Result<Self, DescriptorError> {
    let file: DescriptorFile = serde_json::from_slice(json)?;
    Self::from_file(file)
  }

  pub fn from_file(file: DescriptorFile) -> Result<Self, DescriptorError> {
    let mut types = IndexMap::new();
    for raw in file.types {
      let descriptor = raw.into_descriptor()?;
      if types.contains_key(&descriptor.id) {
        return Err(DescriptorError::DuplicateType(descriptor.id.to_string()));
      }
      types.insert(descriptor.id.clone(), descriptor);
    }

    let uses = file
      .uses
      .iter()
      .map(|entry| {
        syn::parse_str::<syn::UseTree>(entry).map_err(|source| DescriptorError::InvalidUse {
          entry: entry.clone(),
          source,
        })
      })
      .collect::<Result<Vec<_>, _>>()?;

    let set = Self {
      types,
      uses,
      companions: file.companions,
    };
    set.validate_parents()?;
    Ok(set)
  }

  fn validate_parents(&self) -> Result<(), DescriptorError> {
    for descriptor in self.types.values() {
      if let Some(parent) = &descriptor.parent {
        if !self.types.contains_key(parent) {
          return Err(DescriptorError::UnknownParent {
            type_name: descriptor.id.to_string(),
            parent: parent.to_string(),
          });
        }
        if descriptor.parent_field.is_none() {
          return Err(DescriptorError::MissingParentField(descriptor.id.to_string()));
        }
      }

      let mut seen = HashSet::new();
      let mut current = Some(descriptor);
      while let Some(level) = current {
        if !seen.insert(&level.id) {
          return Err(DescriptorError::ParentCycle(descriptor.id.to_string()));
        }
        current = level.parent.as_ref().and_then(|parent| self.types.get(parent));
      }
    }
    Ok(())
  }

  pub fn get(&self, id: &TypeId) -> Option<&TypeDescriptor> {
    self.types.get(id)
  }

  pub fn uses(&self) -> &[syn::UseTree] {
    &self.uses
  }

  /// Companion builders declared in the file, keyed by the field type text.
  pub fn companions(&self) -> impl Iterator<Item = (&str, &str)> {
    self.companions.iter().map(|(ty, builder)| (ty.as_str(), builder.as_str()))
  }

  /// Walks from `target` up to the root of its hierarchy, target first.
  ///
  /// Parent cycles are rejected on load, so the walk always terminates.
  pub fn ancestry(&self, target: &TypeId) -> Vec<&TypeDescriptor> {
    let mut chain = vec![];
    let mut current = self.types.get(target);
    while let Some(level) = current {
      chain.push(level);
      current = level.parent.as_ref().and_then(|parent| self.types.get(parent));
    }
    chain
  }
}

/// On-disk form of a descriptor file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptorFile {
  #[serde(default)]
  pub uses: Vec<String>,
  pub types: Vec<RawType>,
  #[serde(default)]
  pub companions: IndexMap<String, String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawType {
  pub name: String,
  #[serde(default)]
  pub path: Option<String>,
  #[serde(default)]
  pub parent: Option<String>,
  #[serde(default)]
  pub parent_field: Option<String>,
  #[serde(default)]
  pub access: FieldAccess,
  #[serde(default)]
  pub fields: Vec<RawField>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawField {
  pub name: String,
  #[serde(rename = "type")]
  pub ty: String,
  #[serde(default)]
  pub nullable: bool,
}

impl RawType {
  fn into_descriptor(self) -> Result<TypeDescriptor, DescriptorError> {
    if !is_plain_identifier(&self.name) {
      return Err(DescriptorError::InvalidTypeName(self.name));
    }
    let id = TypeId::new(&self.name);

    let path = self
      .path
      .as_deref()
      .map(|path| {
        syn::parse_str::<syn::Path>(path).map_err(|source| DescriptorError::InvalidPath {
          type_name: self.name.clone(),
          source,
        })
      })
      .transpose()?;

    if let Some(parent_field) = &self.parent_field
      && !is_plain_identifier(parent_field)
    {
      return Err(DescriptorError::InvalidFieldName {
        type_name: self.name.clone(),
        field: parent_field.clone(),
      });
    }

    let mut names = BTreeSet::new();
    let mut fields = Vec::with_capacity(self.fields.len());
    for raw in self.fields {
      if !is_plain_identifier(&raw.name) {
        return Err(DescriptorError::InvalidFieldName {
          type_name: self.name.clone(),
          field: raw.name,
        });
      }
      let name = super::naming::identifiers::unraw(&raw.name).to_string();
      if !names.insert(name.clone()) {
        return Err(DescriptorError::DuplicateField {
          type_name: self.name.clone(),
          field: name,
        });
      }

      let semantic_type = TypeRef::parse(&raw.ty).map_err(|source| DescriptorError::InvalidFieldType {
        type_name: self.name.clone(),
        field: name.clone(),
        ty: raw.ty.clone(),
        source,
      })?;
      let primitive_like = semantic_type.scalar().is_some() && !raw.nullable;

      fields.push(FieldDescriptor {
        name,
        declaring_type: id.clone(),
        semantic_type,
        primitive_like,
      });
    }

    Ok(TypeDescriptor {
      id,
      path,
      parent: self.parent.as_deref().map(TypeId::new),
      parent_field: self.parent_field.map(|field| super::naming::identifiers::unraw(&field).to_string()),
      access: self.access,
      fields,
    })
  }
}
