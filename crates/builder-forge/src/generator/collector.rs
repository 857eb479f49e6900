//! Field collection and disambiguation.
//!
//! Walks the hierarchy of the target type, keeps the levels between the target
//! and the upper bound that are not excluded, and gives every collected field a
//! builder-internal name that no other collected field shares.

use std::collections::{BTreeMap, BTreeSet};

use super::{
  descriptor::{DescriptorSet, FieldAccess, FieldDescriptor, TypeId},
  error::{GenerateError, GenerationWarning},
  model::BuilderFieldName,
  naming::identifiers::{ensure_unique, to_snake_identifier},
};

/// Slots of the emitted builder that do not belong to a field.
pub(crate) const RESERVED_SLOTS: &[&str] = &["result", "fields_to_set"];

/// One level of the walked hierarchy, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
  pub id: TypeId,
  pub excluded: bool,
  pub field_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedField {
  pub field: FieldDescriptor,
  pub builder_name: BuilderFieldName,
  pub access: FieldAccess,
  pub parent_path: Vec<String>,
}

impl CollectedField {
  /// True when the name had to be qualified with the declaring type.
  pub fn is_renamed(&self) -> bool {
    self.builder_name.as_str() != to_snake_identifier(&self.field.name)
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCollection {
  pub levels: Vec<LevelSummary>,
  pub fields: Vec<CollectedField>,
  pub warnings: Vec<GenerationWarning>,
}

pub struct FieldCollector<'a> {
  descriptors: &'a DescriptorSet,
}

impl<'a> FieldCollector<'a> {
  pub fn new(descriptors: &'a DescriptorSet) -> Self {
    Self { descriptors }
  }

  /// Collects the fields in scope for `target`.
  ///
  /// Levels from the target up to and including `upper_bound` are visited. When
  /// the bound is `None` or is not an ancestor of the target, the whole
  /// hierarchy is visited. Levels in `excluded` keep their place in the walk
  /// but contribute no fields.
  pub fn collect(
    &self,
    target: &TypeId,
    upper_bound: Option<&TypeId>,
    excluded: &BTreeSet<TypeId>,
  ) -> Result<FieldCollection, GenerateError> {
    let chain = self.descriptors.ancestry(target);
    if chain.is_empty() {
      return Err(GenerateError::UnknownTarget(target.to_string()));
    }

    let mut warnings = vec![];
    let in_scope = match upper_bound {
      Some(bound) => match chain.iter().position(|level| &level.id == bound) {
        Some(index) => &chain[..=index],
        None => {
          warnings.push(GenerationWarning::UpperBoundNotAncestor {
            bound: bound.to_string(),
            target: target.to_string(),
          });
          &chain[..]
        }
      },
      None => &chain[..],
    };

    for excluded_type in excluded {
      if !chain.iter().any(|level| &level.id == excluded_type) {
        warnings.push(GenerationWarning::ExcludedTypeNotInHierarchy {
          excluded: excluded_type.to_string(),
          target: target.to_string(),
        });
      }
    }

    let mut levels = Vec::with_capacity(in_scope.len());
    let mut gathered = vec![];
    let mut parent_path: Vec<String> = vec![];

    for level in in_scope {
      let is_excluded = excluded.contains(&level.id);
      levels.push(LevelSummary {
        id: level.id.clone(),
        excluded: is_excluded,
        field_count: if is_excluded { 0 } else { level.fields.len() },
      });

      if !is_excluded {
        gathered.extend(
          level
            .fields
            .iter()
            .map(|field| (field.clone(), level.access, parent_path.clone())),
        );
      }

      if let Some(parent_field) = &level.parent_field {
        parent_path.push(parent_field.clone());
      }
    }

    let names = disambiguate(gathered.iter().map(|(field, _, _)| field));
    let fields = gathered
      .into_iter()
      .zip(names)
      .map(|((field, access, parent_path), builder_name)| CollectedField {
        field,
        builder_name,
        access,
        parent_path,
      })
      .collect();

    Ok(FieldCollection {
      levels,
      fields,
      warnings,
    })
  }
}

/// Assigns builder-internal names, in input order.
///
/// A name shared by fields of several declaring types becomes
/// `<name>_in_<declaring_type>` for every one of them; unique names are kept.
/// A numeric suffix settles any collision the qualified names still produce,
/// so the mapping is always injective. Names of the builder's own bookkeeping
/// slots are never handed out.
pub(crate) fn disambiguate<'f>(fields: impl Iterator<Item = &'f FieldDescriptor> + Clone) -> Vec<BuilderFieldName> {
  let mut occurrences: BTreeMap<String, usize> = BTreeMap::new();
  for field in fields.clone() {
    *occurrences.entry(to_snake_identifier(&field.name)).or_default() += 1;
  }

  let mut used: BTreeSet<String> = RESERVED_SLOTS.iter().map(ToString::to_string).collect();
  fields
    .map(|field| {
      let base = to_snake_identifier(&field.name);
      let candidate = if occurrences.get(&base).copied().unwrap_or_default() > 1 {
        format!("{base}_in_{}", to_snake_identifier(field.declaring_type.as_str()))
      } else {
        base
      };
      let unique = ensure_unique(&candidate, &used);
      used.insert(unique.clone());
      BuilderFieldName::new(unique)
    })
    .collect()
}
