//! Setter naming policy.
//!
//! Every field gets `<prefix>_<builder field name>` unless the omission policy
//! is on and no other collected field shares its semantic type, in which case
//! the setter is the bare prefix and is told apart from its siblings by the
//! parameter type alone. Fields whose type has a companion builder get a second
//! overload of the same method accepting that builder.

use std::collections::BTreeMap;

use crate::generator::{
  collector::CollectedField,
  config::CompanionBuilderMap,
  descriptor::SemanticKey,
  model::{MethodName, SetterBinding},
};

pub struct SetterNamingPolicy<'a> {
  prefix: &'a str,
  omit_field_name_for_unique_types: bool,
  companions: &'a CompanionBuilderMap,
}

impl<'a> SetterNamingPolicy<'a> {
  pub fn new(prefix: &'a str, omit_field_name_for_unique_types: bool, companions: &'a CompanionBuilderMap) -> Self {
    Self {
      prefix,
      omit_field_name_for_unique_types,
      companions,
    }
  }

  /// Resolves one binding per collected field, in the same order.
  pub fn resolve(&self, fields: &[CollectedField]) -> Vec<SetterBinding> {
    let type_counts = count_semantic_types(fields);

    fields
      .iter()
      .map(|collected| {
        let unique_type = type_counts
          .get(&collected.field.semantic_key())
          .is_some_and(|count| *count == 1);
        let bare = self.omit_field_name_for_unique_types && unique_type;

        let method_name = if bare {
          MethodName::new(self.prefix)
        } else {
          MethodName::new(format!("{}_{}", self.prefix, collected.builder_name))
        };

        SetterBinding {
          method_name,
          bare,
          companion: self.companions.get(&collected.field.semantic_type).cloned(),
        }
      })
      .collect()
  }
}

fn count_semantic_types(fields: &[CollectedField]) -> BTreeMap<SemanticKey, usize> {
  let mut counts = BTreeMap::new();
  for collected in fields {
    *counts.entry(collected.field.semantic_key()).or_default() += 1;
  }
  counts
}
