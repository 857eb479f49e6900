use std::collections::BTreeSet;

use crate::generator::{
  collector::{CollectedField, FieldCollector},
  config::CompanionBuilderMap,
  descriptor::TypeId,
  model::SetterBinding,
  naming::setters::SetterNamingPolicy,
  tests::support::{companions, hierarchy},
};

fn collected(target: &str) -> Vec<CollectedField> {
  FieldCollector::new(&hierarchy())
    .collect(&TypeId::from(target), None, &BTreeSet::new())
    .unwrap()
    .fields
}

fn method_names(bindings: &[SetterBinding]) -> Vec<&str> {
  bindings.iter().map(|binding| binding.method_name.as_str()).collect()
}

#[test]
fn test_unique_types_get_bare_prefix() {
  let fields = collected("Sub");
  let companions = CompanionBuilderMap::default();
  let bindings = SetterNamingPolicy::new("with", true, &companions).resolve(&fields);

  assert_eq!(
    method_names(&bindings),
    [
      "with_here_in_sub",
      "with_there_in_sub",
      "with",
      "with",
      "with",
      "with_here_in_base",
      "with",
      "with"
    ]
  );
  let bare: Vec<bool> = bindings.iter().map(|binding| binding.bare).collect();
  assert_eq!(bare, [false, false, true, true, true, false, true, true]);
}

#[test]
fn test_disambiguated_name_and_bare_setter_compose() {
  let fields = collected("Sub");
  let companions = CompanionBuilderMap::default();
  let bindings = SetterNamingPolicy::new("with", true, &companions).resolve(&fields);

  // `Base::there` is renamed because `Sub` declares a `there` too, yet its type is unique.
  let there_in_base = fields
    .iter()
    .position(|field| field.builder_name.as_str() == "there_in_base")
    .unwrap();
  assert!(fields[there_in_base].is_renamed());
  assert_eq!(bindings[there_in_base].method_name.as_str(), "with");
}

#[test]
fn test_naming_all_setters() {
  let fields = collected("Sub");
  let companions = CompanionBuilderMap::default();
  let bindings = SetterNamingPolicy::new("set", false, &companions).resolve(&fields);

  assert_eq!(
    method_names(&bindings),
    [
      "set_here_in_sub",
      "set_there_in_sub",
      "set_list",
      "set_some_char",
      "set_there_in_base",
      "set_here_in_base",
      "set_ratio",
      "set_gadget"
    ]
  );
  assert!(bindings.iter().all(|binding| !binding.bare));
}

#[test]
fn test_shared_type_forces_named_setters() {
  // `TripleSub::depth` is the only `u8`, but `here` now appears three times as `String`.
  let fields = collected("TripleSub");
  let companions = CompanionBuilderMap::default();
  let bindings = SetterNamingPolicy::new("with", true, &companions).resolve(&fields);

  let strings: Vec<&str> = fields
    .iter()
    .zip(&bindings)
    .filter(|(field, _)| field.field.semantic_type.key() == "String")
    .map(|(_, binding)| binding.method_name.as_str())
    .collect();
  assert_eq!(
    strings,
    ["with_here_in_triple_sub", "with_here_in_sub", "with_there_in_sub", "with_here_in_base"]
  );
  assert_eq!(bindings[0].method_name.as_str(), "with");
}

#[test]
fn test_nullable_scalar_is_a_distinct_type() {
  let set = crate::generator::tests::support::descriptors(
    r#"{ "types": [{ "name": "Sub", "fields": [
      { "name": "count", "type": "i32" },
      { "name": "limit", "type": "i32", "nullable": true }
    ] }] }"#,
  );
  let fields = FieldCollector::new(&set)
    .collect(&TypeId::from("Sub"), None, &BTreeSet::new())
    .unwrap()
    .fields;
  let companions = CompanionBuilderMap::default();
  let bindings = SetterNamingPolicy::new("with", true, &companions).resolve(&fields);

  assert_eq!(method_names(&bindings), ["with", "with"]);
}

#[test]
fn test_companion_overload() {
  let set = hierarchy();
  let fields = FieldCollector::new(&set)
    .collect(&TypeId::from("Sub"), None, &BTreeSet::new())
    .unwrap()
    .fields;
  let companions = companions(&set);
  let bindings = SetterNamingPolicy::new("with", true, &companions).resolve(&fields);

  let with_companion: Vec<(&str, String)> = fields
    .iter()
    .zip(&bindings)
    .filter_map(|(field, binding)| {
      binding
        .companion
        .as_ref()
        .map(|companion| (field.builder_name.as_str(), companion.name()))
    })
    .collect();
  assert_eq!(with_companion, [("gadget", "GadgetBuilder".to_string())]);
  assert!(bindings.iter().filter(|binding| binding.has_delegate_overload()).count() == 1);
}
