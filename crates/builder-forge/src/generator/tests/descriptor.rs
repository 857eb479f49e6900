use super::support::{descriptors, hierarchy};
use crate::generator::{
  descriptor::{DescriptorSet, FieldAccess, Scalar, TypeId, TypeRef},
  error::DescriptorError,
};

fn load_error(json: &str) -> DescriptorError {
  DescriptorSet::from_json(json.as_bytes()).expect_err("descriptor should be rejected")
}

#[test]
fn test_fixture_hierarchy() {
  let set = hierarchy();
  let sub = set.get(&TypeId::from("Sub")).unwrap();

  assert_eq!(sub.parent, Some(TypeId::from("Base")));
  assert_eq!(sub.parent_field.as_deref(), Some("base"));
  assert_eq!(sub.access, FieldAccess::Field);
  assert_eq!(sub.fields.len(), 4);
  assert!(sub.fields.iter().all(|field| field.declaring_type == sub.id));

  let names: Vec<&str> = set
    .ancestry(&TypeId::from("TripleSub"))
    .iter()
    .map(|level| level.id.as_str())
    .collect();
  assert_eq!(names, ["TripleSub", "Sub", "Base"]);
  assert!(set.ancestry(&TypeId::from("Missing")).is_empty());
}

#[test]
fn test_primitive_like_fields() {
  let set = hierarchy();
  let base = set.get(&TypeId::from("Base")).unwrap();
  let primitive: Vec<(&str, bool)> = base
    .fields
    .iter()
    .map(|field| (field.name.as_str(), field.primitive_like))
    .collect();

  assert_eq!(
    primitive,
    [("there", false), ("here", false), ("ratio", true), ("gadget", false)]
  );
}

#[test]
fn test_type_ref_normalizes_whitespace() {
  let spaced = TypeRef::parse("Vec< String >").unwrap();
  let tight = TypeRef::parse("Vec<String>").unwrap();
  assert_eq!(spaced, tight);
  assert_eq!(spaced.display_name(), "Vec<String>");
  assert_eq!(TypeRef::parse("std::string::String").unwrap().display_name(), "std::string::String");
  assert!(TypeRef::parse("Vec<").is_err());
}

#[test]
fn test_scalar_detection() {
  let cases = [
    ("i32", Some(Scalar::I32)),
    ("u8", Some(Scalar::U8)),
    ("f64", Some(Scalar::F64)),
    ("bool", Some(Scalar::Bool)),
    ("char", Some(Scalar::Char)),
    ("String", None),
    ("Option<i32>", None),
    ("I32", None),
  ];
  for (ty, expected) in cases {
    assert_eq!(TypeRef::parse(ty).unwrap().scalar(), expected, "failed for {ty}");
  }
}

#[test]
fn test_same_name_at_two_levels_is_two_fields() {
  let set = hierarchy();
  let base_here = set.get(&TypeId::from("Base")).unwrap().fields[1].clone();
  let sub_here = set.get(&TypeId::from("Sub")).unwrap().fields[0].clone();

  assert_eq!(base_here.name, sub_here.name);
  assert_ne!(base_here, sub_here);
  assert_eq!(base_here.semantic_key(), sub_here.semantic_key());
}

#[test]
fn test_uses_and_companions() {
  let set = descriptors(
    r#"{
      "uses": ["crate::domain::{Gadget, Sub}"],
      "types": [{ "name": "Sub" }],
      "companions": { "Gadget": "GadgetBuilder" }
    }"#,
  );
  assert_eq!(set.uses().len(), 1);
  assert_eq!(set.companions().collect::<Vec<_>>(), [("Gadget", "GadgetBuilder")]);
}

#[test]
fn test_rejects_unknown_parent() {
  let error = load_error(r#"{ "types": [{ "name": "Sub", "parent": "Base", "parent_field": "base" }] }"#);
  assert!(matches!(error, DescriptorError::UnknownParent { ref parent, .. } if parent == "Base"));
}

#[test]
fn test_rejects_missing_parent_field() {
  let error = load_error(r#"{ "types": [{ "name": "Base" }, { "name": "Sub", "parent": "Base" }] }"#);
  assert!(matches!(error, DescriptorError::MissingParentField(ref name) if name == "Sub"));
}

#[test]
fn test_rejects_parent_cycle() {
  let error = load_error(
    r#"{ "types": [
      { "name": "A", "parent": "B", "parent_field": "b" },
      { "name": "B", "parent": "A", "parent_field": "a" }
    ] }"#,
  );
  assert!(matches!(error, DescriptorError::ParentCycle(_)));
}

#[test]
fn test_rejects_duplicates() {
  let error = load_error(r#"{ "types": [{ "name": "Sub" }, { "name": "Sub" }] }"#);
  assert!(matches!(error, DescriptorError::DuplicateType(ref name) if name == "Sub"));

  let error = load_error(
    r#"{ "types": [{ "name": "Sub", "fields": [
      { "name": "here", "type": "String" },
      { "name": "r#here", "type": "i32" }
    ] }] }"#,
  );
  assert!(matches!(error, DescriptorError::DuplicateField { ref field, .. } if field == "here"));
}

#[test]
fn test_rejects_invalid_names_and_types() {
  let error = load_error(r#"{ "types": [{ "name": "Sub<T>" }] }"#);
  assert!(matches!(error, DescriptorError::InvalidTypeName(_)));

  let error = load_error(r#"{ "types": [{ "name": "Sub", "fields": [{ "name": "my-field", "type": "i32" }] }] }"#);
  assert!(matches!(error, DescriptorError::InvalidFieldName { ref field, .. } if field == "my-field"));

  let error = load_error(r#"{ "types": [{ "name": "Sub", "fields": [{ "name": "list", "type": "Vec<" }] }] }"#);
  assert!(matches!(error, DescriptorError::InvalidFieldType { ref ty, .. } if ty == "Vec<"));

  let error = load_error(r#"{ "types": [{ "name": "Sub", "path": "crate::" }] }"#);
  assert!(matches!(error, DescriptorError::InvalidPath { .. }));
}

#[test]
fn test_rejects_unknown_keys_and_bad_json() {
  assert!(matches!(
    load_error(r#"{ "types": [{ "name": "Sub", "superclass": "Base" }] }"#),
    DescriptorError::Json(_)
  ));
  assert!(matches!(load_error("{ not json"), DescriptorError::Json(_)));
}
