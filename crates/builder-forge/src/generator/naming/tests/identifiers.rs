use std::collections::BTreeSet;

use crate::generator::naming::identifiers::{
  ensure_unique, ident, is_plain_identifier, sanitize, to_pascal_identifier, to_snake_identifier,
};

#[test]
fn test_snake_identifiers() {
  let cases = [
    ("here", "here"),
    ("someChar", "some_char"),
    ("SomeChar", "some_char"),
    ("SubBuilder", "sub_builder"),
    ("r#type", "type"),
    ("foo-bar", "foo_bar"),
    ("", "field"),
    ("--", "field"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_snake_identifier(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_pascal_identifiers() {
  let cases = [
    ("with", "With"),
    ("with_here_in_sub", "WithHereInSub"),
    ("set", "Set"),
    ("", "Unnamed"),
  ];
  for (input, expected) in cases {
    assert_eq!(to_pascal_identifier(input), expected, "failed for input {input:?}");
  }
}

#[test]
fn test_sanitize() {
  assert_eq!(sanitize("héllo wörld"), "hello_world");
  assert_eq!(sanitize("__a..b__"), "a_b");
  assert_eq!(sanitize(""), "");
}

#[test]
fn test_plain_identifiers() {
  assert!(is_plain_identifier("here"));
  assert!(is_plain_identifier("r#type"));
  assert!(is_plain_identifier("_private"));
  assert!(!is_plain_identifier(""));
  assert!(!is_plain_identifier("_"));
  assert!(!is_plain_identifier("1st"));
  assert!(!is_plain_identifier("with-dash"));
  assert!(!is_plain_identifier("Vec<String>"));
}

#[test]
fn test_ident_escapes_keywords() {
  assert_eq!(ident("here").to_string(), "here");
  assert_eq!(ident("type").to_string(), "r#type");
  assert_eq!(ident("r#match").to_string(), "r#match");
  assert_eq!(ident("self").to_string(), "self_");
  assert_eq!(ident("crate").to_string(), "crate_");
}

#[test]
fn test_ensure_unique() {
  let used: BTreeSet<String> = ["here".to_string(), "here_2".to_string()].into_iter().collect();
  assert_eq!(ensure_unique("there", &used), "there");
  assert_eq!(ensure_unique("here", &used), "here_3");
}
