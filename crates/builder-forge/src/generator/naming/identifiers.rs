use std::{
  collections::{BTreeSet, HashSet},
  sync::LazyLock,
};

use any_ascii::any_ascii;
use inflections::Inflect;
use proc_macro2::Span;
use regex::Regex;
use syn::Ident;

pub(crate) static FORBIDDEN_IDENTIFIERS: LazyLock<HashSet<&str>> = LazyLock::new(|| {
  [
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for", "if", "impl", "in",
    "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "async", "await", "dyn", "try", "abstract", "become", "box", "do",
    "final", "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "gen", "self", "Self",
  ]
  .into_iter()
  .collect()
});

// Keywords that cannot be written as raw identifiers.
static NON_RAW_KEYWORDS: LazyLock<HashSet<&str>> =
  LazyLock::new(|| ["crate", "self", "Self", "super"].into_iter().collect());

static INVALID_CHARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_]+").unwrap());
static MULTI_UNDERSCORE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").unwrap());

/// Transliterates to ASCII, replaces invalid characters with underscores, collapses
/// consecutive underscores, and trims any leading or trailing underscores.
pub(crate) fn sanitize(input: &str) -> String {
  if input.is_empty() {
    return String::new();
  }

  let ascii = any_ascii(input);
  let replaced = INVALID_CHARS_RE.replace_all(&ascii, "_");
  let collapsed = MULTI_UNDERSCORE_RE.replace_all(&replaced, "_");

  collapsed.trim_matches('_').to_string()
}

/// Strips a raw identifier prefix, so `r#type` and `type` name the same field.
pub(crate) fn unraw(name: &str) -> &str {
  name.strip_prefix("r#").unwrap_or(name)
}

/// Returns true when `name` can be used verbatim as a Rust identifier once keywords are escaped.
pub(crate) fn is_plain_identifier(name: &str) -> bool {
  let name = unraw(name);
  !name.is_empty()
    && !name.starts_with(|c: char| c.is_ascii_digit())
    && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    && name.chars().any(|c| c != '_')
}

/// Converts a descriptor name into the `snake_case` form used for builder-internal identifiers.
///
/// Keywords are kept as-is here; [`ident`] escapes them when tokens are produced.
pub(crate) fn to_snake_identifier(name: &str) -> String {
  let mut snake = sanitize(unraw(name)).to_snake_case();
  if snake.is_empty() {
    return "field".to_string();
  }
  if snake.starts_with(|c: char| c.is_ascii_digit()) {
    snake.insert(0, '_');
  }
  snake
}

/// Converts a `snake_case` identifier into `PascalCase`, used for generated trait names.
pub(crate) fn to_pascal_identifier(name: &str) -> String {
  let pascal = sanitize(unraw(name)).to_pascal_case();
  if pascal.is_empty() { "Unnamed".to_string() } else { pascal }
}

/// Ensures a name is unique within a set of used names, appending a numeric suffix if needed.
pub(crate) fn ensure_unique(base_name: &str, used_names: &BTreeSet<String>) -> String {
  if !used_names.contains(base_name) {
    return base_name.to_string();
  }
  let mut i = 2;
  loop {
    let new_name = format!("{base_name}_{i}");
    if !used_names.contains(&new_name) {
      return new_name;
    }
    i += 1;
  }
}

/// Builds an identifier token, escaping keywords with `r#` where the language allows it
/// and with a trailing underscore where it does not.
pub(crate) fn ident(name: &str) -> Ident {
  let name = unraw(name);
  if NON_RAW_KEYWORDS.contains(name) {
    return Ident::new(&format!("{name}_"), Span::call_site());
  }
  if FORBIDDEN_IDENTIFIERS.contains(name) {
    return Ident::new_raw(name, Span::call_site());
  }
  Ident::new(name, Span::call_site())
}
