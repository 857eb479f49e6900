use std::collections::BTreeMap;

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::model::EmissionModel;

pub mod builder;
pub mod lifecycle;
pub mod setters;
pub mod zero;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
  #[default]
  Public,
  Crate,
  File,
}

impl Visibility {
  pub fn parse(s: &str) -> Option<Self> {
    match s {
      "public" => Some(Visibility::Public),
      "crate" => Some(Visibility::Crate),
      "file" => Some(Visibility::File),
      _ => None,
    }
  }

  pub(crate) fn to_tokens(self) -> TokenStream {
    match self {
      Visibility::Public => quote! { pub },
      Visibility::Crate => quote! { pub(crate) },
      Visibility::File => quote! {},
    }
  }
}

/// Renders the complete builder module for `model`.
pub(crate) fn generate(model: &EmissionModel) -> TokenStream {
  let builder_ident = model.builder_ident();
  let uses = generate_uses(model);
  let error_type = lifecycle::generate_error_type(model);
  let builder_struct = builder::generate_builder_struct(model);
  let factory = builder::generate_factory(model);
  let default_impl = builder::generate_default_impl(model);

  let setter_generator = setters::SetterGenerator::new(model);
  let setter_methods = setter_generator.generate_methods();
  let arg_traits = setter_generator.generate_arg_traits();

  let clear = lifecycle::generate_clear(model);
  let starting_from = lifecycle::generate_starting_from(model);
  let build = lifecycle::generate_build(model);

  quote! {
    #(#uses)*

    #builder_struct

    impl #builder_ident {
      #factory
      #(#setter_methods)*
      #clear
      #starting_from
      #build
    }

    #default_impl

    #(#arg_traits)*

    #error_type
  }
}

/// `use` items of the generated file, deduplicated and sorted.
fn generate_uses(model: &EmissionModel) -> Vec<TokenStream> {
  let mut trees: BTreeMap<String, TokenStream> = BTreeMap::new();
  let mut add = |tree: TokenStream| {
    trees.entry(tree.to_string()).or_insert(tree);
  };

  if model.is_sparse() {
    add(quote! { std::collections::BTreeSet });
  }
  if let Some(path) = &model.target_path
    && path.segments.len() > 1
  {
    add(path.to_token_stream());
  }
  for field in &model.fields {
    if let Some(import) = field.setter.companion.as_ref().and_then(|companion| companion.import()) {
      add(import.to_token_stream());
    }
  }
  for tree in &model.uses {
    add(tree.to_token_stream());
  }

  trees.into_values().map(|tree| quote! { use #tree; }).collect()
}
