use proc_macro2::TokenStream;
use quote::quote;

use super::zero::zero_value;
use crate::generator::{
  config::OverwritePolicy,
  descriptor::FieldAccess,
  model::{ConstructionStrategy, EmissionModel},
};

pub(crate) fn generate_builder_struct(model: &EmissionModel) -> TokenStream {
  let vis = model.visibility.to_tokens();
  let builder = model.builder_ident();
  let target = model.target_ident();
  let docs = builder_docs(model);

  let result_type = match model.construction {
    ConstructionStrategy::Direct => quote! { #target },
    ConstructionStrategy::Indirect { .. } => quote! { Option<#target> },
  };

  let slots = model.fields.iter().map(|field| {
    let slot = &field.builder_name;
    let ty = field.field.storage_type();
    quote! { #slot: #ty }
  });

  let tracking = if model.is_sparse() {
    quote! { fields_to_set: BTreeSet<&'static str>, }
  } else {
    quote! {}
  };

  quote! {
    #(#docs)*
    #vis struct #builder {
      result: #result_type,
      #(#slots,)*
      #tracking
    }
  }
}

fn builder_docs(model: &EmissionModel) -> Vec<TokenStream> {
  let mut lines = vec![
    format!(" Fluent builder for `{}`.", model.target),
    String::new(),
  ];

  lines.push(match model.overwrite_policy {
    OverwritePolicy::Sparse => {
      " `build` writes only the fields whose setter was called, so values of a seeded instance survive.".to_string()
    }
    OverwritePolicy::Total => " `build` writes every field, using its zero-equivalent when it was never set.".to_string(),
  });

  if model.fields.iter().any(|field| field.access == FieldAccess::Setter) {
    lines.push(String::new());
    lines.push(
      " Fields behind a setter are injected leniently: a rejected value is logged and skipped, which can leave"
        .to_string(),
    );
    lines.push(" the result partially populated.".to_string());
  }

  lines.into_iter().map(|line| quote! { #[doc = #line] }).collect()
}

pub(crate) fn generate_factory(model: &EmissionModel) -> TokenStream {
  let vis = model.visibility.to_tokens();
  let target = model.target_ident();

  let result = match model.construction {
    ConstructionStrategy::Direct => quote! { #target::default() },
    ConstructionStrategy::Indirect { .. } => quote! { None },
  };

  let slots = model.fields.iter().map(|field| {
    let slot = &field.builder_name;
    let zero = zero_value(&field.field, false);
    quote! { #slot: #zero }
  });

  let tracking = if model.is_sparse() {
    quote! { fields_to_set: BTreeSet::new(), }
  } else {
    quote! {}
  };

  quote! {
    /// Creates a builder holding zero-equivalents for every field.
    #[must_use]
    #vis fn create() -> Self {
      Self {
        result: #result,
        #(#slots,)*
        #tracking
      }
    }
  }
}

pub(crate) fn generate_default_impl(model: &EmissionModel) -> TokenStream {
  let builder = model.builder_ident();

  quote! {
    impl Default for #builder {
      fn default() -> Self {
        Self::create()
      }
    }
  }
}
