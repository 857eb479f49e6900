//! `clear`, `starting_from` and `build`, plus the construction error of the
//! indirect strategy.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::zero::zero_value;
use crate::generator::{
  descriptor::FieldAccess,
  model::{ConstructionStrategy, EmissionModel, ModelField},
};

/// Every setter is generic over its argument, so absent values carry their type.
pub(crate) fn generate_clear(model: &EmissionModel) -> TokenStream {
  let vis = model.visibility.to_tokens();
  let calls = model.fields.iter().map(|field| {
    let method = &field.setter.method_name;
    let zero = zero_value(&field.field, true);
    quote! { .#method(#zero) }
  });

  quote! {
    /// Sets every field to its zero-equivalent: `0`, `false` or `'\0'` for scalars, `None` for everything else.
    #[must_use]
    #vis fn clear(self) -> Self {
      self #(#calls)*
    }
  }
}

pub(crate) fn generate_starting_from(model: &EmissionModel) -> TokenStream {
  let vis = model.visibility.to_tokens();
  let target = model.target_ident();

  let reset_tracking = if model.is_sparse() {
    quote! { self.fields_to_set.clear(); }
  } else {
    quote! {}
  };
  let replace_result = if model.construction.is_indirect() {
    quote! { self.result = Some(instance); }
  } else {
    quote! { self.result = instance; }
  };

  quote! {
    /// Continues building from an existing instance.
    ///
    /// Stored values are cleared and only fields set after this call are written by `build`.
    /// Passing `None` leaves the builder unchanged.
    #[must_use]
    #vis fn starting_from(mut self, instance: impl Into<Option<#target>>) -> Self {
      if let Some(instance) = instance.into() {
        self = self.clear();
        #reset_tracking
        #replace_result
      }
      self
    }
  }
}

pub(crate) fn generate_build(model: &EmissionModel) -> TokenStream {
  let vis = model.visibility.to_tokens();
  let target = model.target_ident();
  let result = format_ident!("result");
  let injections: Vec<TokenStream> = model
    .fields
    .iter()
    .map(|field| generate_injection(model, field, &result))
    .collect();
  let binding = if injections.is_empty() {
    quote! { let #result }
  } else {
    quote! { let mut #result }
  };

  let lenient_doc = if model.fields.iter().any(|field| field.access == FieldAccess::Setter) {
    quote! {
      ///
      /// A field whose setter rejects the value is reported on stderr and skipped; the
      /// remaining fields are still written.
    }
  } else {
    quote! {}
  };

  match &model.construction {
    ConstructionStrategy::Direct => quote! {
      /// Writes the stored fields into the result and returns it.
      #lenient_doc
      #vis fn build(self) -> #target {
        #binding = self.result;
        #(#injections)*
        #result
      }
    },
    ConstructionStrategy::Indirect { constructor } => {
      let error = model.error_ident();
      let constructor_doc = format!(
        " Without a seeded instance the result is created by `{}`; its failure is returned as an error.",
        quote! { #constructor }.to_string().replace(' ', "")
      );
      quote! {
        /// Writes the stored fields into the result and returns it.
        ///
        #[doc = #constructor_doc]
        #lenient_doc
        #vis fn build(self) -> Result<#target, #error> {
          #binding = match self.result {
            Some(instance) => instance,
            None => #constructor().map_err(|error| #error::Construction(error.to_string()))?,
          };
          #(#injections)*
          Ok(#result)
        }
      }
    }
  }
}

/// Writes one stored field into `result`, guarded by the tracking set under the sparse policy.
fn generate_injection(model: &EmissionModel, field: &ModelField, result: &syn::Ident) -> TokenStream {
  let slot = &field.builder_name;

  let write = match field.access {
    FieldAccess::Field => {
      let place = field.field_place(result);
      quote! { #place = self.#slot; }
    }
    FieldAccess::Setter => {
      let level = field.level_place(result);
      let setter = format_ident!("set_{}", field.field.name);
      let message = format!(
        "{}: failed to inject `{}`: {{error}}",
        model.builder_name,
        field.qualified_name()
      );
      quote! {
        if let Err(error) = #level.#setter(self.#slot) {
          eprintln!(#message);
        }
      }
    }
  };

  if model.is_sparse() {
    let key = slot.as_str();
    quote! {
      if self.fields_to_set.contains(#key) {
        #write
      }
    }
  } else {
    write
  }
}

pub(crate) fn generate_error_type(model: &EmissionModel) -> TokenStream {
  if !model.construction.is_indirect() {
    return quote! {};
  }

  let vis = model.visibility.to_tokens();
  let error = model.error_ident();
  let message = format!("failed to construct `{}`: {{reason}}", model.target);
  let doc = format!(" Error returned by `{}::build`.", model.builder_name);

  quote! {
    #[doc = #doc]
    #[derive(Debug, Clone, PartialEq, Eq)]
    #vis enum #error {
      /// The constructor of the target returned an error.
      Construction(String),
    }

    impl std::fmt::Display for #error {
      fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
          Self::Construction(reason) => write!(f, #message),
        }
      }
    }

    impl std::error::Error for #error {}
  }
}
