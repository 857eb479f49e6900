use std::collections::BTreeMap;

use indexmap::IndexMap;
use itertools::Itertools;
use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::{
  config::CompanionBuilder,
  model::{BuilderFieldName, EmissionModel, MethodName, ModelField},
  naming::identifiers::{ident, to_pascal_identifier},
};

/// Fields sharing one setter method name.
pub(crate) struct MethodGroup<'a> {
  pub name: &'a MethodName,
  pub fields: Vec<&'a ModelField>,
}

impl MethodGroup<'_> {
  /// Overloaded methods dispatch on an argument trait instead of taking a concrete type.
  pub fn is_overloaded(&self) -> bool {
    self.fields.len() > 1 || self.fields.iter().any(|field| field.setter.has_delegate_overload())
  }
}

pub(crate) fn method_groups(model: &EmissionModel) -> Vec<MethodGroup<'_>> {
  let mut groups: IndexMap<&MethodName, Vec<&ModelField>> = IndexMap::new();
  for field in &model.fields {
    groups.entry(&field.setter.method_name).or_default().push(field);
  }
  groups
    .into_iter()
    .map(|(name, fields)| MethodGroup { name, fields })
    .collect()
}

pub(crate) fn arg_trait_ident(model: &EmissionModel, method: &MethodName) -> syn::Ident {
  ident(&format!("{}{}Arg", model.builder_name, to_pascal_identifier(method.as_str())))
}

#[derive(Debug, Clone, Copy)]
enum OverloadKind<'a> {
  /// The storage type itself, stored as-is.
  Storage,
  /// The inner type of an optional slot, stored as `Some`.
  Value,
  /// A companion builder, stored as the result of its `build()`.
  Companion(&'a CompanionBuilder),
}

struct Overload<'a> {
  field: &'a ModelField,
  kind: OverloadKind<'a>,
}

impl Overload<'_> {
  fn param(&self) -> TokenStream {
    match self.kind {
      OverloadKind::Storage => self.field.field.storage_type(),
      OverloadKind::Value => {
        let ty = &self.field.field.semantic_type;
        quote! { #ty }
      }
      OverloadKind::Companion(companion) => quote! { #companion },
    }
  }

  /// Readable parameter type, e.g. `Option<Vec<String>>`.
  fn label(&self) -> String {
    let ty = self.field.field.semantic_type.display_name();
    match self.kind {
      OverloadKind::Storage if !self.field.field.primitive_like => format!("Option<{ty}>"),
      OverloadKind::Storage | OverloadKind::Value => ty,
      OverloadKind::Companion(companion) => companion.name(),
    }
  }
}

/// Parameter types accepted by one overloaded method.
///
/// Storage types come first, then companion builders, then bare inner types of
/// optional slots. A parameter type already claimed by an earlier overload is
/// skipped, so every type dispatches to exactly one field.
fn overloads<'a>(group: &MethodGroup<'a>) -> Vec<Overload<'a>> {
  let mut candidates = vec![];
  for &field in &group.fields {
    candidates.push(Overload {
      field,
      kind: OverloadKind::Storage,
    });
  }
  for &field in &group.fields {
    if let Some(companion) = &field.setter.companion {
      candidates.push(Overload {
        field,
        kind: OverloadKind::Companion(companion),
      });
    }
  }
  for field in group.fields.iter().copied().filter(|field| !field.field.primitive_like) {
    candidates.push(Overload {
      field,
      kind: OverloadKind::Value,
    });
  }

  candidates
    .into_iter()
    .unique_by(|overload| overload.param().to_string())
    .collect()
}

/// Parameter types each field's setter accepts, keyed by builder field name.
///
/// A plain setter accepts `T`, or `Option<T>` and `T` for optional slots.
/// Fields of an overloaded method accept only the overloads dispatching to them.
pub(crate) fn accepted_parameters(model: &EmissionModel) -> BTreeMap<BuilderFieldName, Vec<String>> {
  let mut accepted: BTreeMap<BuilderFieldName, Vec<String>> = BTreeMap::new();
  for group in method_groups(model) {
    if group.is_overloaded() {
      for overload in overloads(&group) {
        accepted
          .entry(overload.field.builder_name.clone())
          .or_default()
          .push(overload.label());
      }
    } else {
      for field in &group.fields {
        let ty = field.field.semantic_type.display_name();
        let labels = if field.field.primitive_like {
          vec![ty]
        } else {
          vec![format!("Option<{ty}>"), ty]
        };
        accepted.insert(field.builder_name.clone(), labels);
      }
    }
  }
  accepted
}

pub(crate) struct SetterGenerator<'a> {
  model: &'a EmissionModel,
  groups: Vec<MethodGroup<'a>>,
}

impl<'a> SetterGenerator<'a> {
  pub(crate) fn new(model: &'a EmissionModel) -> Self {
    Self {
      model,
      groups: method_groups(model),
    }
  }

  pub(crate) fn generate_methods(&self) -> Vec<TokenStream> {
    self
      .groups
      .iter()
      .map(|group| {
        if group.is_overloaded() {
          self.generate_dispatching_setter(group)
        } else {
          self.generate_plain_setter(group.fields[0])
        }
      })
      .collect()
  }

  pub(crate) fn generate_arg_traits(&self) -> Vec<TokenStream> {
    self
      .groups
      .iter()
      .filter(|group| group.is_overloaded())
      .map(|group| self.generate_arg_trait(group))
      .collect()
  }

  fn generate_plain_setter(&self, field: &ModelField) -> TokenStream {
    let vis = self.model.visibility.to_tokens();
    let method = &field.setter.method_name;
    let param = &field.builder_name;
    let doc = format!(" Sets `{}`.", field.qualified_name());
    let receiver = quote! { self };

    let (param_type, store) = if field.field.primitive_like {
      let ty = field.field.storage_type();
      (ty, store_value(self.model, field, &receiver, &quote! { #param }))
    } else {
      let ty = &field.field.semantic_type;
      (
        quote! { impl Into<Option<#ty>> },
        store_value(self.model, field, &receiver, &quote! { #param.into() }),
      )
    };

    quote! {
      #[doc = #doc]
      #vis fn #method(mut self, #param: #param_type) -> Self {
        #store
        self
      }
    }
  }

  fn generate_dispatching_setter(&self, group: &MethodGroup<'_>) -> TokenStream {
    let vis = self.model.visibility.to_tokens();
    let method = group.name;
    let arg_trait = arg_trait_ident(self.model, group.name);
    let targets = group
      .fields
      .iter()
      .map(|field| format!("`{}`", field.qualified_name()))
      .join(", ");
    let doc = format!(" Sets {targets}, selected by the argument type.");

    quote! {
      #[doc = #doc]
      #vis fn #method<A: #arg_trait>(mut self, arg: A) -> Self {
        arg.apply(&mut self);
        self
      }
    }
  }

  fn generate_arg_trait(&self, group: &MethodGroup<'_>) -> TokenStream {
    let vis = self.model.visibility.to_tokens();
    let builder = self.model.builder_ident();
    let arg_trait = arg_trait_ident(self.model, group.name);
    let doc = format!(" Argument types accepted by `{}::{}`.", self.model.builder_name, group.name);
    let receiver = quote! { builder };

    let impls = overloads(group).into_iter().map(|overload| {
      let param = overload.param();
      let value = match overload.kind {
        OverloadKind::Storage => quote! { self },
        OverloadKind::Value => quote! { Some(self) },
        OverloadKind::Companion(_) if overload.field.field.primitive_like => quote! { self.build() },
        OverloadKind::Companion(_) => quote! { Some(self.build()) },
      };
      let store = store_value(self.model, overload.field, &receiver, &value);

      quote! {
        impl #arg_trait for #param {
          fn apply(self, builder: &mut #builder) {
            #store
          }
        }
      }
    });

    quote! {
      #[doc = #doc]
      #vis trait #arg_trait {
        /// Stores the argument in the builder slot it belongs to.
        fn apply(self, builder: &mut #builder);
      }

      #(#impls)*
    }
  }
}

/// Assigns `value` to the slot of `field` and, under the sparse policy, marks it as set.
pub(crate) fn store_value(
  model: &EmissionModel,
  field: &ModelField,
  receiver: &TokenStream,
  value: &TokenStream,
) -> TokenStream {
  let slot = &field.builder_name;
  let mark = if model.is_sparse() {
    let key = slot.as_str();
    quote! { #receiver.fields_to_set.insert(#key); }
  } else {
    quote! {}
  };

  quote! {
    #receiver.#slot = #value;
    #mark
  }
}
