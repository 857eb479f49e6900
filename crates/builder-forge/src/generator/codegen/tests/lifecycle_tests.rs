use quote::quote;

use crate::generator::{
  codegen::lifecycle,
  config::{Construction, GeneratorConfig, OverwritePolicy},
  model::EmissionModel,
  tests::support::{account, assert_contains_tokens, assert_lacks_tokens, compact, resolve, sub_model},
};

fn account_model(overwrite_policy: OverwritePolicy, constructor: Option<&str>) -> EmissionModel {
  let descriptors = account();
  let config = GeneratorConfig::builder()
    .target("Account")
    .overwrite_policy(overwrite_policy)
    .construction(Construction::Indirect {
      constructor: constructor.map(str::to_string),
    })
    .build();
  resolve(&descriptors, &config)
}

#[test]
fn test_clear_passes_zero_values_to_primary_setters() {
  let code = lifecycle::generate_clear(&sub_model());

  assert_contains_tokens(&code, &quote! { pub fn clear(self) -> Self });
  assert_contains_tokens(
    &code,
    &quote! {
      self.with_here_in_sub(None::<String>)
        .with_there_in_sub(None::<String>)
        .with(None::<Vec<String>>)
        .with('\0')
    },
  );
  assert_contains_tokens(&code, &quote! { .with(None::<i32>).with_here_in_base(None::<String>) });
  assert_contains_tokens(&code, &quote! { .with(None::<Gadget>) });
}

#[test]
fn test_clear_uses_suffixed_literals() {
  let code = lifecycle::generate_clear(&account_model(OverwritePolicy::Sparse, None));

  assert_contains_tokens(
    &code,
    &quote! {
      self.with_owner(None::<String>).with(false).with(0i64).with_currency(None::<String>)
    },
  );
}

#[test]
fn test_starting_from_resets_tracking_under_sparse_policy() {
  let code = lifecycle::generate_starting_from(&sub_model());

  assert_contains_tokens(
    &code,
    &quote! {
      pub fn starting_from(mut self, instance: impl Into<Option<Sub>>) -> Self {
        if let Some(instance) = instance.into() {
          self = self.clear();
          self.fields_to_set.clear();
          self.result = instance;
        }
        self
      }
    },
  );
}

#[test]
fn test_starting_from_seeds_indirect_result() {
  let code = lifecycle::generate_starting_from(&account_model(OverwritePolicy::Total, None));

  assert_contains_tokens(
    &code,
    &quote! {
      if let Some(instance) = instance.into() {
        self = self.clear();
        self.result = Some(instance);
      }
    },
  );
  assert_lacks_tokens(&code, &quote! { fields_to_set });
}

#[test]
fn test_build_guards_every_field_under_sparse_policy() {
  let code = lifecycle::generate_build(&sub_model());

  assert_contains_tokens(&code, &quote! { pub fn build(self) -> Sub });
  assert_contains_tokens(
    &code,
    &quote! {
      let mut result = self.result;
      if self.fields_to_set.contains("here_in_sub") {
        result.here = self.here_in_sub;
      }
    },
  );
  assert_contains_tokens(
    &code,
    &quote! {
      if self.fields_to_set.contains("there_in_base") {
        result.base.there = self.there_in_base;
      }
    },
  );
  assert_contains_tokens(
    &code,
    &quote! {
      if self.fields_to_set.contains("gadget") {
        result.base.gadget = self.gadget;
      }
      result
    },
  );
  assert_eq!(compact(&code).matches("fields_to_set.contains").count(), 8);
}

#[test]
fn test_build_with_indirect_construction_and_setter_access() {
  let code = lifecycle::generate_build(&account_model(OverwritePolicy::Total, None));

  assert_contains_tokens(&code, &quote! { pub fn build(self) -> Result<Account, AccountBuilderError> });
  assert_contains_tokens(
    &code,
    &quote! {
      let mut result = match self.result {
        Some(instance) => instance,
        None => Account::try_new().map_err(|error| AccountBuilderError::Construction(error.to_string()))?,
      };
      result.owner = self.owner;
      result.active = self.active;
      if let Err(error) = result.ledger.set_balance(self.balance) {
        eprintln!("AccountBuilder: failed to inject `Ledger::balance`: {error}");
      }
    },
  );
  assert_contains_tokens(&code, &quote! { result.ledger.set_currency(self.currency) });
  assert_contains_tokens(&code, &quote! { Ok(result) });
  assert_lacks_tokens(&code, &quote! { fields_to_set });
}

#[test]
fn test_build_uses_configured_constructor() {
  let code = lifecycle::generate_build(&account_model(OverwritePolicy::Sparse, Some("crate::domain::Account::open")));

  assert_contains_tokens(&code, &quote! { None => crate::domain::Account::open().map_err });
  assert_contains_tokens(
    &code,
    &quote! {
      if self.fields_to_set.contains("balance") {
        if let Err(error) = result.ledger.set_balance(self.balance) {
          eprintln!("AccountBuilder: failed to inject `Ledger::balance`: {error}");
        }
      }
    },
  );
  let docs = code.to_string();
  assert!(docs.contains("created by `crate::domain::Account::open`"), "got: {docs}");
}

#[test]
fn test_build_without_fields_needs_no_mut_binding() {
  let mut model = sub_model();
  model.fields.clear();
  let code = lifecycle::generate_build(&model);

  assert_contains_tokens(&code, &quote! { let result = self.result; result });
}

#[test]
fn test_error_type_only_for_indirect_construction() {
  assert!(lifecycle::generate_error_type(&sub_model()).is_empty());

  let code = lifecycle::generate_error_type(&account_model(OverwritePolicy::Sparse, None));
  assert_contains_tokens(&code, &quote! { pub enum AccountBuilderError });
  assert_contains_tokens(&code, &quote! { Construction(String), });
  assert_contains_tokens(&code, &quote! { impl std::fmt::Display for AccountBuilderError });
  assert_contains_tokens(&code, &quote! { impl std::error::Error for AccountBuilderError {} });
}
