use quote::quote;

use crate::generator::{
  codegen::setters::{SetterGenerator, accepted_parameters, method_groups},
  config::{GeneratorConfig, OverwritePolicy},
  model::BuilderFieldName,
  tests::support::{assert_contains_tokens, assert_lacks_tokens, compact, descriptors, hierarchy, resolve, sub_model},
};

fn methods(model: &crate::generator::model::EmissionModel) -> proc_macro2::TokenStream {
  let methods = SetterGenerator::new(model).generate_methods();
  quote! { #(#methods)* }
}

fn arg_traits(model: &crate::generator::model::EmissionModel) -> proc_macro2::TokenStream {
  let traits = SetterGenerator::new(model).generate_arg_traits();
  quote! { #(#traits)* }
}

#[test]
fn test_method_groups_keep_first_appearance_order() {
  let model = sub_model();
  let groups = method_groups(&model);
  let summary: Vec<(&str, usize, bool)> = groups
    .iter()
    .map(|group| (group.name.as_str(), group.fields.len(), group.is_overloaded()))
    .collect();

  assert_eq!(
    summary,
    [
      ("with_here_in_sub", 1, false),
      ("with_there_in_sub", 1, false),
      ("with", 5, true),
      ("with_here_in_base", 1, false),
    ]
  );
}

#[test]
fn test_plain_setter_takes_optional_value() {
  let code = methods(&sub_model());

  assert_contains_tokens(
    &code,
    &quote! {
      pub fn with_here_in_sub(mut self, here_in_sub: impl Into<Option<String>>) -> Self {
        self.here_in_sub = here_in_sub.into();
        self.fields_to_set.insert("here_in_sub");
        self
      }
    },
  );
}

#[test]
fn test_plain_setter_for_primitive_under_total_policy() {
  let descriptors = hierarchy();
  let config = GeneratorConfig::builder()
    .target("Sub")
    .setter_prefix("set")
    .omit_field_name_for_unique_types(false)
    .overwrite_policy(OverwritePolicy::Total)
    .build();
  let code = methods(&resolve(&descriptors, &config));

  assert_contains_tokens(
    &code,
    &quote! {
      pub fn set_ratio(mut self, ratio: f64) -> Self {
        self.ratio = ratio;
        self
      }
    },
  );
  assert_lacks_tokens(&code, &quote! { fields_to_set });
  assert_lacks_tokens(&code, &quote! { <A: });
}

#[test]
fn test_bare_setter_dispatches_on_argument_type() {
  let code = methods(&sub_model());

  assert_contains_tokens(
    &code,
    &quote! {
      pub fn with<A: SubBuilderWithArg>(mut self, arg: A) -> Self {
        arg.apply(&mut self);
        self
      }
    },
  );
}

#[test]
fn test_arg_trait_impls() {
  let code = arg_traits(&sub_model());

  assert!(compact(&code).contains("pubtraitSubBuilderWithArg{"));
  assert_contains_tokens(&code, &quote! { fn apply(self, builder: &mut SubBuilder); });
  assert_contains_tokens(
    &code,
    &quote! {
      impl SubBuilderWithArg for Option<i32> {
        fn apply(self, builder: &mut SubBuilder) {
          builder.there_in_base = self;
          builder.fields_to_set.insert("there_in_base");
        }
      }
    },
  );
  assert_contains_tokens(
    &code,
    &quote! {
      impl SubBuilderWithArg for i32 {
        fn apply(self, builder: &mut SubBuilder) {
          builder.there_in_base = Some(self);
          builder.fields_to_set.insert("there_in_base");
        }
      }
    },
  );
  assert_contains_tokens(
    &code,
    &quote! {
      impl SubBuilderWithArg for char {
        fn apply(self, builder: &mut SubBuilder) {
          builder.some_char = self;
          builder.fields_to_set.insert("some_char");
        }
      }
    },
  );
  assert_contains_tokens(
    &code,
    &quote! {
      impl SubBuilderWithArg for GadgetBuilder {
        fn apply(self, builder: &mut SubBuilder) {
          builder.gadget = Some(self.build());
          builder.fields_to_set.insert("gadget");
        }
      }
    },
  );
}

#[test]
fn test_arg_trait_impls_are_unique_per_type() {
  let set = descriptors(
    r#"{ "types": [{ "name": "Sub", "fields": [
      { "name": "limit", "type": "i32", "nullable": true },
      { "name": "count", "type": "i32" }
    ] }] }"#,
  );
  let config = GeneratorConfig::builder().target("Sub").build();
  let code = compact(&arg_traits(&resolve(&set, &config)));

  assert_eq!(code.matches("implSubBuilderWithArgfori32{").count(), 1, "got: {code}");
  assert!(code.contains("implSubBuilderWithArgfori32{fnapply(self,builder:&mutSubBuilder){builder.count=self;"));
  assert!(code.contains("implSubBuilderWithArgforOption<i32>{fnapply(self,builder:&mutSubBuilder){builder.limit=self;"));
}

#[test]
fn test_named_setter_with_companion_is_trait_dispatched() {
  let set = descriptors(
    r#"{
      "types": [{ "name": "Sub", "fields": [
        { "name": "first", "type": "Gadget" },
        { "name": "second", "type": "Gadget" }
      ] }],
      "companions": { "Gadget": "GadgetBuilder" }
    }"#,
  );
  let config = GeneratorConfig::builder()
    .target("Sub")
    .companions(crate::generator::tests::support::companions(&set))
    .build();
  let model = resolve(&set, &config);
  let code = methods(&model);
  let traits = arg_traits(&model);

  assert_contains_tokens(&code, &quote! { pub fn with_first<A: SubBuilderWithFirstArg>(mut self, arg: A) -> Self });
  assert_contains_tokens(&traits, &quote! { impl SubBuilderWithSecondArg for GadgetBuilder });
  assert_contains_tokens(&traits, &quote! { impl SubBuilderWithSecondArg for Gadget });
  assert_contains_tokens(&traits, &quote! { impl SubBuilderWithSecondArg for Option<Gadget> });
}

#[test]
fn test_no_arg_traits_without_overloads() {
  let descriptors = hierarchy();
  let config = GeneratorConfig::builder()
    .target("Sub")
    .omit_field_name_for_unique_types(false)
    .build();
  let model = resolve(&descriptors, &config);

  assert!(SetterGenerator::new(&model).generate_arg_traits().is_empty());
}

#[test]
fn test_accepted_parameters_follow_overloads() {
  let model = sub_model();
  let accepted = accepted_parameters(&model);
  let types = |slot: &str| accepted[&BuilderFieldName::new(slot)].clone();

  assert_eq!(types("here_in_sub"), ["Option<String>", "String"]);
  assert_eq!(types("some_char"), ["char"]);
  assert_eq!(types("list"), ["Option<Vec<String>>", "Vec<String>"]);
  assert_eq!(types("there_in_base"), ["Option<i32>", "i32"]);
  assert_eq!(types("gadget"), ["Option<Gadget>", "GadgetBuilder", "Gadget"]);
}
