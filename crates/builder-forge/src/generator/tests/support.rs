use proc_macro2::TokenStream;

use crate::generator::{
  config::GeneratorConfig, descriptor::DescriptorSet, model::EmissionModel, orchestrator::Orchestrator,
};

pub(crate) const HIERARCHY_JSON: &str = include_str!("../../../fixtures/hierarchy.json");
pub(crate) const ACCOUNT_JSON: &str = include_str!("../../../fixtures/account.json");

pub(crate) fn descriptors(json: &str) -> DescriptorSet {
  DescriptorSet::from_json(json.as_bytes()).expect("failed to parse test descriptors")
}

pub(crate) fn hierarchy() -> DescriptorSet {
  descriptors(HIERARCHY_JSON)
}

pub(crate) fn account() -> DescriptorSet {
  descriptors(ACCOUNT_JSON)
}

pub(crate) fn resolve(descriptors: &DescriptorSet, config: &GeneratorConfig) -> EmissionModel {
  Orchestrator::new(descriptors, config)
    .resolve()
    .expect("failed to resolve test model")
    .0
}

/// The `Sub` model with the companions declared in the fixture.
pub(crate) fn sub_model() -> EmissionModel {
  let descriptors = hierarchy();
  let config = GeneratorConfig::builder()
    .target("Sub")
    .companions(companions(&descriptors))
    .build();
  resolve(&descriptors, &config)
}

pub(crate) fn companions(descriptors: &DescriptorSet) -> crate::generator::config::CompanionBuilderMap {
  crate::generator::config::CompanionBuilderMap::from_sources(descriptors, []).expect("invalid fixture companions")
}

/// Token text without whitespace, so assertions do not depend on token spacing.
pub(crate) fn compact(tokens: &TokenStream) -> String {
  tokens.to_string().split_whitespace().collect()
}

pub(crate) fn assert_contains_tokens(haystack: &TokenStream, needle: &TokenStream) {
  let haystack = compact(haystack);
  let needle = compact(needle);
  assert!(haystack.contains(&needle), "expected `{needle}` in `{haystack}`");
}

pub(crate) fn assert_lacks_tokens(haystack: &TokenStream, needle: &TokenStream) {
  let haystack = compact(haystack);
  let needle = compact(needle);
  assert!(!haystack.contains(&needle), "unexpected `{needle}` in `{haystack}`");
}
