//! Orchestration of the builder generation pipeline.
//!
//! The `Orchestrator` runs collection, setter naming, model resolution and
//! emission for one target type and hands back formatted source together with
//! statistics about the run. It performs no I/O; see [`super::output`] for
//! writing the result.
//!
//! ## Usage
//!
//! ```no_run
//! # fn example(descriptors: &DescriptorSet) -> anyhow::Result<()> {
//! let config = GeneratorConfig::builder().target("Sub").build();
//! let orchestrator = Orchestrator::new(descriptors, &config);
//! let (code, stats) = orchestrator.generate_with_header("types.json")?;
//!
//! println!("Collected {} fields with {} warnings", stats.fields_collected, stats.warnings.len());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use super::{
  codegen,
  collector::{FieldCollection, FieldCollector},
  config::{Construction, GeneratorConfig},
  descriptor::DescriptorSet,
  error::{GenerateError, GenerationWarning},
  model::{ConstructionStrategy, EmissionModel, ModelField},
  naming::{identifiers::to_snake_identifier, setters::SetterNamingPolicy},
};

pub struct Orchestrator<'a> {
  descriptors: &'a DescriptorSet,
  config: &'a GeneratorConfig,
}

/// Statistics about one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
  /// Hierarchy levels between the target and the upper bound, excluded ones included
  pub levels_visited: usize,
  pub levels_excluded: usize,
  pub fields_collected: usize,
  /// Fields whose builder name was qualified with the declaring type
  pub fields_renamed: usize,
  /// Fields set through the bare prefix
  pub bare_setters: usize,
  pub companion_overloads: usize,
  /// Non-fatal warnings from the collection step
  pub warnings: Vec<GenerationWarning>,
}

impl GenerationStats {
  fn new(collection: &FieldCollection, fields: &[ModelField]) -> Self {
    Self {
      levels_visited: collection.levels.len(),
      levels_excluded: collection.levels.iter().filter(|level| level.excluded).count(),
      fields_collected: collection.fields.len(),
      fields_renamed: collection.fields.iter().filter(|field| field.is_renamed()).count(),
      bare_setters: fields.iter().filter(|field| field.setter.bare).count(),
      companion_overloads: fields.iter().filter(|field| field.setter.has_delegate_overload()).count(),
      warnings: collection.warnings.clone(),
    }
  }
}

impl<'a> Orchestrator<'a> {
  pub fn new(descriptors: &'a DescriptorSet, config: &'a GeneratorConfig) -> Self {
    Self { descriptors, config }
  }

  /// Resolves the emission model without rendering any code.
  ///
  /// Every configuration error is reported here, before anything is emitted.
  pub fn resolve(&self) -> Result<(EmissionModel, GenerationStats), GenerateError> {
    self.config.validate()?;

    let collection = FieldCollector::new(self.descriptors).collect(
      &self.config.target,
      self.config.upper_bound.as_ref(),
      &self.config.excluded,
    )?;

    let bindings = SetterNamingPolicy::new(
      &self.config.setter_prefix,
      self.config.omit_field_name_for_unique_types,
      &self.config.companions,
    )
    .resolve(&collection.fields);

    let fields: Vec<ModelField> = collection
      .fields
      .iter()
      .cloned()
      .zip(bindings)
      .map(|(collected, setter)| ModelField {
        field: collected.field,
        builder_name: collected.builder_name,
        access: collected.access,
        parent_path: collected.parent_path,
        setter,
      })
      .collect();

    let stats = GenerationStats::new(&collection, &fields);
    let target_path = self
      .descriptors
      .get(&self.config.target)
      .and_then(|descriptor| descriptor.path.clone());

    let model = EmissionModel {
      target: self.config.target.clone(),
      target_path,
      builder_name: self.config.builder_name(),
      fields,
      construction: self.construction_strategy()?,
      overwrite_policy: self.config.overwrite_policy,
      visibility: self.config.visibility,
      uses: self.descriptors.uses().to_vec(),
    };

    Ok((model, stats))
  }

  fn construction_strategy(&self) -> Result<ConstructionStrategy, GenerateError> {
    match &self.config.construction {
      Construction::Direct => Ok(ConstructionStrategy::Direct),
      Construction::Indirect { constructor } => {
        let constructor = constructor
          .clone()
          .unwrap_or_else(|| format!("{}::try_new", self.config.target));
        let path = syn::parse_str::<syn::Path>(&constructor)
          .map_err(|source| GenerateError::InvalidConstructor { constructor, source })?;
        Ok(ConstructionStrategy::Indirect { constructor: path })
      }
    }
  }

  /// Generates the formatted builder source, without a file header.
  pub fn generate(&self) -> Result<(String, GenerationStats), GenerateError> {
    let (model, stats) = self.resolve()?;
    Ok((Self::render(&model)?, stats))
  }

  /// Generates the builder source with the auto-generated file header.
  pub fn generate_with_header(&self, source_path: &str) -> Result<(String, GenerationStats), GenerateError> {
    let (model, stats) = self.resolve()?;
    Ok((self.render_with_header(&model, source_path)?, stats))
  }

  fn render(model: &EmissionModel) -> Result<String, GenerateError> {
    let syntax_tree = syn::parse2(codegen::generate(model))?;
    Ok(prettyplease::unparse(&syntax_tree))
  }

  /// Renders an already resolved model with the auto-generated file header.
  ///
  /// The header carries no timestamp, so the same inputs always produce the
  /// same bytes.
  pub fn render_with_header(&self, model: &EmissionModel, source_path: &str) -> Result<String, GenerateError> {
    let code = Self::render(model)?;

    let final_code = format!(
      r"//! AUTO-GENERATED CODE - DO NOT EDIT!
//!
//! Builder for `{}`
//! Source: {}
//! Generated by `builder-forge`

{}",
      model.target, source_path, code
    );

    Ok(final_code)
  }

  /// `sub_builder.rs` for target `Sub`.
  pub fn output_file_name(&self) -> String {
    format!("{}.rs", to_snake_identifier(&self.config.builder_name()))
  }

  pub fn output_path(&self, output_dir: &Path) -> PathBuf {
    output_dir.join(self.output_file_name())
  }
}
