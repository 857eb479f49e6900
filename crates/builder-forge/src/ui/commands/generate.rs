use std::{
  collections::BTreeSet,
  path::{Path, PathBuf},
};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;

use crate::{
  generator::{
    codegen::Visibility,
    config::{CompanionBuilderMap, Construction, GeneratorConfig, OverwritePolicy},
    descriptor::{DescriptorSet, TypeId},
    model::EmissionModel,
    orchestrator::{GenerationStats, Orchestrator},
    output::write_generated,
  },
  ui::{Colors, ConstructionArg, GenerateCommand, ModelArgs, OverwritePolicyArg},
  utils::DescriptorLoader,
};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

/// Settings shared by every command that resolves a builder model.
#[derive(Debug, Clone)]
pub struct ModelSettings {
  pub input: PathBuf,
  pub target: TypeId,
  pub upper_bound: Option<TypeId>,
  pub excluded: BTreeSet<TypeId>,
  pub omit_field_name_for_unique_types: bool,
  /// Command-line companions in the order given; later entries win.
  pub companions: Vec<(String, String)>,
  pub prefix: String,
}

/// Settings that only affect the emitted code.
#[derive(Debug, Clone, Default)]
pub struct EmissionSettings {
  pub overwrite_policy: OverwritePolicy,
  pub construction: Construction,
  pub allow_file_overwriting: bool,
  pub visibility: Visibility,
}

impl ModelSettings {
  pub fn from_args(args: ModelArgs) -> anyhow::Result<Self> {
    let ModelArgs {
      input,
      target,
      upper_bound,
      exclude,
      name_all_setters,
      companion,
      prefix,
    } = args;

    Ok(Self {
      input,
      target: TypeId::from(target),
      upper_bound: upper_bound.map(TypeId::from),
      excluded: exclude
        .unwrap_or_default()
        .into_iter()
        .filter(|name| !name.trim().is_empty())
        .map(TypeId::from)
        .collect(),
      omit_field_name_for_unique_types: !name_all_setters,
      companions: parse_companions(companion)?,
      prefix,
    })
  }

  pub async fn load_descriptors(&self) -> anyhow::Result<DescriptorSet> {
    DescriptorLoader::open(&self.input).await?.parse()
  }

  /// Freezes the settings into the configuration of one generation run.
  ///
  /// Companions given on the command line are merged over those declared in
  /// the descriptor file.
  pub fn generator_config(
    &self,
    descriptors: &DescriptorSet,
    emission: &EmissionSettings,
  ) -> anyhow::Result<GeneratorConfig> {
    let companions = CompanionBuilderMap::from_sources(
      descriptors,
      self
        .companions
        .iter()
        .map(|(ty, builder)| (ty.as_str(), builder.as_str())),
    )?;

    Ok(
      GeneratorConfig::builder()
        .target(self.target.clone())
        .maybe_upper_bound(self.upper_bound.clone())
        .excluded(self.excluded.clone())
        .overwrite_policy(emission.overwrite_policy)
        .omit_field_name_for_unique_types(self.omit_field_name_for_unique_types)
        .companions(companions)
        .construction(emission.construction.clone())
        .allow_file_overwriting(emission.allow_file_overwriting)
        .setter_prefix(self.prefix.clone())
        .visibility(emission.visibility)
        .build(),
    )
  }
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub model: ModelSettings,
  pub emission: EmissionSettings,
  pub output_dir: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
}

impl GenerateConfig {
  pub fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let GenerateCommand {
      model,
      output_dir,
      overwrite_policy,
      construction,
      constructor,
      no_clobber,
      visibility,
      verbose,
      quiet,
    } = command;

    let visibility = Visibility::parse(&visibility).ok_or_else(|| {
      anyhow::anyhow!("Invalid visibility '{visibility}': expected one of public, crate, file")
    })?;

    let construction = match (construction, constructor) {
      (ConstructionArg::Direct, None) => Construction::Direct,
      (ConstructionArg::Direct, Some(constructor)) => {
        anyhow::bail!("--constructor '{constructor}' requires --construction indirect")
      }
      (ConstructionArg::Indirect, constructor) => Construction::Indirect { constructor },
    };

    Ok(Self {
      model: ModelSettings::from_args(model)?,
      emission: EmissionSettings {
        overwrite_policy: overwrite_policy.into(),
        construction,
        allow_file_overwriting: !no_clobber,
        visibility,
      },
      output_dir,
      verbose,
      quiet,
    })
  }
}

impl From<OverwritePolicyArg> for OverwritePolicy {
  fn from(policy: OverwritePolicyArg) -> Self {
    match policy {
      OverwritePolicyArg::Sparse => Self::Sparse,
      OverwritePolicyArg::Total => Self::Total,
    }
  }
}

pub(crate) fn parse_companions(companion: Option<Vec<String>>) -> anyhow::Result<Vec<(String, String)>> {
  let Some(entries) = companion else {
    return Ok(vec![]);
  };

  entries
    .into_iter()
    .map(|entry| {
      let (ty, builder) = entry.split_once('=').ok_or_else(|| {
        anyhow::anyhow!(
          "Invalid companion format '{entry}': expected TYPE=BUILDER (e.g., Gadget=crate::builders::GadgetBuilder)"
        )
      })?;
      let (ty, builder) = (ty.trim(), builder.trim());
      if ty.is_empty() || builder.is_empty() {
        anyhow::bail!("Invalid companion format '{entry}': type and builder must both be given");
      }
      Ok((ty.to_string(), builder.to_string()))
    })
    .collect()
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!("{} {message}", format_timestamp().with(self.colors.timestamp()));
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.label()),
        value.with(self.colors.value())
      );
    }
  }

  fn log_loading(&self) {
    self.info(
      &format!("Loading type descriptors from: {}", self.config.model.input.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_generating(&self, generator: &GeneratorConfig) {
    self.info(
      &format!(
        "Generating {} for {} ({} policy)...",
        generator.builder_name(),
        generator.target,
        generator.overwrite_policy
      )
      .with(self.colors.primary())
      .to_string(),
    );
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Fields collected:", stats.fields_collected.to_string());
    if stats.levels_excluded > 0 {
      self.stat(
        "Levels visited:",
        format!("{} ({} excluded)", stats.levels_visited, stats.levels_excluded),
      );
    } else {
      self.stat("Levels visited:", stats.levels_visited.to_string());
    }
    if stats.fields_renamed > 0 {
      self.stat("Renamed fields:", stats.fields_renamed.to_string());
    }
    self.stat("Bare setters:", stats.bare_setters.to_string());
    if stats.companion_overloads > 0 {
      self.stat("Companion overloads:", stats.companion_overloads.to_string());
    }
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }
  }

  fn print_fields(&self, model: &EmissionModel) {
    if !self.config.verbose || self.config.quiet {
      return;
    }

    for field in &model.fields {
      println!(
        "              {} {} {}",
        field.builder_name.to_string().with(self.colors.value()),
        "<-".with(self.colors.timestamp()),
        format!("{} via {}", field.qualified_name(), field.setter.method_name).with(self.colors.primary())
      );
    }
  }

  fn print_warnings(&self, stats: &GenerationStats) {
    if stats.warnings.is_empty() || self.config.quiet {
      return;
    }

    eprintln!();
    for warning in &stats.warnings {
      eprintln!(
        "{} {}",
        "Warning:".with(self.colors.accent()),
        format!("{warning}").with(self.colors.primary())
      );
    }
  }

  fn log_writing(&self, destination: &Path) {
    self.info(
      &format!("Writing to: {}", destination.display())
        .with(self.colors.primary())
        .to_string(),
    );
  }

  fn log_success(&self, builder_name: &str) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.timestamp()),
        format!("Successfully generated {builder_name}").with(self.colors.success())
      );
    }
  }
}

pub async fn generate_code(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.log_loading();
  let descriptors = config.model.load_descriptors().await?;
  let generator = config.model.generator_config(&descriptors, &config.emission)?;

  logger.log_generating(&generator);
  let orchestrator = Orchestrator::new(&descriptors, &generator);
  let source_path = config.model.input.display().to_string();
  let (model, stats) = orchestrator.resolve()?;
  let code = orchestrator.render_with_header(&model, &source_path)?;

  logger.print_fields(&model);
  logger.print_statistics(&stats);
  logger.print_warnings(&stats);

  let destination = orchestrator.output_path(&config.output_dir);
  logger.log_writing(&destination);
  write_generated(&destination, &code, generator.allow_file_overwriting).await?;

  logger.log_success(&generator.builder_name());
  Ok(())
}
