use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::colors::{ColorMode, Colors, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "builder-forge")]
#[command(author, version, about = "Fluent builder generator for nested Rust data types")]
#[command(styles = Colors::clap_styles())]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information resolved from a type descriptor file
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Generate the builder source file for one target type
  Generate(GenerateCommand),
}

/// Options deciding which fields the builder covers and how its setters are named.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
  /// Path to the JSON type descriptor file
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Type to generate the builder for
  #[arg(short, long, value_name = "TYPE")]
  pub target: String,

  /// Highest ancestor whose fields are included (default: the whole hierarchy)
  #[arg(long, value_name = "TYPE")]
  pub upper_bound: Option<String>,

  /// Hierarchy levels whose fields are skipped (comma-separated type names)
  #[arg(long, value_name = "TYPES", value_delimiter = ',')]
  pub exclude: Option<Vec<String>>,

  /// Name every setter after its field, even when the field's type is unique
  #[arg(long, default_value_t = false)]
  pub name_all_setters: bool,

  /// Register a companion builder for a field type (repeatable)
  /// Format: TYPE=BUILDER_PATH (e.g., Gadget=crate::builders::GadgetBuilder)
  #[arg(long = "companion", value_name = "TYPE=BUILDER")]
  pub companion: Option<Vec<String>>,

  /// Setter name prefix; also the name of the bare setter
  #[arg(long, value_name = "PREFIX", default_value = "with")]
  pub prefix: String,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateCommand {
  #[command(flatten)]
  pub model: ModelArgs,

  /// Directory where `<target>_builder.rs` is written
  #[arg(short, long, value_name = "DIR", default_value = ".")]
  pub output_dir: PathBuf,

  /// Which fields `build` writes into the result
  #[arg(long, value_enum, default_value = "sparse")]
  pub overwrite_policy: OverwritePolicyArg,

  /// How the builder obtains the instance it fills in
  #[arg(long, value_enum, default_value = "direct")]
  pub construction: ConstructionArg,

  /// Fallible constructor used by indirect construction (default: `<Target>::try_new`)
  #[arg(long, value_name = "PATH")]
  pub constructor: Option<String>,

  /// Refuse to replace an existing output file
  #[arg(long, default_value_t = false)]
  pub no_clobber: bool,

  /// Visibility of the generated builder and its methods
  #[arg(long, value_name = "VISIBILITY", default_value = "public")]
  pub visibility: String,

  /// Enable verbose output with per-field detail
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false, conflicts_with = "verbose")]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverwritePolicyArg {
  /// Write only fields whose setter was called
  #[default]
  Sparse,
  /// Write every field, zero-equivalents included
  Total,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConstructionArg {
  /// `Target::default()` when the builder is created
  #[default]
  Direct,
  /// A fallible constructor called by `build`
  Indirect,
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List the fields a builder would cover, with their setters
  Fields(ModelArgs),
}
