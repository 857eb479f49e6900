use std::collections::BTreeMap;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
  generator::{
    codegen::setters::accepted_parameters,
    descriptor::FieldAccess,
    model::{BuilderFieldName, EmissionModel, ModelField},
    orchestrator::Orchestrator,
  },
  ui::{
    Colors, ModelArgs,
    colors::IntoComfyColor,
    commands::generate::{EmissionSettings, ModelSettings},
    term_width,
  },
};

/// Parameter types a caller can pass to the field's setter.
fn parameter_summary(field: &ModelField, accepted: &BTreeMap<BuilderFieldName, Vec<String>>) -> String {
  accepted
    .get(&field.builder_name)
    .map(|types| types.join(" | "))
    .unwrap_or_default()
}

fn access_summary(field: &ModelField) -> String {
  match field.access {
    FieldAccess::Field => field.field.name.clone(),
    FieldAccess::Setter => format!("set_{}()", field.field.name),
  }
}

fn fields_table(model: &EmissionModel, colors: &Colors) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in ["LEVEL", "FIELD", "BUILDER FIELD", "SETTER", "ACCEPTS"] {
    row.add_cell(Cell::new(header).fg(IntoComfyColor::into(colors.label())));
  }
  table.set_header(row);

  let accepted = accepted_parameters(model);
  for field in &model.fields {
    let mut row = Row::new();
    row.add_cell(
      Cell::new(field.field.declaring_type.as_str())
        .fg(IntoComfyColor::into(colors.accent()))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(access_summary(field)).fg(IntoComfyColor::into(colors.primary())));
    row.add_cell(
      Cell::new(field.builder_name.as_str())
        .fg(IntoComfyColor::into(colors.value()))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(field.setter.method_name.as_str()).fg(IntoComfyColor::into(colors.value())));
    row.add_cell(Cell::new(parameter_summary(field, &accepted)).fg(IntoComfyColor::into(colors.primary())));
    table.add_row(row);
  }

  table
}

pub async fn list_fields(args: ModelArgs, colors: &Colors) -> anyhow::Result<()> {
  let settings = ModelSettings::from_args(args)?;
  let descriptors = settings.load_descriptors().await?;
  let config = settings.generator_config(&descriptors, &EmissionSettings::default())?;
  let (model, stats) = Orchestrator::new(&descriptors, &config).resolve()?;

  println!("{}", fields_table(&model, colors));

  for warning in &stats.warnings {
    eprintln!("Warning: {warning}");
  }

  Ok(())
}
