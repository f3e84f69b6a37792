use std::path::PathBuf;

use clap::Subcommand;
use serde_json::Value;
use tracing::info;

use amlsynth_core::{
    DEFAULT_SCHEMA_SET_JSON, FieldType, IssueSeverity, SchemaSet, ValidationReport,
    schema_set_json_schema, validate_schema_set, validate_schema_set_json,
};
use amlsynth_generate::atomic::write_bytes_atomic;

use super::Session;
use crate::CliError;

#[derive(Subcommand, Debug)]
pub enum SchemaCommand {
    /// Check a schema set; defaults to the configured one.
    Validate { file: Option<PathBuf> },
    /// List the field type tags.
    Types,
    /// Print the JSON Schema of schema-set documents.
    JsonSchema,
    /// Write the bundled schema set to the configured schema path.
    Reset {
        /// Target file instead of the configured schema path.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Replace an existing file.
        #[arg(long)]
        force: bool,
    },
}

pub fn run(session: &Session, command: SchemaCommand) -> Result<(), CliError> {
    match command {
        SchemaCommand::Validate { file } => {
            let path = file.or_else(|| session.settings.schema_path.clone());
            let text = match &path {
                Some(path) => std::fs::read_to_string(path)?,
                None => DEFAULT_SCHEMA_SET_JSON.to_string(),
            };
            let report = validate_document(&text)?;
            for issue in report.errors.iter().chain(&report.warnings) {
                let label = match issue.severity {
                    IssueSeverity::Error => "error",
                    IssueSeverity::Warning => "warning",
                };
                println!("{label} {issue}");
                if let Some(hint) = &issue.hint {
                    println!("    hint: {hint}");
                }
            }
            if !report.is_ok() {
                return Err(CliError::InvalidArgument(format!(
                    "schema set has {} error(s)",
                    report.errors.len()
                )));
            }
            println!("schema set ok ({} warning(s))", report.warnings.len());
        }
        SchemaCommand::Types => {
            for tag in FieldType::catalog() {
                println!("{tag}");
            }
        }
        SchemaCommand::JsonSchema => {
            println!("{}", serde_json::to_string_pretty(&schema_set_json_schema())?);
        }
        SchemaCommand::Reset { out, force } => {
            let target = out
                .or_else(|| session.settings.schema_path.clone())
                .ok_or_else(|| {
                    CliError::InvalidArgument(
                        "no schema_path configured; pass --out".to_string(),
                    )
                })?;
            if target.exists() && !force {
                return Err(CliError::InvalidArgument(format!(
                    "{} exists; pass --force to replace it",
                    target.display()
                )));
            }
            write_bytes_atomic(&target, DEFAULT_SCHEMA_SET_JSON.as_bytes())?;
            info!(event = "schema_reset", path = %target.display());
        }
    }
    Ok(())
}

/// Structural checks first; semantic checks only once the document parses.
fn validate_document(text: &str) -> Result<ValidationReport, CliError> {
    let document: Value = serde_json::from_str(text)?;
    let mut report = validate_schema_set_json(&document)?;
    if report.is_ok() {
        let set = SchemaSet::from_json_str(text)?;
        report.merge(validate_schema_set(&set));
    }
    Ok(report)
}
