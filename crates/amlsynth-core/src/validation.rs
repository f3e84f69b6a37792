use std::collections::BTreeSet;
use std::fmt;

use jsonschema::JSONSchema;
use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::field::{FieldDefinition, FieldType};
use crate::graph::build_nesting_report;
use crate::schema::{ROOT_SCHEMAS, SchemaSet, schema_set_json_schema};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with location and hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        severity: IssueSeverity,
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
        hint: Option<String>,
    ) -> Self {
        Self {
            severity,
            code: code.into(),
            path: path.into(),
            message: message.into(),
            hint,
        }
    }

    fn error(code: &str, path: String, message: String, hint: &str) -> Self {
        Self::new(IssueSeverity::Error, code, path, message, Some(hint.to_string()))
    }

    fn warning(code: &str, path: String, message: String) -> Self {
        Self::new(IssueSeverity::Warning, code, path, message, None)
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.path, self.message)
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Issue codes of all errors, for assertions and summaries.
    pub fn error_codes(&self) -> Vec<&str> {
        self.errors.iter().map(|issue| issue.code.as_str()).collect()
    }

    /// One-line summary of the errors, or `None` when the report is clean.
    pub fn error_summary(&self) -> Option<String> {
        if self.is_ok() {
            return None;
        }
        Some(
            self.errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// Validate a raw schema-set document against the schema-set JSON Schema.
pub fn validate_schema_set_json(document: &Value) -> Result<ValidationReport> {
    let schema = serde_json::to_value(schema_set_json_schema())?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|err| Error::InvalidSchema(err.to_string()))?;

    let mut report = ValidationReport::default();
    if let Err(errors) = compiled.validate(document) {
        for error in errors {
            report.push_error(ValidationIssue::new(
                IssueSeverity::Error,
                "schema_violation",
                normalized_json_pointer(&error.instance_path.to_string()),
                error.to_string(),
                None,
            ));
        }
    }
    Ok(report)
}

/// Validate internal consistency of a parsed schema set.
///
/// Errors cover anything the resolver could not turn into a well-typed
/// value: duplicate field names, `select` without options, incomplete
/// `array` declarations, nested fields pointing nowhere, inverted
/// `minCount`/`maxCount`, and nesting cycles.
pub fn validate_schema_set(set: &SchemaSet) -> ValidationReport {
    let mut report = ValidationReport::default();

    for root in ROOT_SCHEMAS {
        if !set.contains(root.as_str()) {
            report.push_warning(ValidationIssue::warning(
                "root_missing",
                format!("/{root}"),
                format!("root schema '{root}' is not defined"),
            ));
        }
    }

    for (name, schema) in set.iter() {
        let mut seen = BTreeSet::new();
        for (idx, field) in schema.fields.iter().enumerate() {
            let path = format!("/{name}/fields/{idx}");
            if !seen.insert(field.name.as_str()) {
                report.push_error(ValidationIssue::error(
                    "duplicate_field",
                    path.clone(),
                    format!("field '{}' is declared more than once in '{name}'", field.name),
                    "rename or remove the duplicate field",
                ));
            }
            validate_field(set, field, &path, &mut report);
        }
    }

    let nesting = build_nesting_report(set);
    if let Some(cycle) = nesting.cycle {
        report.push_error(ValidationIssue::error(
            "nesting_cycle",
            "/".to_string(),
            format!("nested schemas form a cycle: {}", cycle.join(", ")),
            "nested schemas must form a DAG",
        ));
    }

    report
}

fn validate_field(set: &SchemaSet, field: &FieldDefinition, path: &str, report: &mut ValidationReport) {
    match field.field_type {
        FieldType::Select => {
            let empty = field.options.as_ref().is_none_or(Vec::is_empty);
            if empty {
                report.push_error(ValidationIssue::error(
                    "select_without_options",
                    format!("{path}/options"),
                    format!("select field '{}' has no options", field.name),
                    "add at least one option",
                ));
            }
        }
        FieldType::Array => {
            match field.item_type {
                None => report.push_error(ValidationIssue::error(
                    "array_without_item_type",
                    format!("{path}/itemType"),
                    format!("array field '{}' has no itemType", field.name),
                    "set itemType to a scalar field type",
                )),
                Some(item) if item.is_composite() => report.push_error(ValidationIssue::error(
                    "array_item_composite",
                    format!("{path}/itemType"),
                    format!("array field '{}' uses composite itemType '{item}'", field.name),
                    "use nestedArray for arrays of objects",
                )),
                Some(_) => {}
            }
            if field.count.is_none() {
                report.push_error(ValidationIssue::error(
                    "array_without_count",
                    format!("{path}/count"),
                    format!("array field '{}' has no count", field.name),
                    "set count to the number of elements",
                ));
            }
        }
        FieldType::NestedObject | FieldType::NestedArray => match field.schema.as_deref() {
            None => report.push_error(ValidationIssue::error(
                "nested_without_schema",
                format!("{path}/schema"),
                format!("nested field '{}' does not name a schema", field.name),
                "set schema to a defined schema name",
            )),
            Some(target) if !set.contains(target) => report.push_error(ValidationIssue::error(
                "nested_schema_unknown",
                format!("{path}/schema"),
                format!("nested field '{}' references undefined schema '{target}'", field.name),
                "define the schema or fix the reference",
            )),
            Some(_) => {}
        },
        _ => {}
    }

    if let (Some(min), Some(max)) = (field.min_count, field.max_count) {
        if min > max {
            report.push_error(ValidationIssue::error(
                "bounds_inverted",
                path.to_string(),
                format!("field '{}' has minCount {min} greater than maxCount {max}", field.name),
                "swap or correct the bounds",
            ));
        }
    }

    if field.options.is_some() && field.field_type != FieldType::Select {
        report.push_warning(ValidationIssue::warning(
            "options_ignored",
            format!("{path}/options"),
            format!("options on '{}' are ignored for type '{}'", field.name, field.field_type),
        ));
    }

    if field.count == Some(0) {
        report.push_warning(ValidationIssue::warning(
            "count_zero",
            format!("{path}/count"),
            format!("field '{}' always produces an empty array", field.name),
        ));
    }
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Schema;

    #[test]
    fn report_summary_joins_errors() {
        let mut report = ValidationReport::default();
        assert_eq!(report.error_summary(), None);
        report.push_error(ValidationIssue::error(
            "x",
            "/a".to_string(),
            "first".to_string(),
            "fix",
        ));
        report.push_error(ValidationIssue::error(
            "y",
            "/b".to_string(),
            "second".to_string(),
            "fix",
        ));
        assert_eq!(
            report.error_summary().as_deref(),
            Some("[x] /a: first; [y] /b: second")
        );
    }

    #[test]
    fn self_nesting_is_a_cycle() {
        let set = SchemaSet::new().with_schema(
            "node",
            Schema::new(vec![
                FieldDefinition::new("child", FieldType::NestedObject).with_schema("node"),
            ]),
        );
        let report = validate_schema_set(&set);
        assert!(report.error_codes().contains(&"nesting_cycle"));
    }
}
