//! Core contracts shared by the amlsynth crates.
//!
//! This crate defines the declarative schema model (field types, field
//! definitions, schema sets), the bundled default schema set, and the
//! structural and semantic validation applied before any record is generated.

pub mod error;
pub mod field;
pub mod graph;
pub mod schema;
pub mod validation;

pub use error::{Error, Result};
pub use field::{FieldDefinition, FieldType};
pub use graph::{NestingReport, build_nesting_report};
pub use schema::{
    DEFAULT_SCHEMA_SET_JSON, DataType, ROOT_SCHEMAS, Schema, SchemaSet, schema_set_json_schema,
};
pub use validation::{
    IssueSeverity, ValidationIssue, ValidationReport, validate_schema_set, validate_schema_set_json,
};
