use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use schemars::JsonSchema;
use schemars::schema::RootSchema;
use schemars::schema_for;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::field::{FieldDefinition, FieldType};

/// Bundled default schema set.
pub const DEFAULT_SCHEMA_SET_JSON: &str = include_str!("../assets/default-schemas.json");

/// Schemas that can be requested directly.
pub const ROOT_SCHEMAS: [DataType; 6] = [
    DataType::Customer,
    DataType::Account,
    DataType::Transaction,
    DataType::Sanction,
    DataType::Trade,
    DataType::Credit,
];

/// Root record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    Customer,
    Account,
    Transaction,
    Sanction,
    Trade,
    Credit,
}

impl DataType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Customer => "customer",
            DataType::Account => "account",
            DataType::Transaction => "transaction",
            DataType::Sanction => "sanction",
            DataType::Trade => "trade",
            DataType::Credit => "credit",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        ROOT_SCHEMAS
            .iter()
            .copied()
            .find(|data_type| data_type.as_str() == normalized)
            .ok_or_else(|| Error::UnknownDataType(value.to_string()))
    }
}

/// Named ordered list of field definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Schema {
    pub fields: Vec<FieldDefinition>,
}

impl Schema {
    pub fn new(fields: Vec<FieldDefinition>) -> Self {
        Self { fields }
    }

    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn has_field_type(&self, field_type: FieldType) -> bool {
        self.fields.iter().any(|field| field.field_type == field_type)
    }

    /// The record mints a new customer identity.
    pub fn creates_identity(&self) -> bool {
        self.has_field_type(FieldType::CustomerId)
    }

    /// The record reads pooled identity attributes with match fidelity.
    pub fn uses_pool_identity(&self) -> bool {
        self.fields.iter().any(|field| field.field_type.is_pool_sourced())
    }

    /// Names of schemas referenced by nested fields, in field order.
    pub fn nested_references(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .filter(|field| field.field_type.is_nested())
            .filter_map(|field| field.schema.as_deref())
    }
}

/// Map of schema name to schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SchemaSet {
    schemas: BTreeMap<String, Schema>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the bundled default set.
    pub fn default_set() -> Result<Self> {
        Self::from_json_str(DEFAULT_SCHEMA_SET_JSON)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(Error::from)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    pub fn insert(&mut self, name: impl Into<String>, schema: Schema) -> Option<Schema> {
        self.schemas.insert(name.into(), schema)
    }

    pub fn with_schema(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.insert(name, schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Schema> {
        self.schemas.get(name)
    }

    /// Lookup that reports a missing schema as an error.
    pub fn require(&self, name: &str) -> Result<&Schema> {
        self.get(name)
            .ok_or_else(|| Error::UnknownSchema(name.to_string()))
    }

    pub fn root(&self, data_type: DataType) -> Result<&Schema> {
        self.require(data_type.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.schemas.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Schema)> {
        self.schemas.iter().map(|(name, schema)| (name.as_str(), schema))
    }

    pub fn len(&self) -> usize {
        self.schemas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.is_empty()
    }
}

/// JSON Schema describing a schema-set document.
pub fn schema_set_json_schema() -> RootSchema {
    schema_for!(SchemaSet)
}
