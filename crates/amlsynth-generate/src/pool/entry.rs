use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::{GenerationError, Result};
use crate::locale::Locale;

/// Pooled customer identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPoolEntry {
    pub customer_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name_eng: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name_ben: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Locale>,
}

impl CustomerPoolEntry {
    pub fn new(customer_id: u64) -> Self {
        Self {
            customer_id,
            customer_name_eng: None,
            customer_name_ben: None,
            date_of_birth: None,
            nationality: None,
            country: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.customer_name_eng = Some(name.into());
        self
    }

    pub fn with_date_of_birth(mut self, dob: impl Into<String>) -> Self {
        self.date_of_birth = Some(dob.into());
        self
    }

    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }

    pub fn with_country(mut self, country: Locale) -> Self {
        self.country = Some(country);
        self
    }

    /// Extract the pooled identity from a generated customer record.
    ///
    /// The date of birth is read from `dob`, then `dateOfBirth`. The country
    /// is BD when the nationality is "Bangladesh" and US otherwise.
    pub fn from_record(record: &Value) -> Result<Self> {
        let customer_id = record
            .get("customerId")
            .and_then(customer_id_of)
            .ok_or_else(|| {
                GenerationError::invalid_field(
                    "customerId",
                    "customer record needs an integer customerId",
                )
            })?;

        let text = |key: &str| record.get(key).and_then(Value::as_str).map(str::to_string);
        let nationality = text("nationality");
        let country = Locale::from_nationality(nationality.as_deref());

        Ok(Self {
            customer_id,
            customer_name_eng: text("customerNameEng"),
            customer_name_ben: text("customerNameBen"),
            date_of_birth: text("dob").or_else(|| text("dateOfBirth")),
            nationality,
            country: Some(country),
        })
    }
}

/// Customer id as an integer, accepting integer strings.
pub fn customer_id_of(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

/// Account id to pool from a generated account record.
pub fn account_id_of(record: &Value) -> Option<String> {
    ["uniqueAccountNumber", "accountNumber"]
        .iter()
        .filter_map(|key| record.get(*key))
        .find_map(|value| match value {
            Value::String(text) if !text.is_empty() => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        })
}
