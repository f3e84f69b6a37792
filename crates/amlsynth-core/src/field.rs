use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Closed set of field type tags understood by the resolver.
///
/// Tags serialize as their camelCase names (`customerIdRef`, `arrayOfNames`,
/// ...). A schema that names any other tag fails to deserialize.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "camelCase")]
pub enum FieldType {
    CustomerId,
    CustomerIdRef,
    AccountIdRef,
    CustomerNameFromPool,
    CustomerDobFromPool,
    CustomerNationalityFromPool,
    Uuid,
    #[serde(rename = "string")]
    Text,
    Number,
    Boolean,
    Email,
    Phone,
    Date,
    Datetime,
    DateOrNull,
    Address,
    StreetAddress,
    City,
    Country,
    CountryCode,
    Currency,
    CurrencyCode,
    FirstName,
    LastName,
    FullName,
    CompanyName,
    Sentence,
    Paragraph,
    Url,
    NumericId,
    RiskScore,
    ExchangeRate,
    AccountNumber,
    Word,
    JobTitle,
    Select,
    Array,
    ArrayOfStrings,
    ArrayOfCountries,
    ArrayOfCountryCodes,
    ArrayOfNames,
    LcNumber,
    SwiftReference,
    SwiftCode,
    TradeAmount,
    Percentage,
    HsCode,
    Port,
    BankName,
    FutureDate,
    NestedObject,
    NestedArray,
}

impl FieldType {
    /// Every tag, in catalog order.
    pub const ALL: [FieldType; 52] = [
        FieldType::CustomerId,
        FieldType::CustomerIdRef,
        FieldType::AccountIdRef,
        FieldType::CustomerNameFromPool,
        FieldType::CustomerDobFromPool,
        FieldType::CustomerNationalityFromPool,
        FieldType::Uuid,
        FieldType::Text,
        FieldType::Number,
        FieldType::Boolean,
        FieldType::Email,
        FieldType::Phone,
        FieldType::Date,
        FieldType::Datetime,
        FieldType::DateOrNull,
        FieldType::Address,
        FieldType::StreetAddress,
        FieldType::City,
        FieldType::Country,
        FieldType::CountryCode,
        FieldType::Currency,
        FieldType::CurrencyCode,
        FieldType::FirstName,
        FieldType::LastName,
        FieldType::FullName,
        FieldType::CompanyName,
        FieldType::Sentence,
        FieldType::Paragraph,
        FieldType::Url,
        FieldType::NumericId,
        FieldType::RiskScore,
        FieldType::ExchangeRate,
        FieldType::AccountNumber,
        FieldType::Word,
        FieldType::JobTitle,
        FieldType::Select,
        FieldType::Array,
        FieldType::ArrayOfStrings,
        FieldType::ArrayOfCountries,
        FieldType::ArrayOfCountryCodes,
        FieldType::ArrayOfNames,
        FieldType::LcNumber,
        FieldType::SwiftReference,
        FieldType::SwiftCode,
        FieldType::TradeAmount,
        FieldType::Percentage,
        FieldType::HsCode,
        FieldType::Port,
        FieldType::BankName,
        FieldType::FutureDate,
        FieldType::NestedObject,
        FieldType::NestedArray,
    ];

    /// Tag as it appears in schema JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::CustomerId => "customerId",
            FieldType::CustomerIdRef => "customerIdRef",
            FieldType::AccountIdRef => "accountIdRef",
            FieldType::CustomerNameFromPool => "customerNameFromPool",
            FieldType::CustomerDobFromPool => "customerDobFromPool",
            FieldType::CustomerNationalityFromPool => "customerNationalityFromPool",
            FieldType::Uuid => "uuid",
            FieldType::Text => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Date => "date",
            FieldType::Datetime => "datetime",
            FieldType::DateOrNull => "dateOrNull",
            FieldType::Address => "address",
            FieldType::StreetAddress => "streetAddress",
            FieldType::City => "city",
            FieldType::Country => "country",
            FieldType::CountryCode => "countryCode",
            FieldType::Currency => "currency",
            FieldType::CurrencyCode => "currencyCode",
            FieldType::FirstName => "firstName",
            FieldType::LastName => "lastName",
            FieldType::FullName => "fullName",
            FieldType::CompanyName => "companyName",
            FieldType::Sentence => "sentence",
            FieldType::Paragraph => "paragraph",
            FieldType::Url => "url",
            FieldType::NumericId => "numericId",
            FieldType::RiskScore => "riskScore",
            FieldType::ExchangeRate => "exchangeRate",
            FieldType::AccountNumber => "accountNumber",
            FieldType::Word => "word",
            FieldType::JobTitle => "jobTitle",
            FieldType::Select => "select",
            FieldType::Array => "array",
            FieldType::ArrayOfStrings => "arrayOfStrings",
            FieldType::ArrayOfCountries => "arrayOfCountries",
            FieldType::ArrayOfCountryCodes => "arrayOfCountryCodes",
            FieldType::ArrayOfNames => "arrayOfNames",
            FieldType::LcNumber => "lcNumber",
            FieldType::SwiftReference => "swiftReference",
            FieldType::SwiftCode => "swiftCode",
            FieldType::TradeAmount => "tradeAmount",
            FieldType::Percentage => "percentage",
            FieldType::HsCode => "hsCode",
            FieldType::Port => "port",
            FieldType::BankName => "bankName",
            FieldType::FutureDate => "futureDate",
            FieldType::NestedObject => "nestedObject",
            FieldType::NestedArray => "nestedArray",
        }
    }

    /// Parse a schema JSON tag.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ty| ty.as_str() == value)
    }

    /// Tags listed for tooling, in catalog order.
    pub fn catalog() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|ty| ty.as_str())
    }

    /// Types that read an identity out of the customer pool with match fidelity.
    pub fn is_pool_sourced(&self) -> bool {
        matches!(
            self,
            FieldType::CustomerNameFromPool
                | FieldType::CustomerDobFromPool
                | FieldType::CustomerNationalityFromPool
        )
    }

    /// Types that resolve through another schema.
    pub fn is_nested(&self) -> bool {
        matches!(self, FieldType::NestedObject | FieldType::NestedArray)
    }

    /// Types that cannot be used as the element type of a homogeneous `array`.
    pub fn is_composite(&self) -> bool {
        matches!(
            self,
            FieldType::Select
                | FieldType::Array
                | FieldType::ArrayOfStrings
                | FieldType::ArrayOfCountries
                | FieldType::ArrayOfCountryCodes
                | FieldType::ArrayOfNames
                | FieldType::NestedObject
                | FieldType::NestedArray
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One field of a schema. Order within the owning schema is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Choices for `select`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    /// Element type for `array`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<FieldType>,
    /// Element count for `array` and the `arrayOf*` family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Nested schema name for `nestedObject` and `nestedArray`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_count: Option<u32>,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            options: None,
            item_type: None,
            count: None,
            schema: None,
            min_count: None,
            max_count: None,
        }
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_item_type(mut self, item_type: FieldType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_bounds(mut self, min_count: u32, max_count: u32) -> Self {
        self.min_count = Some(min_count);
        self.max_count = Some(max_count);
        self
    }

    /// True when the field name selects Bengali script (`...Ben` suffix).
    pub fn wants_bengali_script(&self) -> bool {
        self.name.to_ascii_lowercase().ends_with("ben")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_serde() {
        for ty in FieldType::ALL {
            let encoded = serde_json::to_value(ty).expect("serialize");
            assert_eq!(encoded, serde_json::Value::String(ty.as_str().to_string()));
            let decoded: FieldType = serde_json::from_value(encoded).expect("deserialize");
            assert_eq!(decoded, ty);
            assert_eq!(FieldType::parse(ty.as_str()), Some(ty));
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<FieldType, _> = serde_json::from_str("\"telepathy\"");
        assert!(result.is_err());
        assert_eq!(FieldType::parse("telepathy"), None);
    }

    #[test]
    fn bengali_suffix_is_case_insensitive() {
        assert!(FieldDefinition::new("customerNameBen", FieldType::FullName).wants_bengali_script());
        assert!(FieldDefinition::new("ADDRESS_BEN", FieldType::Address).wants_bengali_script());
        assert!(!FieldDefinition::new("benefitName", FieldType::FullName).wants_bengali_script());
    }
}
