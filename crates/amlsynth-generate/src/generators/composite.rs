use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde_json::{Map, Value, json};
use tracing::warn;

use amlsynth_core::{FieldDefinition, Schema};

use crate::context::GenerationContext;
use crate::errors::{GenerationError, Result};
use crate::generators::generate_field;
use crate::generators::primitives::word;
use crate::locale::{self, Locale, Script};
use crate::matching::share_percentages;
use crate::resolver::SchemaResolver;

/// Field that receives shares summing to 100 across a nested array.
pub const SHARE_PERCENTAGE_FIELD: &str = "nomineeSharePercentage";

const DEFAULT_STRING_COUNT: u32 = 3;
const DEFAULT_COUNTRY_COUNT: u32 = 2;
const DEFAULT_NAME_COUNT: u32 = 3;
const DEFAULT_MIN_ITEMS: u32 = 1;
const DEFAULT_MAX_ITEMS: u32 = 3;

pub fn select(field: &FieldDefinition, rng: &mut dyn RngCore) -> Result<Value> {
    field
        .options
        .as_deref()
        .and_then(|options| options.choose(rng))
        .map(|choice| Value::String(choice.clone()))
        .ok_or_else(|| GenerationError::invalid_field(&field.name, "select needs at least one option"))
}

/// Homogeneous array of `itemType`, each element generated independently.
pub fn array(
    resolver: &SchemaResolver<'_>,
    field: &FieldDefinition,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let (Some(item_type), Some(count)) = (field.item_type, field.count) else {
        return Err(GenerationError::invalid_field(
            &field.name,
            "array needs both itemType and count",
        ));
    };
    if item_type.is_composite() {
        return Err(GenerationError::invalid_field(
            &field.name,
            format!("array itemType '{item_type}' is not a scalar type"),
        ));
    }
    let item = FieldDefinition::new(field.name.clone(), item_type);
    let values = (0..count)
        .map(|_| generate_field(resolver, &item, ctx, rng))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(values))
}

pub fn array_of_strings(field: &FieldDefinition, rng: &mut dyn RngCore) -> Value {
    let count = field.count.unwrap_or(DEFAULT_STRING_COUNT);
    Value::Array((0..count).map(|_| Value::String(word(rng))).collect())
}

/// The record's own country leads when one is pinned.
pub fn array_of_countries(
    field: &FieldDefinition,
    country: Option<Locale>,
    rng: &mut dyn RngCore,
) -> Value {
    let count = field.count.unwrap_or(DEFAULT_COUNTRY_COUNT);
    led_by(count, country.map(|c| c.country_name()), locale::any_country, rng)
}

pub fn array_of_country_codes(
    field: &FieldDefinition,
    country: Option<Locale>,
    rng: &mut dyn RngCore,
) -> Value {
    let count = field.count.unwrap_or(DEFAULT_COUNTRY_COUNT);
    led_by(count, country.map(Locale::as_str), locale::any_country_code, rng)
}

fn led_by(
    count: u32,
    lead: Option<&str>,
    other: fn(&mut dyn RngCore) -> String,
    rng: &mut dyn RngCore,
) -> Value {
    let mut values = Vec::with_capacity(count as usize);
    for idx in 0..count {
        let value = match lead {
            Some(lead) if idx == 0 => lead.to_string(),
            _ => other(rng),
        };
        values.push(Value::String(value));
    }
    Value::Array(values)
}

pub fn array_of_names(
    field: &FieldDefinition,
    country: Option<Locale>,
    rng: &mut dyn RngCore,
) -> Value {
    let count = field.count.unwrap_or(DEFAULT_NAME_COUNT);
    Value::Array(
        (0..count)
            .map(|_| Value::String(locale::full_name(country, Script::Latin, rng)))
            .collect(),
    )
}

/// Nested record sharing the parent's context. A missing schema yields `{}`.
pub fn nested_object(
    resolver: &SchemaResolver<'_>,
    field: &FieldDefinition,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let Some(schema) = nested_schema(resolver, field) else {
        return Ok(Value::Object(Map::new()));
    };
    Ok(Value::Object(resolver.resolve(schema, ctx, rng)?))
}

/// `minCount..=maxCount` nested records sharing the parent's context.
///
/// When the nested schema carries [`SHARE_PERCENTAGE_FIELD`], the items'
/// shares are replaced so they sum to exactly 100. A missing schema yields `[]`.
pub fn nested_array(
    resolver: &SchemaResolver<'_>,
    field: &FieldDefinition,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let Some(schema) = nested_schema(resolver, field) else {
        return Ok(Value::Array(Vec::new()));
    };
    let min = field.min_count.unwrap_or(DEFAULT_MIN_ITEMS);
    let max = field.max_count.unwrap_or(DEFAULT_MAX_ITEMS.max(min));
    if min > max {
        return Err(GenerationError::invalid_field(
            &field.name,
            format!("minCount {min} is greater than maxCount {max}"),
        ));
    }

    let count = rng.random_range(min..=max);
    let mut items = (0..count)
        .map(|_| resolver.resolve(schema, ctx, rng))
        .collect::<Result<Vec<_>>>()?;

    if schema.field(SHARE_PERCENTAGE_FIELD).is_some() && !items.is_empty() {
        let shares = share_percentages(items.len(), rng)?;
        for (item, share) in items.iter_mut().zip(shares) {
            item.insert(SHARE_PERCENTAGE_FIELD.to_string(), json!(share));
        }
    }

    Ok(Value::Array(items.into_iter().map(Value::Object).collect()))
}

fn nested_schema<'a>(
    resolver: &SchemaResolver<'a>,
    field: &FieldDefinition,
) -> Option<&'a Schema> {
    let name = field.schema.as_deref();
    let schema = name.and_then(|name| resolver.schemas().get(name));
    if schema.is_none() {
        warn!(
            field = %field.name,
            schema = name.unwrap_or("<none>"),
            "nested schema missing, emitting empty value"
        );
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlsynth_core::FieldType;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn select_without_options_fails() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let field = FieldDefinition::new("status", FieldType::Select);
        assert!(matches!(
            select(&field, &mut rng),
            Err(GenerationError::InvalidField { .. })
        ));
        let field = field.with_options(["Active"]);
        assert_eq!(select(&field, &mut rng).expect("select"), json!("Active"));
    }

    #[test]
    fn countries_lead_with_record_country() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let field = FieldDefinition::new("countries", FieldType::ArrayOfCountries).with_count(3);
        let value = array_of_countries(&field, Some(Locale::Bd), &mut rng);
        let items = value.as_array().expect("array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], json!("Bangladesh"));

        let field = FieldDefinition::new("codes", FieldType::ArrayOfCountryCodes);
        let value = array_of_country_codes(&field, Some(Locale::Us), &mut rng);
        assert_eq!(value.as_array().expect("array")[0], json!("US"));
    }

    #[test]
    fn zero_count_country_arrays_are_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let field = FieldDefinition::new("countries", FieldType::ArrayOfCountries).with_count(0);
        assert_eq!(array_of_countries(&field, Some(Locale::Bd), &mut rng), json!([]));
    }

    #[test]
    fn default_counts_apply() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let strings = array_of_strings(&FieldDefinition::new("tags", FieldType::ArrayOfStrings), &mut rng);
        assert_eq!(strings.as_array().map(Vec::len), Some(3));
        let names = array_of_names(&FieldDefinition::new("aliases", FieldType::ArrayOfNames), None, &mut rng);
        assert_eq!(names.as_array().map(Vec::len), Some(3));
    }
}
