use amlsynth_core::{DEFAULT_SCHEMA_SET_JSON, FieldDefinition, FieldType, Schema, SchemaSet};
use serde_json::json;

#[test]
fn default_set_round_trips_through_json() {
    let set = SchemaSet::default_set().expect("parse default set");
    let encoded = set.to_json_pretty().expect("serialize");
    let decoded = SchemaSet::from_json_str(&encoded).expect("reparse");
    assert_eq!(set, decoded);
}

#[test]
fn default_set_matches_bundled_document() {
    let set = SchemaSet::default_set().expect("parse default set");
    let bundled: serde_json::Value =
        serde_json::from_str(DEFAULT_SCHEMA_SET_JSON).expect("bundled json");
    let reencoded = serde_json::to_value(&set).expect("serialize");
    let bundled_names: Vec<&String> = bundled.as_object().expect("object").keys().collect();
    assert_eq!(bundled_names.len(), set.len());
    assert_eq!(reencoded["nominee"], bundled["nominee"]);
}

#[test]
fn field_order_is_preserved() {
    let set = SchemaSet::default_set().expect("parse default set");
    let customer = set.get("customer").expect("customer");
    assert_eq!(customer.fields[0].name, "customerId");
    assert_eq!(customer.fields[0].field_type, FieldType::CustomerId);
    assert!(customer.creates_identity());

    let sanction = set.get("sanction").expect("sanction");
    assert!(sanction.uses_pool_identity());
    assert!(!sanction.creates_identity());
}

#[test]
fn optional_attributes_are_omitted_when_absent() {
    let field = FieldDefinition::new("gender", FieldType::Select).with_options(["Male", "Female"]);
    let value = serde_json::to_value(&field).expect("serialize");
    assert_eq!(
        value,
        json!({ "name": "gender", "type": "select", "options": ["Male", "Female"] })
    );
}

#[test]
fn nested_attributes_use_camel_case() {
    let raw = json!({
        "customer": { "fields": [
            { "name": "nominees", "type": "nestedArray", "schema": "nominee", "minCount": 1, "maxCount": 3 },
            { "name": "tags", "type": "array", "itemType": "word", "count": 4 }
        ]},
        "nominee": { "fields": [] }
    });
    let set: SchemaSet = serde_json::from_value(raw).expect("parse");
    let customer = set.get("customer").expect("customer");
    assert_eq!(customer.fields[0].min_count, Some(1));
    assert_eq!(customer.fields[0].max_count, Some(3));
    assert_eq!(customer.fields[1].item_type, Some(FieldType::Word));
    assert_eq!(customer.nested_references().collect::<Vec<_>>(), vec!["nominee"]);
}

#[test]
fn unknown_field_type_fails_to_parse() {
    let raw = r#"{ "customer": { "fields": [ { "name": "x", "type": "hologram" } ] } }"#;
    assert!(SchemaSet::from_json_str(raw).is_err());
}

#[test]
fn builder_helpers_compose() {
    let set = SchemaSet::new().with_schema(
        "account",
        Schema::new(vec![FieldDefinition::new("customerId", FieldType::CustomerIdRef)]),
    );
    assert!(set.contains("account"));
    assert_eq!(set.names().collect::<Vec<_>>(), vec!["account"]);
}
