use amlsynth_core::{
    FieldDefinition, FieldType, IssueSeverity, Schema, SchemaSet, validate_schema_set,
    validate_schema_set_json,
};
use serde_json::json;

fn single(fields: Vec<FieldDefinition>) -> SchemaSet {
    SchemaSet::new().with_schema("customer", Schema::new(fields))
}

#[test]
fn default_set_is_valid() {
    let set = SchemaSet::default_set().expect("parse default set");
    let report = validate_schema_set(&set);
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);
    assert!(report.warnings.is_empty(), "unexpected warnings: {:?}", report.warnings);
}

#[test]
fn select_requires_options() {
    let report = validate_schema_set(&single(vec![
        FieldDefinition::new("gender", FieldType::Select),
        FieldDefinition::new("status", FieldType::Select).with_options(Vec::<String>::new()),
    ]));
    assert_eq!(
        report.error_codes(),
        vec!["select_without_options", "select_without_options"]
    );
    assert_eq!(report.errors[0].path, "/customer/fields/0/options");
}

#[test]
fn array_requires_item_type_and_count() {
    let report = validate_schema_set(&single(vec![FieldDefinition::new("tags", FieldType::Array)]));
    assert_eq!(
        report.error_codes(),
        vec!["array_without_item_type", "array_without_count"]
    );

    let report = validate_schema_set(&single(vec![
        FieldDefinition::new("tags", FieldType::Array)
            .with_item_type(FieldType::NestedObject)
            .with_count(2),
    ]));
    assert_eq!(report.error_codes(), vec!["array_item_composite"]);
}

#[test]
fn nested_fields_must_resolve() {
    let report = validate_schema_set(&single(vec![
        FieldDefinition::new("profile", FieldType::NestedObject),
        FieldDefinition::new("nominees", FieldType::NestedArray).with_schema("nominee"),
    ]));
    assert_eq!(
        report.error_codes(),
        vec!["nested_without_schema", "nested_schema_unknown"]
    );
}

#[test]
fn duplicate_fields_and_inverted_bounds_are_errors() {
    let set = SchemaSet::new()
        .with_schema(
            "customer",
            Schema::new(vec![
                FieldDefinition::new("name", FieldType::FullName),
                FieldDefinition::new("name", FieldType::FullName),
                FieldDefinition::new("nominees", FieldType::NestedArray)
                    .with_schema("nominee")
                    .with_bounds(4, 2),
            ]),
        )
        .with_schema("nominee", Schema::default());
    let report = validate_schema_set(&set);
    assert_eq!(report.error_codes(), vec!["duplicate_field", "bounds_inverted"]);
}

#[test]
fn warnings_do_not_fail_the_report() {
    let report = validate_schema_set(&single(vec![
        FieldDefinition::new("name", FieldType::FullName).with_options(["a"]),
        FieldDefinition::new("tags", FieldType::ArrayOfStrings).with_count(0),
    ]));
    assert!(report.is_ok());
    let codes: Vec<&str> = report.warnings.iter().map(|issue| issue.code.as_str()).collect();
    assert!(codes.contains(&"root_missing"));
    assert!(codes.contains(&"options_ignored"));
    assert!(codes.contains(&"count_zero"));
    assert!(report
        .warnings
        .iter()
        .all(|issue| issue.severity == IssueSeverity::Warning));
}

#[test]
fn json_document_is_checked_structurally() {
    let document: serde_json::Value =
        serde_json::from_str(amlsynth_core::DEFAULT_SCHEMA_SET_JSON).expect("bundled json");
    let report = validate_schema_set_json(&document).expect("compile json schema");
    assert!(report.is_ok(), "unexpected errors: {:?}", report.errors);

    let malformed = json!({
        "customer": { "fields": [ { "name": "x", "type": "hologram" } ] }
    });
    let report = validate_schema_set_json(&malformed).expect("compile json schema");
    assert!(!report.is_ok());
    assert!(report.errors.iter().all(|issue| issue.code == "schema_violation"));
}
