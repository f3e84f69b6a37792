use amlsynth_core::{FieldDefinition, FieldType, Schema, SchemaSet};
use amlsynth_generate::{
    CustomerPoolEntry, GenerationContext, GenerationOptions, IdentityPool, Locale,
    SchemaResolver,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

fn field(name: &str, field_type: FieldType) -> FieldDefinition {
    FieldDefinition::new(name, field_type)
}

fn schema_set() -> SchemaSet {
    SchemaSet::new()
        .with_schema(
            "customer",
            Schema::new(vec![
                field("customerId", FieldType::CustomerId),
                field("uuid", FieldType::Uuid),
                field("mobile", FieldType::Phone),
                field("profile", FieldType::NestedObject).with_schema("profile"),
                field("lines", FieldType::NestedArray)
                    .with_schema("line")
                    .with_bounds(2, 4),
            ]),
        )
        .with_schema(
            "profile",
            Schema::new(vec![
                field("customerId", FieldType::CustomerIdRef),
                field("bank", FieldType::BankName),
            ]),
        )
        .with_schema(
            "line",
            Schema::new(vec![
                field("customerId", FieldType::CustomerIdRef),
                field("accountId", FieldType::AccountIdRef),
                field("phone", FieldType::Phone),
            ]),
        )
}

#[test]
fn nested_references_reuse_parent_identity() {
    let set = schema_set();
    let pool = IdentityPool::in_memory();
    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..50 {
        let record = resolver
            .resolve_named("customer", &GenerationContext::new(), &mut rng)
            .expect("resolve with empty pools");
        let customer_id = record["customerId"].clone();
        let uuid = record["uuid"].clone();
        assert_eq!(record["profile"]["customerId"], customer_id);

        let lines = record["lines"].as_array().expect("lines");
        assert!((2..=4).contains(&lines.len()));
        for line in lines {
            assert_eq!(line["customerId"], customer_id);
            assert_eq!(line["accountId"], uuid);
        }
    }
}

#[test]
fn record_locale_is_consistent_across_nesting() {
    let set = schema_set();
    let pool = IdentityPool::in_memory();
    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..50 {
        let record = resolver
            .resolve_named("customer", &GenerationContext::new(), &mut rng)
            .expect("resolve");
        let bd = record["mobile"].as_str().expect("phone").starts_with("+880");
        for line in record["lines"].as_array().expect("lines") {
            let line_bd = line["phone"].as_str().expect("phone").starts_with("+880");
            assert_eq!(bd, line_bd, "mixed locales in {record:?}");
        }
    }
}

#[test]
fn explicit_country_is_not_overridden() {
    let set = schema_set();
    let pool = IdentityPool::in_memory();
    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let parent = GenerationContext::new().with_country(Locale::Bd);

    for _ in 0..20 {
        let record = resolver
            .resolve_named("customer", &parent, &mut rng)
            .expect("resolve");
        assert!(record["mobile"].as_str().expect("phone").starts_with("+880"));
    }
}

#[test]
fn pool_references_exist_in_the_pool() {
    let set = SchemaSet::new().with_schema(
        "transaction",
        Schema::new(vec![
            field("customerId", FieldType::CustomerIdRef),
            field("accountId", FieldType::AccountIdRef),
        ]),
    );
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customers((1..=5).map(|n| CustomerPoolEntry::new(100_000 + n)))
        .expect("customers");
    pool.add_accounts(["ACC-1", "ACC-2", "ACC-3"]).expect("accounts");

    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(11);

    for _ in 0..100 {
        let record = resolver
            .resolve_named("transaction", &GenerationContext::new(), &mut rng)
            .expect("resolve");
        let customer_id = record["customerId"].as_u64().expect("customer id");
        assert!(pool.customer(customer_id).is_some());
        let account_id = record["accountId"].as_str().expect("account id");
        assert!(pool.contains_account(account_id));
    }
}

#[test]
fn customer_ref_pins_pooled_country_for_later_fields() {
    let set = SchemaSet::new().with_schema(
        "account",
        Schema::new(vec![
            field("customerId", FieldType::CustomerIdRef),
            field("bank", FieldType::BankName),
        ]),
    );
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customer(CustomerPoolEntry::new(500_123).with_country(Locale::Us))
        .expect("customer");

    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    for _ in 0..20 {
        let record = resolver
            .resolve_named("account", &GenerationContext::new(), &mut rng)
            .expect("resolve");
        let bank = record["bank"].as_str().expect("bank");
        assert!(amlsynth_generate::locale::data::US_BANKS.contains(&bank), "{bank}");
    }
}

#[test]
fn field_order_is_preserved() {
    let set = schema_set();
    let pool = IdentityPool::in_memory();
    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let record = resolver
        .resolve_named("customer", &GenerationContext::new(), &mut rng)
        .expect("resolve");
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["customerId", "uuid", "mobile", "profile", "lines"]);
    assert!(matches!(record["profile"], Value::Object(_)));
}
