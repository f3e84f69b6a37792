use amlsynth_core::{FieldDefinition, FieldType, SchemaSet};
use amlsynth_generate::{
    CustomerPoolEntry, GenerationContext, GenerationError, GenerationOptions, IdentityPool,
    JsonFilePoolStore, Locale, MemoryPoolStore, PoolKind, SchemaResolver,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rafiqul() -> CustomerPoolEntry {
    CustomerPoolEntry::new(500_123)
        .with_name("Rafiqul Islam")
        .with_date_of_birth("1985-03-14")
        .with_nationality("Bangladesh")
        .with_country(Locale::Bd)
}

#[test]
fn json_store_survives_reload() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFilePoolStore::new(dir.path());

    let mut pool = IdentityPool::load(store.clone()).expect("load empty");
    assert!(!pool.has_customers());
    pool.upsert_customer(rafiqul()).expect("upsert");
    pool.add_accounts(["10000001", "10000002"]).expect("accounts");
    drop(pool);

    assert!(store.customers_path().exists());
    assert!(store.accounts_path().exists());

    let reloaded = IdentityPool::load(JsonFilePoolStore::new(dir.path())).expect("reload");
    assert_eq!(reloaded.customer_count(), 1);
    assert_eq!(reloaded.customer(500_123), Some(&rafiqul()));
    assert!(reloaded.contains_account("10000001"));
    assert!(reloaded.contains_account("10000002"));
}

#[test]
fn customer_file_uses_camel_case_keys() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFilePoolStore::new(dir.path());
    let mut pool = IdentityPool::load(store.clone()).expect("load");
    pool.upsert_customer(rafiqul()).expect("upsert");

    let raw = std::fs::read_to_string(store.customers_path()).expect("read pool file");
    let parsed: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let first = &parsed[0];
    assert_eq!(first["customerId"], 500_123);
    assert_eq!(first["customerNameEng"], "Rafiqul Islam");
    assert_eq!(first["dateOfBirth"], "1985-03-14");
}

#[test]
fn malformed_pool_file_is_a_store_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let store = JsonFilePoolStore::new(dir.path());
    std::fs::write(store.customers_path(), b"{not json").expect("write");
    assert!(matches!(
        IdentityPool::load(store),
        Err(GenerationError::Store(_))
    ));
}

#[test]
fn memory_store_is_shared_between_clones() {
    let store = MemoryPoolStore::new();
    let mut pool = IdentityPool::load(store.clone()).expect("load");
    pool.upsert_customers((1..=3).map(|n| CustomerPoolEntry::new(100_000 + n)))
        .expect("upsert");

    let second = IdentityPool::load(store).expect("second load");
    assert_eq!(second.customer_count(), 3);
}

#[test]
fn clearing_is_idempotent_and_empties_references() {
    let store = MemoryPoolStore::new();
    let mut pool = IdentityPool::load(store.clone()).expect("load");
    pool.upsert_customer(rafiqul()).expect("upsert");
    pool.add_account("10000001").expect("account");

    pool.clear_customers().expect("clear");
    pool.clear_customers().expect("clear again");
    pool.clear_accounts().expect("clear accounts");
    assert!(!pool.has_customers());
    assert!(!pool.has_accounts());
    assert_eq!(IdentityPool::load(store).expect("reload").customer_count(), 0);

    let set = SchemaSet::new();
    let options = GenerationOptions::default();
    let resolver = SchemaResolver::new(&set, &pool, &options);
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let field = FieldDefinition::new("customerId", FieldType::CustomerIdRef);
    let err = resolver
        .field_value(&field, &GenerationContext::new(), &mut rng)
        .expect_err("empty pool");
    assert!(matches!(
        err,
        GenerationError::PoolExhausted { pool: PoolKind::Customers, .. }
    ));
    assert_eq!(
        err.to_string(),
        "No customers available. Please generate customers first."
    );
}

#[test]
fn upsert_replaces_by_customer_id() {
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customer(CustomerPoolEntry::new(500_123)).expect("first");
    pool.upsert_customer(rafiqul()).expect("replace");
    assert_eq!(pool.customer_count(), 1);
    assert_eq!(
        pool.customer(500_123).and_then(|c| c.customer_name_eng.as_deref()),
        Some("Rafiqul Islam")
    );
    assert!(pool.add_account("A").expect("add"));
    assert!(!pool.add_account("A").expect("add again"));
    assert_eq!(pool.add_accounts(["A", "B"]).expect("add"), 1);
}
