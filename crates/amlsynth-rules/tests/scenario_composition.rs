use amlsynth_core::DataType;
use amlsynth_generate::{AccountFallback, CustomerPoolEntry, IdentityPool, Locale};
use amlsynth_rules::format::thousands;
use amlsynth_rules::{RuleCatalog, ViolationComposer, ViolationError};
use chrono::{DateTime, TimeZone, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde_json::Value;

fn anchor() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("anchor")
}

fn seeded_pool() -> IdentityPool {
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customers([
        CustomerPoolEntry::new(500_123)
            .with_name("Rafiqul Islam")
            .with_country(Locale::Bd),
        CustomerPoolEntry::new(500_124).with_name("Nasrin Akter"),
        CustomerPoolEntry::new(500_125).with_name("Karim Uddin"),
    ])
    .expect("customers");
    pool.add_accounts(["2001000001", "2001000002"]).expect("accounts");
    pool
}

fn amount(record: &Value) -> i64 {
    record["amount"].as_i64().expect("integer amount")
}

fn timestamp(record: &Value) -> DateTime<Utc> {
    record["timestamp"]
        .as_str()
        .and_then(|ts| DateTime::parse_from_rfc3339(ts).ok())
        .map(|ts| ts.with_timezone(&Utc))
        .expect("rfc3339 timestamp")
}

#[test]
fn every_catalog_rule_composes() {
    let pool = seeded_pool();
    let composer = ViolationComposer::new(&pool).at(anchor());
    let mut rng = ChaCha8Rng::seed_from_u64(113);
    for rule in RuleCatalog::builtin().rules() {
        let scenario = composer
            .compose(rule.code, &mut rng)
            .unwrap_or_else(|err| panic!("{}: {err}", rule.code));
        assert!(!scenario.records.is_empty(), "{} produced no records", rule.code);
        assert_eq!(scenario.record_count, scenario.records.len());
        assert_eq!(scenario.data_type, rule.data_type);
        assert!(!scenario.explanation.is_empty(), "{}", rule.code);
    }
}

#[test]
fn structuring_stays_below_reporting_threshold() {
    let pool = seeded_pool();
    let composer = ViolationComposer::new(&pool).at(anchor());
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..20 {
        let scenario = composer.compose("STRUCTURING", &mut rng).expect("structuring");
        assert!(scenario.records.len() >= 3);
        for record in &scenario.records {
            let value = amount(record);
            assert!(value > 900_000 && value < 990_000, "amount {value}");
            assert_eq!(record["type"], "CASH_DEPOSIT");
            let age = anchor() - timestamp(record);
            assert!(age.num_seconds() >= 0);
            assert!(age.num_hours() < 48);
        }
    }
}

#[test]
fn cash_threshold_deposit_names_the_amount() {
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customer(CustomerPoolEntry::new(500_123).with_country(Locale::Bd))
        .expect("customer");
    pool.add_account("2001000001").expect("account");

    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let scenario = ViolationComposer::new(&pool)
        .at(anchor())
        .compose("CASH_THRESHOLD", &mut rng)
        .expect("scenario");

    assert_eq!(scenario.record_count, 1);
    let record = &scenario.records[0];
    let value = amount(record);
    assert!((1_100_000..=1_500_000).contains(&value));
    assert_eq!(record["type"], "CASH_DEPOSIT");
    assert_eq!(record["customerId"], 500_123);
    assert_eq!(record["accountId"], "2001000001");
    assert!(scenario.explanation.contains(&thousands(value)));
    assert!(scenario.note.is_none());
}

#[test]
fn batches_merge_into_one_scenario() {
    let pool = seeded_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(21);
    let scenario = ViolationComposer::new(&pool)
        .at(anchor())
        .compose_batch("STRUCTURING", 4, &mut rng)
        .expect("batch");
    assert_eq!(scenario.record_count, scenario.records.len());
    assert!(scenario.record_count >= 12);
    assert!(scenario.explanation.starts_with(&format!(
        "Generated 4 batches ({} total records).",
        scenario.record_count
    )));
}

#[test]
fn coordinated_structuring_uses_pooled_depositors() {
    let pool = seeded_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let scenario = ViolationComposer::new(&pool)
        .at(anchor())
        .compose("COORDINATED_STRUCTURING", &mut rng)
        .expect("scenario");
    for record in &scenario.records {
        let id = record["customerId"].as_u64().expect("customer id");
        assert!(pool.customer(id).is_some(), "customer {id} not pooled");
    }
}

#[test]
fn empty_customer_pool_is_rejected() {
    let pool = IdentityPool::in_memory();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = ViolationComposer::new(&pool)
        .compose("SANCTION_INDIVIDUAL", &mut rng)
        .expect_err("empty pool");
    assert!(matches!(err, ViolationError::EmptyCustomerPool));
}

#[test]
fn strict_fallback_requires_accounts() {
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customer(CustomerPoolEntry::new(1)).expect("customer");
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let err = ViolationComposer::new(&pool)
        .with_account_fallback(AccountFallback::Strict)
        .compose("CASH_THRESHOLD", &mut rng)
        .expect_err("no accounts");
    assert!(matches!(err, ViolationError::EmptyAccountPool));
}

#[test]
fn composing_leaves_the_pool_untouched() {
    let pool = seeded_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    ViolationComposer::new(&pool)
        .compose_batch("SANCTION_CORPORATE", 5, &mut rng)
        .expect("batch");
    assert_eq!(pool.customer_count(), 3);
    assert_eq!(pool.account_count(), 2);
}

#[test]
fn scenario_serializes_for_callers() {
    let pool = seeded_pool();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let scenario = ViolationComposer::new(&pool)
        .at(anchor())
        .compose("TBML-048", &mut rng)
        .expect("scenario");
    assert_eq!(scenario.data_type, DataType::Trade);
    let json = serde_json::to_value(&scenario).expect("serialize");
    assert_eq!(json["rule"]["code"], "TBML-048");
    assert_eq!(json["recordCount"], 2);
    assert!(json.get("note").is_none());
}

fn single_customer_pool() -> IdentityPool {
    let mut pool = IdentityPool::in_memory();
    pool.upsert_customer(
        CustomerPoolEntry::new(500_123)
            .with_name("Rafiqul Islam")
            .with_country(Locale::Bd),
    )
    .expect("customer");
    pool.add_account("2001000001").expect("account");
    pool
}

fn total(records: &[Value]) -> i64 {
    records.iter().map(amount).sum()
}

fn within_hours(records: &[Value], hours: i64) -> bool {
    records.iter().all(|record| {
        let age = anchor() - timestamp(record);
        age.num_seconds() >= 0 && age.num_seconds() <= hours * 3_600
    })
}

fn distinct(records: &[Value], key: &str) -> usize {
    records
        .iter()
        .map(|record| record[key].to_string())
        .collect::<std::collections::BTreeSet<_>>()
        .len()
}

const THRESHOLD_RULES: &[&str] = &[
    "SINGLE_AMOUNT",
    "CUMULATIVE_DAILY",
    "VELOCITY_COUNT",
    "WIRE_VELOCITY",
    "RAPID_IN_OUT",
    "AGGREGATE_STRUCTURING",
    "COORDINATED_STRUCTURING",
];

/// Panics unless `records` cross the documented threshold of `code`.
fn assert_trips(code: &str, records: &[Value], pooled_customers: usize) {
    match code {
        "SINGLE_AMOUNT" => {
            assert_eq!(records.len(), 1);
            assert!(amount(&records[0]) > 5_000_000, "{}", amount(&records[0]));
        }
        "CUMULATIVE_DAILY" => {
            assert!(total(records) > 10_000_000, "{}", total(records));
            assert!(within_hours(records, 24));
        }
        "VELOCITY_COUNT" => {
            assert!(records.len() > 20, "{}", records.len());
            assert!(within_hours(records, 24));
        }
        "WIRE_VELOCITY" => {
            assert!(records.iter().all(|r| r["type"] == "WIRE_TRANSFER" && r["direction"] == "OUT"));
            assert!(records.len() > 5);
            assert!(distinct(records, "receiver") > 2);
            assert!(within_hours(records, 24));
        }
        "RAPID_IN_OUT" => {
            let inbound: i64 = records.iter().filter(|r| r["direction"] == "IN").map(amount).sum();
            let outbound: i64 = records.iter().filter(|r| r["direction"] == "OUT").map(amount).sum();
            assert!(inbound >= 1_000_000, "{inbound}");
            assert!(outbound as f64 >= inbound as f64 * 0.9, "{outbound} of {inbound}");
            assert!(within_hours(records, 24));
        }
        "AGGREGATE_STRUCTURING" => {
            assert!(records.len() >= 3);
            assert!(total(records) > 1_000_000, "{}", total(records));
            assert!(within_hours(records, 48));
        }
        "COORDINATED_STRUCTURING" => {
            assert_eq!(distinct(records, "customerId"), pooled_customers.min(3));
            if pooled_customers >= 2 {
                assert!(total(records) > 500_000, "{}", total(records));
                assert!(within_hours(records, 2));
            }
        }
        other => panic!("no threshold check for {other}"),
    }
}

#[test]
fn threshold_rules_cross_their_thresholds() {
    let pool = seeded_pool();
    let composer = ViolationComposer::new(&pool).at(anchor());
    let mut rng = ChaCha8Rng::seed_from_u64(500);
    for code in THRESHOLD_RULES {
        for _ in 0..10 {
            let scenario = composer.compose(code, &mut rng).expect("scenario");
            assert_trips(code, &scenario.records, pool.customer_count());
            assert!(scenario.note.is_none(), "{code}: {:?}", scenario.note);
        }
    }
}

#[test]
fn threshold_rules_with_a_single_pooled_customer() {
    let pool = single_customer_pool();
    let composer = ViolationComposer::new(&pool).at(anchor());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    for code in THRESHOLD_RULES {
        let scenario = composer.compose(code, &mut rng).expect("scenario");
        assert_trips(code, &scenario.records, pool.customer_count());
        if *code == "COORDINATED_STRUCTURING" {
            let note = scenario.note.expect("missing prerequisite note");
            assert!(note.contains("at least 2 customers"), "{note}");
        } else {
            assert!(scenario.note.is_none(), "{code}: {:?}", scenario.note);
        }
    }
}
