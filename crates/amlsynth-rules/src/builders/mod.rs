//! Violation builders, one per rule code, grouped by rule family.
//!
//! Every builder starts from a rule-innocuous base record and overrides only
//! the fields the rule inspects, so each scenario carries a single signal.

pub mod base;
pub mod sanction;
pub mod trade;
pub mod transaction;

use chrono::{DateTime, Duration, SecondsFormat, Utc};
use fake::Fake;
use fake::faker::company::en::CompanyName;
use rand::seq::IndexedRandom;
use rand::{Rng, RngCore};
use serde_json::Value;

use amlsynth_generate::{CustomerPoolEntry, IdentityPool};

use crate::reference::{BD_NAMES, DHAKA_AREAS};

/// Identities a scenario is built around.
#[derive(Debug, Clone)]
pub struct Actors<'a> {
    pub customer: &'a CustomerPoolEntry,
    pub account: String,
    pub pool: &'a IdentityPool,
    pub now: DateTime<Utc>,
}

impl Actors<'_> {
    /// Pooled English name, or a stock Bangladeshi name.
    pub fn customer_name(&self, rng: &mut dyn RngCore) -> String {
        match &self.customer.customer_name_eng {
            Some(name) => name.clone(),
            None => random_name(rng),
        }
    }

    /// Name for explanations: the pooled name, falling back to the id.
    pub fn customer_label(&self) -> String {
        self.customer
            .customer_name_eng
            .clone()
            .unwrap_or_else(|| self.customer.customer_id.to_string())
    }
}

/// Records of one scenario plus the operator-facing explanation.
#[derive(Debug, Clone)]
pub struct Built {
    pub records: Vec<Value>,
    pub explanation: String,
    /// State the scenario assumes but cannot create.
    pub prerequisite: Option<&'static str>,
}

impl Built {
    pub fn new(records: Vec<Value>, explanation: impl Into<String>) -> Self {
        Self {
            records,
            explanation: explanation.into(),
            prerequisite: None,
        }
    }

    pub fn requiring(mut self, prerequisite: &'static str) -> Self {
        self.prerequisite = Some(prerequisite);
        self
    }
}

/// Build the scenario for `code`, or `None` when no family owns it.
pub fn build(code: &str, actors: &Actors<'_>, rng: &mut dyn RngCore) -> Option<Built> {
    transaction::build(code, actors, rng)
        .or_else(|| sanction::build(code, actors, rng))
        .or_else(|| trade::build(code, actors, rng))
}

/// Copy every key of `overrides` onto `base`. Both must be JSON objects.
pub fn overlay(mut base: Value, overrides: Value) -> Value {
    if let (Value::Object(target), Value::Object(source)) = (&mut base, overrides) {
        for (key, value) in source {
            target.insert(key, value);
        }
    }
    base
}

/// Uniform whole amount in `min..=max`.
pub fn amount(min: i64, max: i64, rng: &mut dyn RngCore) -> i64 {
    rng.random_range(min..=max)
}

/// `amount` scaled by a factor drawn from `low..high`, rounded.
pub fn scaled(amount: i64, low: f64, high: f64, rng: &mut dyn RngCore) -> i64 {
    (amount as f64 * rng.random_range(low..high)).round() as i64
}

/// RFC 3339 timestamp between `min_hours` and `max_hours` before `now`.
pub fn hours_ago(now: DateTime<Utc>, min_hours: f64, max_hours: f64, rng: &mut dyn RngCore) -> String {
    let hours = if max_hours > min_hours {
        rng.random_range(min_hours..max_hours)
    } else {
        min_hours
    };
    let offset = Duration::milliseconds((hours * 3_600_000.0).round() as i64);
    (now - offset).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Timestamp inside slot `index` of `slots` equal slices of a `span_hours` window.
pub fn slot_ago(
    now: DateTime<Utc>,
    index: usize,
    slots: usize,
    span_hours: f64,
    rng: &mut dyn RngCore,
) -> String {
    let width = span_hours / slots.max(1) as f64;
    hours_ago(now, index as f64 * width, (index + 1) as f64 * width, rng)
}

pub fn days_ago(now: DateTime<Utc>, days: i64) -> String {
    (now - Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn days_ahead(now: DateTime<Utc>, days: i64) -> String {
    (now + Duration::days(days)).format("%Y-%m-%d").to_string()
}

pub fn pick(items: &[&'static str], rng: &mut dyn RngCore) -> &'static str {
    items.choose(rng).copied().unwrap_or_default()
}

/// Up to `count` distinct items in random order.
pub fn pick_n<T: Clone>(items: &[T], count: usize, rng: &mut dyn RngCore) -> Vec<T> {
    items.choose_multiple(rng, count).cloned().collect()
}

pub fn random_name(rng: &mut dyn RngCore) -> String {
    pick(BD_NAMES, rng).to_string()
}

pub fn random_company(rng: &mut dyn RngCore) -> String {
    CompanyName().fake_with_rng(rng)
}

pub fn random_address(rng: &mut dyn RngCore) -> String {
    let house = rng.random_range(1..=99);
    let road = rng.random_range(1..=30);
    let area = pick(DHAKA_AREAS, rng);
    format!("House {house}, Road {road}, {area}, Dhaka")
}

/// Eleven-character BIC with a `BD` country segment.
pub fn random_swift(rng: &mut dyn RngCore) -> String {
    const LETTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut code = String::with_capacity(11);
    for _ in 0..4 {
        code.push(LETTERS[rng.random_range(0..LETTERS.len())] as char);
    }
    code.push_str("BD");
    for _ in 0..5 {
        code.push(ALNUM[rng.random_range(0..ALNUM.len())] as char);
    }
    code
}

/// Eight-digit account number for counterparties outside the pool.
pub fn account_number(rng: &mut dyn RngCore) -> String {
    rng.random_range(10_000_000..=99_999_999_u32).to_string()
}

pub fn amount_of(record: &Value) -> i64 {
    record["amount"].as_i64().unwrap_or_default()
}

pub fn total(records: &[Value]) -> i64 {
    records.iter().map(amount_of).sum()
}

pub fn text_of<'v>(record: &'v Value, key: &str) -> &'v str {
    record[key].as_str().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    #[test]
    fn overlay_replaces_and_adds_keys() {
        let merged = overlay(json!({ "a": 1, "b": 2 }), json!({ "b": 3, "c": 4 }));
        assert_eq!(merged, json!({ "a": 1, "b": 3, "c": 4 }));
    }

    #[test]
    fn slots_stay_inside_the_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("now");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for index in 0..4 {
            let stamp = slot_ago(now, index, 4, 36.0, &mut rng);
            let at = DateTime::parse_from_rfc3339(&stamp).expect("rfc3339");
            let age = now.signed_duration_since(at.with_timezone(&Utc));
            assert!(age >= Duration::hours(9 * index as i64));
            assert!(age <= Duration::hours(9 * (index as i64 + 1)));
        }
    }

    #[test]
    fn swift_codes_carry_country_segment() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let code = random_swift(&mut rng);
        assert_eq!(code.len(), 11);
        assert_eq!(&code[4..6], "BD");
    }
}
