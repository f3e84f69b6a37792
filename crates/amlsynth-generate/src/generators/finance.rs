use chrono::{DateTime, Datelike, Utc};
use fake::Fake;
use fake::faker::currency::en::CurrencyCode;
use rand::{Rng, RngCore};
use serde_json::{Value, json};

use crate::locale::{self, digits, pick};

pub const HS_CODES: &[&str] = &[
    "8471.30", "6204.62", "8703.23", "2710.19", "8517.12", "8542.31", "0901.11", "5208.12",
    "7108.12", "3004.90",
];

pub const PORTS: &[&str] = &[
    "Shanghai", "Singapore", "Rotterdam", "Antwerp", "Hamburg", "Los Angeles", "Chittagong",
    "Dubai", "Hong Kong", "Busan", "Mumbai", "Colombo", "Felixstowe", "Jeddah", "Yokohama",
];

const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Round to `places` decimals and emit as a JSON number.
pub fn decimal(value: f64, places: i32) -> Value {
    let factor = 10_f64.powi(places);
    json!((value * factor).round() / factor)
}

pub fn random_chars(alphabet: &[u8], len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(alphabet[rng.random_range(0..alphabet.len())]))
        .collect()
}

/// Amount text with two decimals in `[0, 1000]`.
pub fn amount(rng: &mut dyn RngCore) -> String {
    format!("{:.2}", rng.random_range(0.0..=1000.0_f64))
}

pub fn currency_code(rng: &mut dyn RngCore) -> String {
    CurrencyCode().fake_with_rng(rng)
}

pub fn risk_score(rng: &mut dyn RngCore) -> Value {
    json!(rng.random_range(0..=100_u32))
}

pub fn exchange_rate(rng: &mut dyn RngCore) -> Value {
    decimal(rng.random_range(0.5..=2.0_f64), 4)
}

pub fn account_number(rng: &mut dyn RngCore) -> String {
    digits(8, rng)
}

pub fn lc_number(now: DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    format!("LC{}{}", now.year(), digits(8, rng))
}

pub fn swift_reference(rng: &mut dyn RngCore) -> String {
    format!("MT700{}", digits(10, rng))
}

/// Bank code, ISO country code, location code, branch code.
pub fn swift_code(rng: &mut dyn RngCore) -> String {
    let bank = random_chars(UPPER, 4, rng);
    let country = locale::any_country_code(rng);
    let location = random_chars(UPPER_ALNUM, 2, rng);
    let branch = random_chars(UPPER_ALNUM, 3, rng);
    format!("{bank}{country}{location}{branch}")
}

pub fn trade_amount(rng: &mut dyn RngCore) -> Value {
    decimal(rng.random_range(1_000.0..=5_000_000.0_f64), 2)
}

pub fn percentage(rng: &mut dyn RngCore) -> Value {
    decimal(rng.random_range(0.0..=100.0_f64), 2)
}

pub fn hs_code(rng: &mut dyn RngCore) -> String {
    pick(HS_CODES, rng).to_string()
}

pub fn port(rng: &mut dyn RngCore) -> String {
    pick(PORTS, rng).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn swift_code_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for _ in 0..20 {
            let code = swift_code(&mut rng);
            assert!(code.len() >= 11, "{code}");
            assert!(code[..4].chars().all(|ch| ch.is_ascii_uppercase()));
        }
    }

    #[test]
    fn lc_number_uses_anchor_year() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let now = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).single().expect("now");
        let lc = lc_number(now, &mut rng);
        assert!(lc.starts_with("LC2025"));
        assert_eq!(lc.len(), 2 + 4 + 8);
    }

    #[test]
    fn exchange_rate_has_four_decimals_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..50 {
            let rate = exchange_rate(&mut rng).as_f64().expect("number");
            assert!((0.5..=2.0).contains(&rate));
            assert!(((rate * 10_000.0).round() - rate * 10_000.0).abs() < 1e-6);
        }
    }

    #[test]
    fn amount_text_has_two_decimals() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let value = amount(&mut rng);
        let (_, fraction) = value.split_once('.').expect("decimal point");
        assert_eq!(fraction.len(), 2);
    }
}
