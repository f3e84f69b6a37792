use chrono::{DateTime, Duration, SecondsFormat, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence, Word};
use rand::{Rng, RngCore};
use serde_json::{Value, json};

const SECONDS_PER_DAY: i64 = 86_400;
/// Window for past and future dates.
const YEAR_SECONDS: i64 = 365 * SECONDS_PER_DAY;
/// Window for "recent" timestamps.
const RECENT_SECONDS: i64 = SECONDS_PER_DAY;

pub fn uuid(rng: &mut dyn RngCore) -> String {
    let mut bytes = [0_u8; 16];
    rng.fill_bytes(&mut bytes);
    uuid::Builder::from_random_bytes(bytes)
        .into_uuid()
        .to_string()
}

pub fn word(rng: &mut dyn RngCore) -> String {
    Word().fake_with_rng(rng)
}

pub fn sentence(rng: &mut dyn RngCore) -> String {
    Sentence(4..10).fake_with_rng(rng)
}

pub fn paragraph(rng: &mut dyn RngCore) -> String {
    Paragraph(3..6).fake_with_rng(rng)
}

pub fn number(rng: &mut dyn RngCore) -> Value {
    json!(rng.random_range(1..=1000_u32))
}

pub fn boolean(rng: &mut dyn RngCore) -> bool {
    rng.random_bool(0.5)
}

/// Eight-digit identifier as text.
pub fn numeric_id(rng: &mut dyn RngCore) -> String {
    rng.random_range(10_000_000..=99_999_999_u32).to_string()
}

fn offset(now: DateTime<Utc>, window: i64, forward: bool, rng: &mut dyn RngCore) -> DateTime<Utc> {
    let seconds = Duration::seconds(rng.random_range(1..=window));
    if forward { now + seconds } else { now - seconds }
}

/// `YYYY-MM-DD` within the year before `now`.
pub fn past_date(now: DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    offset(now, YEAR_SECONDS, false, rng)
        .format("%Y-%m-%d")
        .to_string()
}

/// `YYYY-MM-DD` within the year after `now`.
pub fn future_date(now: DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    offset(now, YEAR_SECONDS, true, rng)
        .format("%Y-%m-%d")
        .to_string()
}

/// RFC 3339 timestamp with milliseconds within the day before `now`.
pub fn recent_datetime(now: DateTime<Utc>, rng: &mut dyn RngCore) -> String {
    offset(now, RECENT_SECONDS, false, rng).to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// A recent date with probability `date_share`, otherwise null.
pub fn date_or_null(now: DateTime<Utc>, date_share: f64, rng: &mut dyn RngCore) -> Value {
    if rng.random::<f64>() < date_share {
        let date = offset(now, RECENT_SECONDS, false, rng);
        Value::String(date.format("%Y-%m-%d").to_string())
    } else {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).single().expect("anchor")
    }

    #[test]
    fn uuid_is_version_four() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let value = uuid::Uuid::parse_str(&super::uuid(&mut rng)).expect("uuid");
        assert_eq!(value.get_version_num(), 4);
    }

    #[test]
    fn past_and_future_dates_straddle_anchor() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let today = anchor().date_naive();
        for _ in 0..100 {
            let past = NaiveDate::parse_from_str(&past_date(anchor(), &mut rng), "%Y-%m-%d")
                .expect("past");
            assert!(past <= today && past >= today - Duration::days(366));
            let future = NaiveDate::parse_from_str(&future_date(anchor(), &mut rng), "%Y-%m-%d")
                .expect("future");
            assert!(future >= today && future <= today + Duration::days(366));
        }
    }

    #[test]
    fn recent_datetime_has_millis_and_zulu() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let value = recent_datetime(anchor(), &mut rng);
        assert!(value.ends_with('Z'));
        assert_eq!(value.len(), "2024-06-15T11:59:59.000Z".len());
    }

    #[test]
    fn date_or_null_respects_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        assert!(date_or_null(anchor(), 0.0, &mut rng).is_null());
        assert!(date_or_null(anchor(), 1.0, &mut rng).is_string());
    }

    #[test]
    fn numeric_id_has_eight_digits() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let id = numeric_id(&mut rng);
            assert_eq!(id.len(), 8);
            assert!(id.chars().all(|ch| ch.is_ascii_digit()));
        }
    }
}
