//! Locale provider for names, addresses, phones and banks.
//!
//! A record carries at most one [`Locale`]. Bangladeshi values come from the
//! curated lists in [`data`]; US and unpinned values come from `fake`, except
//! bank names, which also use curated lists.

pub mod data;

use std::fmt;

use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, CountryCode, CountryName, StreetName};
use fake::faker::name::en::{FirstName, LastName, Name};
use fake::faker::phone_number::en::PhoneNumber;
use rand::{Rng, RngCore};
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

/// Probability that a Bangladeshi name is drawn from the male list.
const MALE_SHARE: f64 = 0.5;

const MOBILE_PREFIXES: &[&str] = &["013", "014", "015", "016", "017", "018", "019"];

/// Country a record is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "BD")]
    Bd,
    #[serde(rename = "US")]
    Us,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "BD" => Some(Self::Bd),
            "US" => Some(Self::Us),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bd => "BD",
            Self::Us => "US",
        }
    }

    pub fn country_name(self) -> &'static str {
        match self {
            Self::Bd => "Bangladesh",
            Self::Us => "United States",
        }
    }

    /// Locale implied by a nationality string.
    pub fn from_nationality(nationality: Option<&str>) -> Self {
        if nationality == Some(Self::Bd.country_name()) {
            Self::Bd
        } else {
            Self::Us
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Script used for Bangladeshi names and addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Script {
    #[default]
    Latin,
    Bengali,
}

impl Script {
    pub fn for_bengali_flag(bengali: bool) -> Self {
        if bengali { Self::Bengali } else { Self::Latin }
    }
}

pub(crate) fn pick<'a>(values: &'a [&'a str], rng: &mut dyn RngCore) -> &'a str {
    values.choose(rng).copied().unwrap_or_default()
}

pub(crate) fn digits(len: usize, rng: &mut dyn RngCore) -> String {
    (0..len)
        .map(|_| char::from(b'0' + (rng.next_u32() % 10) as u8))
        .collect()
}

pub fn full_name(locale: Option<Locale>, script: Script, rng: &mut dyn RngCore) -> String {
    match (locale, script) {
        (Some(Locale::Bd), Script::Bengali) => bd_full_name(
            data::MALE_FIRST_NAMES_BN,
            data::FEMALE_FIRST_NAMES_BN,
            data::LAST_NAMES_BN,
            rng,
        ),
        (Some(Locale::Bd), Script::Latin) => bangladeshi_full_name(rng),
        _ => Name().fake_with_rng(rng),
    }
}

/// Latin-script Bangladeshi name, regardless of the record's locale.
pub fn bangladeshi_full_name(rng: &mut dyn RngCore) -> String {
    bd_full_name(
        data::MALE_FIRST_NAMES,
        data::FEMALE_FIRST_NAMES,
        data::LAST_NAMES,
        rng,
    )
}

fn bd_full_name(
    male: &[&str],
    female: &[&str],
    last: &[&str],
    rng: &mut dyn RngCore,
) -> String {
    let first = if rng.random_bool(MALE_SHARE) {
        pick(male, rng)
    } else {
        pick(female, rng)
    };
    format!("{first} {}", pick(last, rng))
}

pub fn first_name(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(Locale::Bd) => {
            let list = if rng.random_bool(MALE_SHARE) {
                data::MALE_FIRST_NAMES
            } else {
                data::FEMALE_FIRST_NAMES
            };
            pick(list, rng).to_string()
        }
        _ => FirstName().fake_with_rng(rng),
    }
}

pub fn last_name(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(Locale::Bd) => pick(data::LAST_NAMES, rng).to_string(),
        _ => LastName().fake_with_rng(rng),
    }
}

pub fn address(locale: Option<Locale>, script: Script, rng: &mut dyn RngCore) -> String {
    if locale != Some(Locale::Bd) {
        let number: String = BuildingNumber().fake_with_rng(rng);
        let street: String = StreetName().fake_with_rng(rng);
        return format!("{number} {street}");
    }

    let house = rng.random_range(1..=200);
    let road = rng.random_range(1..=50);
    let (areas, cities) = match script {
        Script::Latin => (data::AREAS, data::CITIES),
        Script::Bengali => (data::AREAS_BN, data::CITIES_BN),
    };
    let area = pick(areas, rng);
    let city = pick(cities, rng);
    let postal = rng.random_range(1000..=9999);
    match script {
        Script::Latin => format!("House #{house}, Road #{road}, {area}, {city} {postal}"),
        Script::Bengali => format!("বাড়ি #{house}, রাস্তা #{road}, {area}, {city} {postal}"),
    }
}

pub fn city(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(Locale::Bd) => pick(data::CITIES, rng).to_string(),
        _ => CityName().fake_with_rng(rng),
    }
}

pub fn country(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(locale) => locale.country_name().to_string(),
        None => any_country(rng),
    }
}

pub fn any_country(rng: &mut dyn RngCore) -> String {
    CountryName().fake_with_rng(rng)
}

pub fn country_code(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(locale) => locale.as_str().to_string(),
        None => any_country_code(rng),
    }
}

pub fn any_country_code(rng: &mut dyn RngCore) -> String {
    CountryCode().fake_with_rng(rng)
}

pub fn phone(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(Locale::Bd) => {
            // The trunk zero is dropped after the country code.
            let prefix = pick(MOBILE_PREFIXES, rng).trim_start_matches('0');
            format!("+880{prefix}{}", digits(8, rng))
        }
        _ => PhoneNumber().fake_with_rng(rng),
    }
}

pub fn bank_name(locale: Option<Locale>, rng: &mut dyn RngCore) -> String {
    match locale {
        Some(Locale::Bd) => pick(data::BANKS, rng).to_string(),
        Some(Locale::Us) => pick(data::US_BANKS, rng).to_string(),
        None => {
            let idx = rng.random_range(0..data::BANKS.len() + data::US_BANKS.len());
            data::BANKS
                .iter()
                .chain(data::US_BANKS)
                .nth(idx)
                .copied()
                .unwrap_or_default()
                .to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn bangladeshi_phone_has_mobile_prefix() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let value = phone(Some(Locale::Bd), &mut rng);
            assert!(value.starts_with("+8801"), "{value}");
            assert!(!value.starts_with("+8800"), "{value}");
            assert_eq!(value.len(), 4 + 2 + 8);
            let national = format!("0{}", &value[4..6]);
            assert!(MOBILE_PREFIXES.contains(&national.as_str()), "{value}");
        }
    }

    #[test]
    fn bengali_script_address_uses_bengali_lists() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let value = address(Some(Locale::Bd), Script::Bengali, &mut rng);
        assert!(value.starts_with("বাড়ি #"), "{value}");
        assert!(data::CITIES_BN.iter().any(|city| value.contains(city)));
    }

    #[test]
    fn bengali_script_is_ignored_outside_bangladesh() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let value = address(Some(Locale::Us), Script::Bengali, &mut rng);
        assert!(!value.contains("বাড়ি"));
    }

    #[test]
    fn country_follows_locale() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(country(Some(Locale::Bd), &mut rng), "Bangladesh");
        assert_eq!(country(Some(Locale::Us), &mut rng), "United States");
        assert_eq!(country_code(Some(Locale::Bd), &mut rng), "BD");
    }

    #[test]
    fn bank_names_come_from_the_locale_list() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        for _ in 0..20 {
            let bd = bank_name(Some(Locale::Bd), &mut rng);
            assert!(data::BANKS.contains(&bd.as_str()));
            let us = bank_name(Some(Locale::Us), &mut rng);
            assert!(data::US_BANKS.contains(&us.as_str()));
        }
    }

    #[test]
    fn nationality_maps_to_locale() {
        assert_eq!(Locale::from_nationality(Some("Bangladesh")), Locale::Bd);
        assert_eq!(Locale::from_nationality(Some("Canada")), Locale::Us);
        assert_eq!(Locale::from_nationality(None), Locale::Us);
    }
}
