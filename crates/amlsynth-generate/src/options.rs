use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::errors::{GenerationError, Result};
use crate::locale::Locale;

/// Share of new customers generated as Bangladeshi.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountrySplit {
    pub bd_share: f64,
}

impl Default for CountrySplit {
    fn default() -> Self {
        Self { bd_share: 0.7 }
    }
}

impl CountrySplit {
    pub fn select(&self, roll: f64) -> Locale {
        if roll < self.bd_share {
            Locale::Bd
        } else {
            Locale::Us
        }
    }

    pub fn draw(&self, rng: &mut dyn RngCore) -> Locale {
        self.select(rng.random::<f64>())
    }
}

/// How a pool-sourced value relates to the pooled attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    Exact,
    Partial,
    Fuzzy,
}

/// Probabilities of the exact and partial strategies; fuzzy takes the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchTable {
    pub exact: f64,
    pub partial: f64,
}

impl MatchTable {
    pub const fn new(exact: f64, partial: f64) -> Self {
        Self { exact, partial }
    }

    pub fn fuzzy(&self) -> f64 {
        (1.0 - self.exact - self.partial).max(0.0)
    }

    /// Strategy for a roll in `[0, 1)`.
    pub fn select(&self, roll: f64) -> MatchStrategy {
        if roll < self.exact {
            MatchStrategy::Exact
        } else if roll < self.exact + self.partial {
            MatchStrategy::Partial
        } else {
            MatchStrategy::Fuzzy
        }
    }

    pub fn draw(&self, rng: &mut dyn RngCore) -> MatchStrategy {
        self.select(rng.random::<f64>())
    }

    fn validate(&self, name: &str) -> Result<()> {
        check_probability(&format!("{name}.exact"), self.exact)?;
        check_probability(&format!("{name}.partial"), self.partial)?;
        if self.exact + self.partial > 1.0 {
            return Err(GenerationError::InvalidOptions(format!(
                "{name}: exact + partial must not exceed 1"
            )));
        }
        Ok(())
    }
}

/// Behaviour when a violation scenario needs an account and the pool is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountFallback {
    /// Fail with pool exhaustion.
    Strict,
    /// Use a freshly synthesized account id and attach an advisory note.
    #[default]
    Synthesize,
}

/// Named probability tables and policies used by the resolver and composer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    pub country_split: CountrySplit,
    pub name_match: MatchTable,
    pub dob_match: MatchTable,
    /// Partial share is unused; a nationality either matches or is replaced.
    pub nationality_match: MatchTable,
    /// Probability that `dateOrNull` yields a date.
    pub date_or_null: f64,
    /// Largest year offset applied by a partial date-of-birth match.
    pub dob_jitter_years: i32,
    pub account_fallback: AccountFallback,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            country_split: CountrySplit::default(),
            name_match: MatchTable::new(0.3, 0.3),
            dob_match: MatchTable::new(0.3, 0.3),
            nationality_match: MatchTable::new(0.6, 0.0),
            date_or_null: 0.5,
            dob_jitter_years: 2,
            account_fallback: AccountFallback::default(),
        }
    }
}

impl GenerationOptions {
    pub fn validate(&self) -> Result<()> {
        check_probability("country_split.bd_share", self.country_split.bd_share)?;
        self.name_match.validate("name_match")?;
        self.dob_match.validate("dob_match")?;
        self.nationality_match.validate("nationality_match")?;
        check_probability("date_or_null", self.date_or_null)?;
        if self.dob_jitter_years < 0 {
            return Err(GenerationError::InvalidOptions(
                "dob_jitter_years must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_probability(name: &str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GenerationError::InvalidOptions(format!(
            "{name} must be within [0, 1], got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_table_boundaries() {
        let table = MatchTable::new(0.3, 0.3);
        assert_eq!(table.select(0.0), MatchStrategy::Exact);
        assert_eq!(table.select(0.299), MatchStrategy::Exact);
        assert_eq!(table.select(0.3), MatchStrategy::Partial);
        assert_eq!(table.select(0.599), MatchStrategy::Partial);
        assert_eq!(table.select(0.6), MatchStrategy::Fuzzy);
        assert!((table.fuzzy() - 0.4).abs() < 1e-9);
    }

    #[test]
    fn country_split_boundary() {
        let split = CountrySplit::default();
        assert_eq!(split.select(0.69), Locale::Bd);
        assert_eq!(split.select(0.7), Locale::Us);
    }

    #[test]
    fn rejects_out_of_range_probabilities() {
        let mut options = GenerationOptions::default();
        assert!(options.validate().is_ok());
        options.name_match = MatchTable::new(0.8, 0.3);
        assert!(matches!(
            options.validate(),
            Err(GenerationError::InvalidOptions(_))
        ));
        options = GenerationOptions::default();
        options.country_split.bd_share = 1.5;
        assert!(options.validate().is_err());
    }
}
