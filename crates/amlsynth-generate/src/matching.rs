//! Near-miss transforms for screening-style match fidelity.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use rand::{Rng, RngCore};

use crate::errors::{GenerationError, Result};

const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const TRAILING: [char; 4] = ['a', 'h', 'n', 'e'];
const SHARE_TOTAL: u32 = 100;

/// One class of near-miss a name-screening engine must tolerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuzzyTransform {
    /// First vowel (any case) replaced by a random lowercase vowel.
    VowelSubstitution,
    /// First two characters swapped.
    Transposition,
    /// Last character replaced by one of `a`, `h`, `n`, `e`.
    TrailingSubstitution,
    /// All spaces removed.
    WhitespaceRemoval,
}

impl FuzzyTransform {
    pub const ALL: [FuzzyTransform; 4] = [
        FuzzyTransform::VowelSubstitution,
        FuzzyTransform::Transposition,
        FuzzyTransform::TrailingSubstitution,
        FuzzyTransform::WhitespaceRemoval,
    ];

    pub fn draw(rng: &mut dyn RngCore) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn apply(self, name: &str, rng: &mut dyn RngCore) -> String {
        match self {
            Self::VowelSubstitution => {
                let replacement = VOWELS[rng.random_range(0..VOWELS.len())];
                let mut replaced = false;
                name.chars()
                    .map(|ch| {
                        if !replaced && is_vowel(ch) {
                            replaced = true;
                            replacement
                        } else {
                            ch
                        }
                    })
                    .collect()
            }
            Self::Transposition => transpose_leading(name),
            Self::TrailingSubstitution => {
                let mut out = name.to_string();
                out.pop();
                out.push(TRAILING[rng.random_range(0..TRAILING.len())]);
                out
            }
            Self::WhitespaceRemoval => name.replace(' ', ""),
        }
    }

    /// True when `candidate` is an output this transform can produce from `original`.
    pub fn could_produce(self, original: &str, candidate: &str) -> bool {
        match self {
            Self::VowelSubstitution => {
                let source: Vec<char> = original.chars().collect();
                let target: Vec<char> = candidate.chars().collect();
                if source.len() != target.len() {
                    return false;
                }
                match source.iter().position(|ch| is_vowel(*ch)) {
                    Some(idx) => {
                        VOWELS.contains(&target[idx])
                            && source
                                .iter()
                                .zip(&target)
                                .enumerate()
                                .all(|(pos, (a, b))| pos == idx || a == b)
                    }
                    None => original == candidate,
                }
            }
            Self::Transposition => transpose_leading(original) == candidate,
            Self::TrailingSubstitution => {
                let mut source = original.chars();
                source.next_back();
                let mut target = candidate.chars();
                match target.next_back() {
                    Some(last) => TRAILING.contains(&last) && source.as_str() == target.as_str(),
                    None => false,
                }
            }
            Self::WhitespaceRemoval => original.replace(' ', "") == candidate,
        }
    }
}

fn transpose_leading(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(second)) => {
            let mut out = String::with_capacity(name.len());
            out.push(second);
            out.push(first);
            out.push_str(chars.as_str());
            out
        }
        _ => name.to_string(),
    }
}

fn is_vowel(ch: char) -> bool {
    VOWELS.contains(&ch.to_ascii_lowercase())
}

/// Apply one randomly chosen fuzzy transform.
pub fn fuzz_name(name: &str, rng: &mut dyn RngCore) -> String {
    FuzzyTransform::draw(rng).apply(name, rng)
}

/// Same calendar date shifted by up to `max_years` either way.
///
/// Feb 29 falls back to Feb 28 when the target year is not a leap year.
/// Returns `None` when `dob` is not an ISO `YYYY-MM-DD` date.
pub fn jitter_date_of_birth(dob: &str, max_years: i32, rng: &mut dyn RngCore) -> Option<String> {
    let date = NaiveDate::parse_from_str(dob.get(..10).unwrap_or(dob), "%Y-%m-%d").ok()?;
    let year = date.year() + rng.random_range(-max_years..=max_years);
    let shifted = date
        .with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))?;
    Some(shifted.format("%Y-%m-%d").to_string())
}

/// Split 100 into `count` positive integers.
///
/// Draws `count - 1` distinct cut points in `[1, 99]`, sorts them and returns
/// the lengths of the segments between them.
pub fn share_percentages(count: usize, rng: &mut dyn RngCore) -> Result<Vec<u32>> {
    if count > SHARE_TOTAL as usize {
        return Err(GenerationError::InvalidField {
            field: "nomineeSharePercentage".to_string(),
            message: format!("cannot split {SHARE_TOTAL} into {count} positive shares"),
        });
    }
    if count == 0 {
        return Ok(Vec::new());
    }

    let mut cuts = BTreeSet::new();
    while cuts.len() < count - 1 {
        cuts.insert(rng.random_range(1..SHARE_TOTAL));
    }

    let mut shares = Vec::with_capacity(count);
    let mut previous = 0;
    for cut in cuts {
        shares.push(cut - previous);
        previous = cut;
    }
    shares.push(SHARE_TOTAL - previous);
    Ok(shares)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn transforms_match_their_own_output() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for name in ["Rafiqul Islam", "Nusrat Jahan", "Md Ali"] {
            for transform in FuzzyTransform::ALL {
                for _ in 0..10 {
                    let out = transform.apply(name, &mut rng);
                    assert!(transform.could_produce(name, &out), "{transform:?}: {name} -> {out}");
                }
            }
        }
    }

    #[test]
    fn fixed_transform_outputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(FuzzyTransform::Transposition.apply("Rahim", &mut rng), "aRhim");
        assert_eq!(
            FuzzyTransform::WhitespaceRemoval.apply("Abdul Karim Khan", &mut rng),
            "AbdulKarimKhan"
        );
        let trailing = FuzzyTransform::TrailingSubstitution.apply("Kabir", &mut rng);
        assert!(trailing.starts_with("Kabi"));
        assert_eq!(trailing.chars().count(), 5);
        assert_eq!(FuzzyTransform::Transposition.apply("A", &mut rng), "A");
    }

    #[test]
    fn vowel_substitution_is_case_insensitive() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let out = FuzzyTransform::VowelSubstitution.apply("Imran", &mut rng);
        assert_eq!(&out[1..], "mran");
        assert!(VOWELS.contains(&out.chars().next().expect("char")));
    }

    #[test]
    fn dob_jitter_stays_within_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        for _ in 0..50 {
            let out = jitter_date_of_birth("1985-03-14", 2, &mut rng).expect("date");
            let year: i32 = out[..4].parse().expect("year");
            assert!((1983..=1987).contains(&year));
            assert_eq!(&out[4..], "-03-14");
        }
        let leap = jitter_date_of_birth("1988-02-29", 2, &mut rng).expect("date");
        assert!(leap.ends_with("-02-29") || leap.ends_with("-02-28"));
        assert_eq!(jitter_date_of_birth("not a date", 2, &mut rng), None);
    }

    #[test]
    fn shares_sum_to_one_hundred() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for count in 1..=10 {
            let shares = share_percentages(count, &mut rng).expect("shares");
            assert_eq!(shares.len(), count);
            assert_eq!(shares.iter().sum::<u32>(), 100);
            assert!(shares.iter().all(|share| *share >= 1));
        }
        assert_eq!(share_percentages(1, &mut rng).expect("one"), vec![100]);
        assert_eq!(share_percentages(100, &mut rng).expect("max"), vec![1; 100]);
        assert!(share_percentages(101, &mut rng).is_err());
    }
}
