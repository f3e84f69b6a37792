use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use amlsynth_generate::atomic::write_bytes_atomic;
use amlsynth_generate::{
    AccountFallback, CountrySplit, GenerationError, GenerationOptions, MatchTable,
};

pub const DEFAULT_SETTINGS_FILE: &str = "amlsynth.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("toml encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
    #[error("failed to persist settings: {0}")]
    Persist(#[from] GenerationError),
}

pub type SettingsResult<T> = Result<T, SettingsError>;

/// Overrides for the named probability tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Probabilities {
    pub bd_share: f64,
    pub date_or_null: f64,
    pub dob_jitter_years: i32,
    pub name_match: MatchTable,
    pub dob_match: MatchTable,
    pub nationality_match: MatchTable,
}

impl Default for Probabilities {
    fn default() -> Self {
        let defaults = GenerationOptions::default();
        Self {
            bd_share: defaults.country_split.bd_share,
            date_or_null: defaults.date_or_null,
            dob_jitter_years: defaults.dob_jitter_years,
            name_match: defaults.name_match,
            dob_match: defaults.dob_match,
            nationality_match: defaults.nationality_match,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// User schema set; the bundled set is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_path: Option<PathBuf>,
    pub pool_dir: PathBuf,
    pub runs_dir: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub log_level: String,
    pub account_fallback: AccountFallback,
    pub probabilities: Probabilities,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_path: None,
            pool_dir: PathBuf::from("config"),
            runs_dir: PathBuf::from("runs"),
            seed: None,
            log_level: "info".to_string(),
            account_fallback: AccountFallback::default(),
            probabilities: Probabilities::default(),
        }
    }
}

impl Settings {
    pub fn generation_options(&self) -> GenerationOptions {
        let p = &self.probabilities;
        GenerationOptions {
            country_split: CountrySplit { bd_share: p.bd_share },
            name_match: p.name_match,
            dob_match: p.dob_match,
            nationality_match: p.nationality_match,
            date_or_null: p.date_or_null,
            dob_jitter_years: p.dob_jitter_years,
            account_fallback: self.account_fallback,
        }
    }
}

/// Read `path`, or write the defaults there when it does not exist yet.
pub fn load_or_create_settings(path: &Path) -> SettingsResult<Settings> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    save_settings(path, &settings)?;
    Ok(settings)
}

pub fn save_settings(path: &Path, settings: &Settings) -> SettingsResult<()> {
    let encoded = toml::to_string_pretty(settings)?;
    write_bytes_atomic(path, encoded.as_bytes()).map_err(SettingsError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        let settings = load_or_create_settings(&path).expect("create");
        assert_eq!(settings, Settings::default());
        assert!(path.exists());
        assert_eq!(load_or_create_settings(&path).expect("reload"), settings);
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(
            &path,
            "seed = 42\naccount_fallback = \"strict\"\n\n[probabilities]\nbd_share = 0.5\n",
        )
        .expect("write");

        let settings = load_or_create_settings(&path).expect("load");
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.pool_dir, PathBuf::from("config"));

        let options = settings.generation_options();
        assert_eq!(options.account_fallback, AccountFallback::Strict);
        assert_eq!(options.country_split.bd_share, 0.5);
        assert_eq!(options.name_match, GenerationOptions::default().name_match);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(DEFAULT_SETTINGS_FILE);
        std::fs::write(&path, "seed = \"not a number\"").expect("write");
        assert!(matches!(
            load_or_create_settings(&path),
            Err(SettingsError::TomlDecode(_))
        ));
    }
}
