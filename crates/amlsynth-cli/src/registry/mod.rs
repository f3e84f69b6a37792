mod logging;
mod run;

pub use logging::init_logging;
pub use run::{PoolSizes, RunContext, RunManifest, RunPaths, RunStatus, finish_run, start_run, write_records};

use thiserror::Error;

/// Registry-level errors for run artifacts.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

/// Result type for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
