use thiserror::Error;

/// Core error type shared across amlsynth crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The schema set violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// A schema name was requested that the set does not define.
    #[error("unknown schema: {0}")]
    UnknownSchema(String),
    /// A data type name could not be parsed.
    #[error("unknown data type: {0}")]
    UnknownDataType(String),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results returned by amlsynth crates.
pub type Result<T> = std::result::Result<T, Error>;
