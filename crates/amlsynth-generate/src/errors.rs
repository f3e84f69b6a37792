use std::fmt;

use thiserror::Error;

/// The two identity pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Customers,
    Accounts,
}

impl PoolKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Accounts => "accounts",
        }
    }

    /// Corrective instruction shown when the pool is drawn while empty.
    pub fn hint(self) -> &'static str {
        match self {
            Self::Customers => "Please generate customers first.",
            Self::Accounts => "Please generate accounts first.",
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors emitted by record generation and pool access.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No {pool} available. {hint}")]
    PoolExhausted { pool: PoolKind, hint: &'static str },
    #[error("unknown schema: {0}")]
    UnknownSchema(String),
    #[error("invalid field '{field}': {message}")]
    InvalidField { field: String, message: String },
    #[error("invalid schema set: {0}")]
    InvalidSchemaSet(String),
    #[error("invalid options: {0}")]
    InvalidOptions(String),
    #[error("{0}")]
    PreconditionFailed(String),
    #[error("pool store error: {0}")]
    Store(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] amlsynth_core::Error),
}

impl GenerationError {
    pub fn pool_exhausted(pool: PoolKind) -> Self {
        Self::PoolExhausted {
            pool,
            hint: pool.hint(),
        }
    }

    pub(crate) fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GenerationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_messages_name_the_pool() {
        assert_eq!(
            GenerationError::pool_exhausted(PoolKind::Customers).to_string(),
            "No customers available. Please generate customers first."
        );
        assert_eq!(
            GenerationError::pool_exhausted(PoolKind::Accounts).to_string(),
            "No accounts available. Please generate accounts first."
        );
    }
}
