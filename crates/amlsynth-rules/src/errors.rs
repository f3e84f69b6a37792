use amlsynth_generate::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViolationError {
    #[error("unknown rule code: {0}")]
    UnknownRule(String),
    #[error("customer pool is empty; generate customers first")]
    EmptyCustomerPool,
    #[error("account pool is empty; generate accounts first")]
    EmptyAccountPool,
    #[error("no scenario builder for rule code: {0}")]
    NoBuilder(String),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

pub type Result<T> = std::result::Result<T, ViolationError>;
