//! Schema-driven synthetic record generation for AML test data.
//!
//! A [`GenerationEngine`] validates a schema set once, then resolves root
//! schemas into JSON records through the [`SchemaResolver`]. Cross-entity
//! references are drawn from an [`IdentityPool`] that callers load, commit
//! to and persist explicitly.

pub mod atomic;
pub mod context;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod locale;
pub mod matching;
pub mod options;
pub mod pool;
pub mod resolver;

pub use context::GenerationContext;
pub use engine::{CommitSummary, GenerationEngine};
pub use errors::{GenerationError, PoolKind, Result};
pub use generators::composite::SHARE_PERCENTAGE_FIELD;
pub use generators::identity::{Matched, match_date_of_birth, match_name, match_nationality};
pub use locale::{Locale, Script};
pub use matching::{FuzzyTransform, share_percentages};
pub use options::{AccountFallback, CountrySplit, GenerationOptions, MatchStrategy, MatchTable};
pub use pool::{
    CustomerPoolEntry, IdentityPool, JsonFilePoolStore, MemoryPoolStore, PoolStore,
    SharedIdentityPool,
};
pub use resolver::{Record, SchemaResolver};
