//! Rule catalog and violation scenario composition.
//!
//! [`RuleCatalog`] lists the built-in transaction monitoring, sanction
//! screening and trade-based money laundering rules. [`ViolationComposer`]
//! draws a customer (and, when available, an account) from an
//! [`IdentityPool`](amlsynth_generate::IdentityPool) and builds records that
//! trip the requested rule, together with an explanation of why they do.

#![recursion_limit = "256"]

pub mod builders;
pub mod catalog;
pub mod composer;
pub mod errors;
pub mod format;
pub mod reference;
pub mod scenario;

pub use catalog::{CatalogView, Rule, RuleCatalog, RuleCategory, RuleGroup, Severity};
pub use composer::{MAX_BATCHES, ViolationComposer};
pub use errors::{Result, ViolationError};
pub use scenario::ViolationScenario;
