use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use tracing::{info, warn};

use amlsynth_generate::{AccountFallback, IdentityPool};

use crate::builders::{self, Actors};
use crate::catalog::RuleCatalog;
use crate::errors::{Result, ViolationError};
use crate::scenario::ViolationScenario;

/// Largest number of batches one request may compose.
pub const MAX_BATCHES: usize = 100;

const SYNTHESIZED_ACCOUNT_NOTE: &str = "(Note: No accounts in pool, using random account number. \
Generate accounts first for accurate matching.)";

/// Composes rule-violating scenarios around identities drawn from the pool.
///
/// The pool is only read; scenario records are never committed back.
#[derive(Debug, Clone)]
pub struct ViolationComposer<'a> {
    pool: &'a IdentityPool,
    catalog: RuleCatalog,
    account_fallback: AccountFallback,
    now: Option<DateTime<Utc>>,
}

impl<'a> ViolationComposer<'a> {
    pub fn new(pool: &'a IdentityPool) -> Self {
        Self {
            pool,
            catalog: RuleCatalog::builtin(),
            account_fallback: AccountFallback::default(),
            now: None,
        }
    }

    pub fn with_account_fallback(mut self, fallback: AccountFallback) -> Self {
        self.account_fallback = fallback;
        self
    }

    /// Fix the anchor for relative timestamps instead of reading the clock.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    /// One scenario for `code`.
    ///
    /// Fails when the code is unknown or the customer pool is empty. An
    /// empty account pool either fails or falls back to a synthesized
    /// account number, depending on the account fallback.
    pub fn compose(&self, code: &str, rng: &mut dyn RngCore) -> Result<ViolationScenario> {
        let rule = *self.catalog.lookup(code)?;
        if !self.pool.has_customers() {
            return Err(ViolationError::EmptyCustomerPool);
        }
        let customer = self.pool.draw_customer(rng)?;

        let mut notes = Vec::new();
        let account = if self.pool.has_accounts() {
            self.pool.draw_account(rng)?.to_string()
        } else {
            match self.account_fallback {
                AccountFallback::Strict => return Err(ViolationError::EmptyAccountPool),
                AccountFallback::Synthesize => {
                    notes.push(SYNTHESIZED_ACCOUNT_NOTE);
                    rng.random_range(1_000_000_000_u64..=9_999_999_999).to_string()
                }
            }
        };

        let actors = Actors {
            customer,
            account,
            pool: self.pool,
            now: self.now.unwrap_or_else(Utc::now),
        };
        let built = builders::build(rule.code, &actors, rng)
            .ok_or_else(|| ViolationError::NoBuilder(rule.code.to_string()))?;
        notes.extend(built.prerequisite);

        let note = (!notes.is_empty()).then(|| notes.join(" "));
        if let Some(note) = &note {
            warn!(rule = rule.code, "{note}");
        }
        info!(
            rule = rule.code,
            customer_id = customer.customer_id,
            records = built.records.len(),
            "violation scenario composed"
        );
        Ok(ViolationScenario::new(rule, built.records, built.explanation, note))
    }

    /// `quantity` independent scenarios merged into one; quantity is clamped to `1..=MAX_BATCHES`.
    pub fn compose_batch(
        &self,
        code: &str,
        quantity: usize,
        rng: &mut dyn RngCore,
    ) -> Result<ViolationScenario> {
        let quantity = quantity.clamp(1, MAX_BATCHES);
        let batches = (0..quantity)
            .map(|_| self.compose(code, rng))
            .collect::<Result<Vec<_>>>()?;
        ViolationScenario::merge(batches).ok_or_else(|| ViolationError::UnknownRule(code.to_string()))
    }
}
