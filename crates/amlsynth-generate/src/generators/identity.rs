//! Identity minting, pool references and pool-sourced attributes.

use chrono::{DateTime, Utc};
use rand::{Rng, RngCore};
use serde_json::{Value, json};

use crate::context::GenerationContext;
use crate::errors::{GenerationError, Result};
use crate::generators::primitives::past_date;
use crate::locale::{self, Locale};
use crate::matching::{fuzz_name, jitter_date_of_birth};
use crate::options::{MatchStrategy, MatchTable};
use crate::pool::{CustomerPoolEntry, IdentityPool};
use crate::resolver::SchemaResolver;

pub const CUSTOMER_ID_MIN: u64 = 100_000;
pub const CUSTOMER_ID_MAX: u64 = 999_999;

/// A pool-sourced value and the strategy that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matched {
    pub strategy: MatchStrategy,
    pub value: String,
}

/// Fresh customer id. The pool is not touched.
pub fn customer_id(rng: &mut dyn RngCore) -> Value {
    json!(rng.random_range(CUSTOMER_ID_MIN..=CUSTOMER_ID_MAX))
}

pub fn customer_id_ref(
    pool: &IdentityPool,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let pinned = ctx
        .customer_id
        .or_else(|| ctx.selected_customer.as_ref().map(|c| c.customer_id));
    match pinned {
        Some(customer_id) => Ok(json!(customer_id)),
        None => Ok(json!(pool.draw_customer(rng)?.customer_id)),
    }
}

pub fn account_id_ref(
    pool: &IdentityPool,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    match &ctx.account_id {
        Some(account_id) => Ok(json!(account_id)),
        None => Ok(json!(pool.draw_account(rng)?)),
    }
}

fn pooled_customer<'a>(
    pool: &'a IdentityPool,
    ctx: &'a GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<&'a CustomerPoolEntry> {
    match &ctx.selected_customer {
        Some(customer) => Ok(customer),
        None => pool.draw_customer(rng),
    }
}

/// Exact and partial keep the name; fuzzy applies one transform.
pub fn match_name(name: &str, table: &MatchTable, rng: &mut dyn RngCore) -> Matched {
    let strategy = table.draw(rng);
    let value = match strategy {
        MatchStrategy::Exact | MatchStrategy::Partial => name.to_string(),
        MatchStrategy::Fuzzy => fuzz_name(name, rng),
    };
    Matched { strategy, value }
}

/// Exact keeps the date, partial shifts the year, fuzzy picks an unrelated date.
pub fn match_date_of_birth(
    dob: &str,
    table: &MatchTable,
    jitter_years: i32,
    now: DateTime<Utc>,
    rng: &mut dyn RngCore,
) -> Result<Matched> {
    let strategy = table.draw(rng);
    let value = match strategy {
        MatchStrategy::Exact => dob.to_string(),
        MatchStrategy::Partial => jitter_date_of_birth(dob, jitter_years, rng).ok_or_else(|| {
            GenerationError::invalid_field(
                "dateOfBirth",
                format!("pooled date of birth '{dob}' is not an ISO date"),
            )
        })?,
        MatchStrategy::Fuzzy => past_date(now, rng),
    };
    Ok(Matched { strategy, value })
}

/// Exact keeps the nationality; anything else is replaced by the record's country.
pub fn match_nationality(
    nationality: &str,
    table: &MatchTable,
    country: Option<Locale>,
    rng: &mut dyn RngCore,
) -> Matched {
    let strategy = table.draw(rng);
    let value = match strategy {
        MatchStrategy::Exact => nationality.to_string(),
        MatchStrategy::Partial | MatchStrategy::Fuzzy => locale::country(country, rng),
    };
    Matched { strategy, value }
}

pub fn name_from_pool(
    resolver: &SchemaResolver<'_>,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let customer = pooled_customer(resolver.pool(), ctx, rng)?;
    let value = match customer.customer_name_eng.as_deref() {
        Some(name) => match_name(name, &resolver.options().name_match, rng).value,
        None => locale::bangladeshi_full_name(rng),
    };
    Ok(Value::String(value))
}

pub fn dob_from_pool(
    resolver: &SchemaResolver<'_>,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let customer = pooled_customer(resolver.pool(), ctx, rng)?;
    let options = resolver.options();
    let value = match customer.date_of_birth.as_deref() {
        Some(dob) => {
            match_date_of_birth(dob, &options.dob_match, options.dob_jitter_years, resolver.now(), rng)?
                .value
        }
        None => past_date(resolver.now(), rng),
    };
    Ok(Value::String(value))
}

pub fn nationality_from_pool(
    resolver: &SchemaResolver<'_>,
    ctx: &GenerationContext,
    rng: &mut dyn RngCore,
) -> Result<Value> {
    let customer = pooled_customer(resolver.pool(), ctx, rng)?;
    let value = match customer.nationality.as_deref() {
        Some(nationality) => {
            match_nationality(nationality, &resolver.options().nationality_match, ctx.country, rng)
                .value
        }
        None => locale::country(ctx.country, rng),
    };
    Ok(Value::String(value))
}
