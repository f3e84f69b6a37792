use chrono::{DateTime, Utc};
use rand::RngCore;
use serde_json::{Map, Value};
use tracing::trace;

use amlsynth_core::{FieldDefinition, Schema, SchemaSet};

use crate::context::GenerationContext;
use crate::errors::{GenerationError, Result};
use crate::generators::generate_field;
use crate::options::GenerationOptions;
use crate::pool::IdentityPool;

/// One generated record, keys in schema field order.
pub type Record = Map<String, Value>;

/// Turns schemas into records.
///
/// The resolver only reads the pool. Committing generated identities is the
/// caller's decision, see [`crate::GenerationEngine::commit`].
#[derive(Debug, Clone, Copy)]
pub struct SchemaResolver<'a> {
    schemas: &'a SchemaSet,
    pool: &'a IdentityPool,
    options: &'a GenerationOptions,
    now: DateTime<Utc>,
}

impl<'a> SchemaResolver<'a> {
    pub fn new(schemas: &'a SchemaSet, pool: &'a IdentityPool, options: &'a GenerationOptions) -> Self {
        Self {
            schemas,
            pool,
            options,
            now: Utc::now(),
        }
    }

    /// Anchor for relative dates (past, recent, future).
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn schemas(&self) -> &'a SchemaSet {
        self.schemas
    }

    pub fn pool(&self) -> &'a IdentityPool {
        self.pool
    }

    pub fn options(&self) -> &'a GenerationOptions {
        self.options
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Resolve a schema by name.
    pub fn resolve_named(
        &self,
        name: &str,
        parent: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<Record> {
        let schema = self
            .schemas
            .get(name)
            .ok_or_else(|| GenerationError::UnknownSchema(name.to_string()))?;
        self.resolve(schema, parent, rng)
    }

    /// Resolve one record, folding each field's value into the context before
    /// the next field is generated.
    pub fn resolve(
        &self,
        schema: &Schema,
        parent: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<Record> {
        let ctx = self.prepare_context(schema, parent, rng)?;
        let (record, _) = schema.fields.iter().try_fold(
            (Record::new(), ctx),
            |(mut record, ctx), field| -> Result<(Record, GenerationContext)> {
                let value = self.field_value(field, &ctx, rng)?;
                let ctx = ctx.absorb(field, &value, self.pool);
                record.insert(field.name.clone(), value);
                Ok((record, ctx))
            },
        )?;
        Ok(record)
    }

    /// Generate a single field against an explicit context.
    pub fn field_value(
        &self,
        field: &FieldDefinition,
        ctx: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<Value> {
        trace!(field = %field.name, field_type = %field.field_type, "generating field");
        generate_field(self, field, ctx, rng)
    }

    // A record minting a customer gets a country; a record reading pooled
    // attributes pins one pooled customer so its fields agree.
    fn prepare_context(
        &self,
        schema: &Schema,
        parent: &GenerationContext,
        rng: &mut dyn RngCore,
    ) -> Result<GenerationContext> {
        let mut ctx = parent.clone();
        if ctx.country.is_none() && schema.creates_identity() {
            ctx = ctx.with_country(self.options.country_split.draw(rng));
        }
        if ctx.country.is_none()
            && ctx.customer_id.is_none()
            && schema.uses_pool_identity()
            && self.pool.has_customers()
        {
            let customer = self.pool.draw_customer(rng)?.clone();
            ctx = ctx.pin_customer(customer);
        }
        Ok(ctx)
    }
}
