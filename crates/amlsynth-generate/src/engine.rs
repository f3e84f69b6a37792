use chrono::{DateTime, Utc};
use rand::RngCore;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use amlsynth_core::{DataType, SchemaSet, validate_schema_set};

use crate::context::GenerationContext;
use crate::errors::{GenerationError, PoolKind, Result};
use crate::options::GenerationOptions;
use crate::pool::{CustomerPoolEntry, IdentityPool, account_id_of};
use crate::resolver::SchemaResolver;

/// Outcome of committing generated records to a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommitSummary {
    /// `None` when the data type has no pool.
    pub pool: Option<&'static str>,
    pub added: usize,
    pub size: usize,
}

/// Validated schema set plus options: the composition point for generation.
#[derive(Debug, Clone)]
pub struct GenerationEngine {
    schemas: SchemaSet,
    options: GenerationOptions,
    now: Option<DateTime<Utc>>,
}

impl GenerationEngine {
    /// Refuses schema sets whose validation report has errors.
    pub fn new(schemas: SchemaSet, options: GenerationOptions) -> Result<Self> {
        options.validate()?;
        let report = validate_schema_set(&schemas);
        if let Some(summary) = report.error_summary() {
            return Err(GenerationError::InvalidSchemaSet(summary));
        }
        for issue in &report.warnings {
            warn!(code = %issue.code, path = %issue.path, "{}", issue.message);
        }
        Ok(Self {
            schemas,
            options,
            now: None,
        })
    }

    /// Engine over the bundled default schema set.
    pub fn with_default_schemas(options: GenerationOptions) -> Result<Self> {
        Self::new(SchemaSet::default_set()?, options)
    }

    /// Fix the anchor for relative dates instead of reading the clock per call.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    pub fn schemas(&self) -> &SchemaSet {
        &self.schemas
    }

    pub fn options(&self) -> &GenerationOptions {
        &self.options
    }

    pub fn resolver<'a>(&'a self, pool: &'a IdentityPool) -> SchemaResolver<'a> {
        let resolver = SchemaResolver::new(&self.schemas, pool, &self.options);
        match self.now {
            Some(now) => resolver.at(now),
            None => resolver,
        }
    }

    /// Reject requests that cannot produce referentially valid records.
    pub fn check_preconditions(
        &self,
        data_type: DataType,
        count: usize,
        pool: &IdentityPool,
    ) -> Result<()> {
        if count == 0 {
            return Err(GenerationError::PreconditionFailed(
                "count must be at least 1".to_string(),
            ));
        }
        let needs_customers = matches!(
            data_type,
            DataType::Account | DataType::Transaction | DataType::Sanction
        );
        if needs_customers && !pool.has_customers() {
            return Err(GenerationError::PreconditionFailed(format!(
                "No customers available. Please generate customers first before generating {data_type}s."
            )));
        }
        Ok(())
    }

    /// Generate `count` independent records of a root data type.
    pub fn generate(
        &self,
        data_type: DataType,
        count: usize,
        pool: &IdentityPool,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Value>> {
        self.check_preconditions(data_type, count, pool)?;
        let schema = self.schemas.root(data_type)?;
        let resolver = self.resolver(pool);
        let root = GenerationContext::new();
        let records = (0..count)
            .map(|_| resolver.resolve(schema, &root, rng).map(Value::Object))
            .collect::<Result<Vec<_>>>()?;
        info!(data_type = %data_type, count = records.len(), "records generated");
        Ok(records)
    }

    /// Add generated customers or accounts to their pool.
    ///
    /// Other data types have no pool and are left alone. Account records
    /// without an account number are skipped.
    pub fn commit(
        &self,
        data_type: DataType,
        records: &[Value],
        pool: &mut IdentityPool,
    ) -> Result<CommitSummary> {
        match data_type {
            DataType::Customer => {
                let entries = records
                    .iter()
                    .map(CustomerPoolEntry::from_record)
                    .collect::<Result<Vec<_>>>()?;
                let before = pool.customer_count();
                pool.upsert_customers(entries)?;
                let summary = CommitSummary {
                    pool: Some(PoolKind::Customers.as_str()),
                    added: pool.customer_count() - before,
                    size: pool.customer_count(),
                };
                info!(pool = "customers", added = summary.added, size = summary.size, "pool commit");
                Ok(summary)
            }
            DataType::Account => {
                let mut ids = Vec::with_capacity(records.len());
                for (idx, record) in records.iter().enumerate() {
                    match account_id_of(record) {
                        Some(id) => ids.push(id),
                        None => warn!(record = idx, "account record has no account number, not pooled"),
                    }
                }
                let added = pool.add_accounts(ids)?;
                let summary = CommitSummary {
                    pool: Some(PoolKind::Accounts.as_str()),
                    added,
                    size: pool.account_count(),
                };
                info!(pool = "accounts", added = summary.added, size = summary.size, "pool commit");
                Ok(summary)
            }
            DataType::Transaction | DataType::Sanction | DataType::Trade | DataType::Credit => {
                Ok(CommitSummary {
                    pool: None,
                    added: 0,
                    size: 0,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlsynth_core::{FieldDefinition, FieldType, Schema};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use serde_json::json;

    #[test]
    fn rejects_invalid_schema_sets() {
        let set = SchemaSet::new().with_schema(
            "customer",
            Schema::new(vec![FieldDefinition::new("kind", FieldType::Select)]),
        );
        assert!(matches!(
            GenerationEngine::new(set, GenerationOptions::default()),
            Err(GenerationError::InvalidSchemaSet(_))
        ));
    }

    #[test]
    fn zero_count_is_rejected() {
        let engine = GenerationEngine::with_default_schemas(GenerationOptions::default())
            .expect("engine");
        let pool = IdentityPool::in_memory();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(matches!(
            engine.generate(DataType::Customer, 0, &pool, &mut rng),
            Err(GenerationError::PreconditionFailed(_))
        ));
    }

    #[test]
    fn sanctions_need_customers() {
        let engine = GenerationEngine::with_default_schemas(GenerationOptions::default())
            .expect("engine");
        let pool = IdentityPool::in_memory();
        let err = engine
            .check_preconditions(DataType::Sanction, 1, &pool)
            .expect_err("empty pool");
        assert_eq!(
            err.to_string(),
            "No customers available. Please generate customers first before generating sanctions."
        );
        assert!(engine.check_preconditions(DataType::Trade, 1, &pool).is_ok());
    }

    #[test]
    fn commit_skips_accounts_without_number() {
        let engine = GenerationEngine::with_default_schemas(GenerationOptions::default())
            .expect("engine");
        let mut pool = IdentityPool::in_memory();
        let records = vec![
            json!({ "uniqueAccountNumber": "1001" }),
            json!({ "title": "no number" }),
            json!({ "accountNumber": "1002" }),
        ];
        let summary = engine
            .commit(DataType::Account, &records, &mut pool)
            .expect("commit");
        assert_eq!(summary.added, 2);
        assert!(pool.contains_account("1001"));
        assert!(pool.contains_account("1002"));
    }

    #[test]
    fn commit_is_a_no_op_for_unpooled_types() {
        let engine = GenerationEngine::with_default_schemas(GenerationOptions::default())
            .expect("engine");
        let mut pool = IdentityPool::in_memory();
        let summary = engine
            .commit(DataType::Trade, &[json!({ "lcNumber": "LC1" })], &mut pool)
            .expect("commit");
        assert_eq!(summary.pool, None);
        assert_eq!(pool.customer_count() + pool.account_count(), 0);
    }
}
