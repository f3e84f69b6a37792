pub mod generate;
pub mod pool;
pub mod rules;
pub mod schema;
pub mod violation;

use std::path::Path;

use chrono::Utc;
use serde::Serialize;
use tracing::{error, info};
use uuid::Uuid;

use amlsynth_core::SchemaSet;
use amlsynth_generate::atomic::write_json_atomic;
use amlsynth_generate::{GenerationEngine, IdentityPool, JsonFilePoolStore};

use crate::CliError;
use crate::registry::{PoolSizes, RunContext, RunPaths, finish_run, init_logging, start_run};
use crate::settings::Settings;

/// Settings resolved for one invocation.
#[derive(Debug)]
pub struct Session {
    pub settings: Settings,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn load_pool(&self) -> Result<IdentityPool, CliError> {
        let store = JsonFilePoolStore::new(&self.settings.pool_dir);
        Ok(IdentityPool::load(store)?)
    }

    pub fn schema_set(&self) -> Result<SchemaSet, CliError> {
        let set = match &self.settings.schema_path {
            Some(path) => SchemaSet::from_path(path)?,
            None => SchemaSet::default_set()?,
        };
        Ok(set)
    }

    pub fn engine(&self) -> Result<GenerationEngine, CliError> {
        let engine = GenerationEngine::new(self.schema_set()?, self.settings.generation_options())?;
        Ok(engine)
    }

    /// Flag, then settings, then fresh entropy.
    pub fn seed(&self, flag: Option<u64>) -> u64 {
        flag.or(self.settings.seed).unwrap_or_else(rand::random)
    }

    pub fn run_context(&self, command: &'static str, count: usize, seed: u64) -> RunContext {
        RunContext {
            run_id: Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            command,
            data_type: None,
            rule: None,
            count,
            seed,
            runs_dir: self.settings.runs_dir.clone(),
        }
    }

    /// Run `body` inside a fresh run directory. The manifest records the
    /// outcome either way; the body's error is returned after it is written.
    pub fn within_run<F>(
        &self,
        ctx: RunContext,
        pool: &mut IdentityPool,
        body: F,
    ) -> Result<(), CliError>
    where
        F: FnOnce(&mut IdentityPool, &RunPaths) -> Result<usize, CliError>,
    {
        let (paths, mut manifest) = start_run(&ctx, pool_sizes(pool))?;
        init_logging(&self.settings.log_level, Some(&paths.logs_path))?;
        info!(
            event = "run_started",
            run_id = %ctx.run_id,
            command = ctx.command,
            seed = ctx.seed
        );

        let outcome = body(pool, &paths);
        let recorded = match &outcome {
            Ok(count) => Ok(*count),
            Err(err) => Err(err.to_string()),
        };
        finish_run(&paths, &mut manifest, recorded, pool_sizes(pool))?;

        match &outcome {
            Ok(count) => info!(
                event = "run_finished",
                status = "ok",
                records = *count,
                path = %paths.root.display()
            ),
            Err(err) => error!(event = "run_finished", status = "error", error = %err),
        }
        outcome.map(|_| ())
    }
}

pub fn pool_sizes(pool: &IdentityPool) -> PoolSizes {
    PoolSizes {
        customers: pool.customer_count(),
        accounts: pool.account_count(),
    }
}

/// Write `value` to `out`, or pretty-print it on stdout.
pub fn emit<T: Serialize + ?Sized>(out: Option<&Path>, value: &T) -> Result<(), CliError> {
    match out {
        Some(path) => {
            write_json_atomic(path, value)?;
            info!(event = "output_written", path = %path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}
