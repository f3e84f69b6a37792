use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use amlsynth_core::DataType;

use super::{Session, emit};
use crate::CliError;
use crate::registry::write_records;

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// customer, account, transaction, sanction, trade or credit.
    pub data_type: DataType,
    #[arg(long, short = 'n', default_value_t = 1)]
    pub count: usize,
    /// Deterministic seed; overrides the settings seed.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Add generated customers or accounts to their pool (default for those types).
    #[arg(long, overrides_with = "no_commit")]
    pub commit: bool,
    #[arg(long, overrides_with = "commit")]
    pub no_commit: bool,
    /// Write records here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn commit_requested(&self) -> bool {
        if self.no_commit {
            return false;
        }
        self.commit || matches!(self.data_type, DataType::Customer | DataType::Account)
    }
}

pub fn run(session: &Session, args: GenerateArgs) -> Result<(), CliError> {
    let engine = session.engine()?;
    let mut pool = session.load_pool()?;
    let seed = session.seed(args.seed);
    let commit = args.commit_requested();

    let mut ctx = session.run_context("generate", args.count, seed);
    ctx.data_type = Some(args.data_type.to_string());

    session.within_run(ctx, &mut pool, |pool, paths| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let records = engine.generate(args.data_type, args.count, pool, &mut rng)?;
        write_records(paths, &records)?;

        if commit {
            let summary = engine.commit(args.data_type, &records, pool)?;
            if let Some(name) = summary.pool {
                info!(
                    event = "pool_committed",
                    pool = name,
                    added = summary.added,
                    size = summary.size
                );
            }
        }

        emit(args.out.as_deref(), &records)?;
        Ok(records.len())
    })
}
