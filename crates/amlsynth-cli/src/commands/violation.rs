use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use amlsynth_rules::{MAX_BATCHES, RuleCatalog, ViolationComposer};

use super::{Session, emit};
use crate::CliError;
use crate::registry::write_records;

#[derive(Args, Debug)]
pub struct ViolationArgs {
    /// Rule code, e.g. STRUCTURING or TBML-048.
    pub rule: String,
    /// Independent batches to merge (1-100).
    #[arg(long, short = 'q', default_value_t = 1)]
    pub quantity: usize,
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the scenario here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(session: &Session, args: ViolationArgs) -> Result<(), CliError> {
    let rule = RuleCatalog::builtin().lookup(&args.rule)?;
    let mut pool = session.load_pool()?;
    let seed = session.seed(args.seed);
    let quantity = args.quantity.clamp(1, MAX_BATCHES);

    let mut ctx = session.run_context("violation", quantity, seed);
    ctx.rule = Some(rule.code.to_string());
    ctx.data_type = Some(rule.data_type.to_string());

    session.within_run(ctx, &mut pool, |pool, paths| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let scenario = ViolationComposer::new(pool)
            .with_account_fallback(session.settings.account_fallback)
            .compose_batch(rule.code, quantity, &mut rng)?;
        write_records(paths, &scenario.records)?;
        emit(args.out.as_deref(), &scenario)?;
        Ok(scenario.record_count)
    })
}
