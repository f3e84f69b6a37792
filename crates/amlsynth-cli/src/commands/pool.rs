use clap::{Subcommand, ValueEnum};
use tracing::info;

use super::{Session, pool_sizes};
use crate::CliError;

#[derive(Subcommand, Debug)]
pub enum PoolCommand {
    /// Show pool sizes.
    Stats,
    /// Empty one or both pools.
    Clear {
        #[arg(value_enum, default_value_t = PoolTarget::All)]
        target: PoolTarget,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PoolTarget {
    Customers,
    Accounts,
    All,
}

pub fn run(session: &Session, command: PoolCommand) -> Result<(), CliError> {
    let mut pool = session.load_pool()?;
    match command {
        PoolCommand::Stats => {
            let sizes = pool_sizes(&pool);
            println!("pool directory: {}", session.settings.pool_dir.display());
            println!("customers: {}", sizes.customers);
            println!("accounts:  {}", sizes.accounts);
        }
        PoolCommand::Clear { target } => {
            if matches!(target, PoolTarget::Customers | PoolTarget::All) {
                pool.clear_customers()?;
                info!(event = "pool_cleared", pool = "customers");
            }
            if matches!(target, PoolTarget::Accounts | PoolTarget::All) {
                pool.clear_accounts()?;
                info!(event = "pool_cleared", pool = "accounts");
            }
        }
    }
    Ok(())
}
