mod commands;
mod registry;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use thiserror::Error;

use amlsynth_generate::GenerationError;
use amlsynth_rules::ViolationError;
use commands::Session;
use commands::generate::GenerateArgs;
use commands::pool::PoolCommand;
use commands::rules::RulesArgs;
use commands::schema::SchemaCommand;
use commands::violation::ViolationArgs;
use registry::init_logging;
use settings::{DEFAULT_SETTINGS_FILE, SettingsError, load_or_create_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),
    #[error("registry error: {0}")]
    Registry(#[from] registry::RegistryError),
    #[error(transparent)]
    Core(#[from] amlsynth_core::Error),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Violation(#[from] ViolationError),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

#[derive(Parser, Debug)]
#[command(name = "amlsynth", version, about = "Synthetic AML test data generator")]
struct Cli {
    /// Settings file; created with defaults when missing.
    #[arg(long, global = true, default_value = DEFAULT_SETTINGS_FILE)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate records of a root data type.
    Generate(GenerateArgs),
    /// Compose records that violate a monitoring rule.
    Violation(ViolationArgs),
    /// List the rule catalog.
    Rules(RulesArgs),
    /// Inspect or clear the identity pools.
    #[command(subcommand)]
    Pool(PoolCommand),
    /// Validate and inspect schema sets.
    #[command(subcommand)]
    Schema(SchemaCommand),
}

impl Command {
    /// Commands that open a run directory install their own run log.
    fn opens_run(&self) -> bool {
        matches!(self, Command::Generate(_) | Command::Violation(_))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_or_create_settings(&cli.config)?;
    if !cli.command.opens_run() {
        init_logging(&settings.log_level, None)?;
    }
    let session = Session::new(settings);

    match cli.command {
        Command::Generate(args) => commands::generate::run(&session, args),
        Command::Violation(args) => commands::violation::run(&session, args),
        Command::Rules(args) => commands::rules::run(args),
        Command::Pool(command) => commands::pool::run(&session, command),
        Command::Schema(command) => commands::schema::run(&session, command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlsynth_core::DataType;
    use amlsynth_rules::RuleCategory;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_parses_data_type_and_commit_flags() {
        let cli = Cli::try_parse_from([
            "amlsynth", "generate", "account", "--count", "5", "--no-commit", "--seed", "9",
        ])
        .expect("parse");
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.data_type, DataType::Account);
        assert_eq!(args.count, 5);
        assert_eq!(args.seed, Some(9));
        assert!(!args.commit_requested());
    }

    #[test]
    fn unknown_data_type_is_rejected() {
        assert!(Cli::try_parse_from(["amlsynth", "generate", "loan"]).is_err());
    }

    #[test]
    fn rules_category_is_case_insensitive() {
        let cli = Cli::try_parse_from(["amlsynth", "rules", "--category", "Trade"]).expect("parse");
        let Command::Rules(args) = cli.command else {
            panic!("expected rules");
        };
        assert_eq!(args.category, Some(RuleCategory::Trade));
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["amlsynth", "pool", "stats", "--config", "alt.toml"])
            .expect("parse");
        assert_eq!(cli.config, PathBuf::from("alt.toml"));
        assert!(!cli.command.opens_run());
    }
}
