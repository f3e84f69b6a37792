use clap::Args;

use amlsynth_rules::{RuleCatalog, RuleCategory};

use crate::CliError;

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// transaction, sanction or trade.
    #[arg(long, value_parser = parse_category)]
    pub category: Option<RuleCategory>,
    /// Print the grouped catalog as JSON.
    #[arg(long)]
    pub json: bool,
}

fn parse_category(value: &str) -> Result<RuleCategory, String> {
    RuleCategory::parse(value).ok_or_else(|| format!("unknown rule category: {value}"))
}

pub fn run(args: RulesArgs) -> Result<(), CliError> {
    let mut view = RuleCatalog::builtin().grouped();
    if let Some(category) = args.category {
        view.categories.retain(|group| group.id == category);
    }

    if args.json {
        let encoded = match args.category {
            Some(_) => serde_json::to_string_pretty(&view.categories)?,
            None => serde_json::to_string_pretty(&view)?,
        };
        println!("{encoded}");
        return Ok(());
    }

    for group in &view.categories {
        println!("{} ({})", group.name, group.description);
        for rule in &group.rules {
            println!(
                "  {:<32} {:<9} {:>3}  {}",
                rule.code, rule.severity, rule.risk_score, rule.name
            );
        }
        println!();
    }
    println!("{} rules", view.total_rules);
    Ok(())
}
