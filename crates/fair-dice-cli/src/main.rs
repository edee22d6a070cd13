//! Fair Dice
//!
//! Interactive non-transitive dice game against the computer. Every random
//! decision is negotiated with the user through an HMAC commit-reveal round,
//! so neither side can bias it.

mod console;
mod render;

use clap::Parser;
use console::ConsolePlayer;
use fair_dice_core::{DiceSet, FrgError, Game, GameConfig, Result};
use std::process::ExitCode;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

const USAGE_EXAMPLE: &str = "Example: fair-dice 2,2,4,4,9,9 1,1,6,6,8,8 3,3,5,5,7,7";

#[derive(Parser)]
#[command(name = "fair-dice", version, about = "Provably fair non-transitive dice game")]
struct Cli {
    /// Dice as comma-separated face lists, at least three
    #[arg(value_name = "DIE", allow_hyphen_values = true)]
    dice: Vec<String>,

    /// Decimal places in the probability table (overrides FAIR_DICE_PRECISION)
    #[arg(long)]
    precision: Option<usize>,

    /// Also print every revealed round as a JSON audit record
    #[arg(long)]
    audit_json: bool,
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = GameConfig::from_env();
    if let Some(precision) = cli.precision {
        config.probability_precision = precision;
    }
    config.validate()?;

    let dice = DiceSet::parse(&cli.dice)?;
    let game = Game::new(dice);
    info!(dice = game.dice().len(), ?config, "Session configured");
    if !game.matrix().is_non_transitive() {
        warn!("Dice set is not non-transitive; the first picker has a safe choice");
    }

    let mut player = ConsolePlayer::stdin(game.matrix().clone(), config, cli.audit_json);
    let report = game.play(&mut player).await?;
    info!(outcome = %report.outcome, "Session complete");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(FrgError::CounterpartAbandoned) => {
            println!("Goodbye!");
            ExitCode::SUCCESS
        }
        Err(e @ FrgError::InvalidConfiguration(_)) => {
            eprintln!("{e}");
            eprintln!("{USAGE_EXAMPLE}");
            ExitCode::from(2)
        }
        Err(e) => {
            error!(error = %e, "Session aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_negative_faces() {
        let cli = Cli::parse_from(["fair-dice", "-1,0,1", "2,2,2", "3,3,3"]);
        assert_eq!(cli.dice, vec!["-1,0,1", "2,2,2", "3,3,3"]);
        assert!(!cli.audit_json);
        assert!(DiceSet::parse(&cli.dice).is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "fair-dice",
            "--precision",
            "2",
            "--audit-json",
            "1,2",
            "3,4",
            "5,6",
        ]);
        assert_eq!(cli.precision, Some(2));
        assert!(cli.audit_json);
        assert_eq!(cli.dice.len(), 3);
    }

    #[tokio::test]
    async fn test_too_few_dice_is_configuration_error() {
        let cli = Cli::parse_from(["fair-dice", "1,2,3", "4,5,6"]);
        assert!(matches!(
            run(cli).await,
            Err(FrgError::InvalidConfiguration(_))
        ));
    }

    #[tokio::test]
    async fn test_bad_precision_is_configuration_error() {
        let cli = Cli::parse_from(["fair-dice", "--precision", "0", "1", "2", "3"]);
        assert!(matches!(
            run(cli).await,
            Err(FrgError::InvalidConfiguration(_))
        ));
    }
}
