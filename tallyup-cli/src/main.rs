#![warn(clippy::uninlined_format_args)]

mod commands;
mod config;
mod error;
mod ledger;

use clap::{Parser, Subcommand};
use config::{AppConfig, Strategy, init_logging};
use error::CliError;
use std::{path::PathBuf, process::ExitCode};

/// Shared-expense balances and debt settlement
#[derive(Parser)]
#[command(name = "tallyup", version, long_about = None)]
struct Cli {
    /// Settlement strategy (overrides TALLYUP_STRATEGY)
    #[arg(short, long, value_enum)]
    strategy: Option<Strategy>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Settle inline balances, e.g. "alice +200, marc -100, henri -100"
    Settle { balances: String },
    /// Report balances and transfers for a TOML ledger
    Ledger { path: PathBuf },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<String, CliError> {
    let config = AppConfig::from_env()?.with_strategy(cli.strategy);
    init_logging(&config, cli.verbose);
    tracing::debug!(strategy = ?config.strategy, "Configuration loaded");

    match cli.command {
        Command::Settle { balances } => commands::settle_inline(&balances, config.strategy),
        Command::Ledger { path } => commands::settle_ledger(&path, config.strategy),
    }
}
