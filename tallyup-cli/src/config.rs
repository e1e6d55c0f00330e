use crate::error::CliError;
use clap::ValueEnum;
use std::env;
use tallyup_domain::{ExactMatchSettlement, GreedySettlement, MemberId, SettlementStrategy};
use tracing_subscriber::EnvFilter;

pub const STRATEGY_VAR: &str = "TALLYUP_STRATEGY";
const LOG_VAR: &str = "RUST_LOG";
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Pair the smallest debts and credits first
    #[default]
    Greedy,
    /// Pay each credit from an exact subset of debts when one exists
    ExactMatch,
}

impl Strategy {
    pub fn solver(self) -> &'static dyn SettlementStrategy<MemberId> {
        match self {
            Strategy::Greedy => &GreedySettlement,
            Strategy::ExactMatch => &ExactMatchSettlement,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub strategy: Strategy,
    pub log_filter: Option<String>,
}

impl AppConfig {
    /// Reads the process environment after loading `.env`, if there is one.
    pub fn from_env() -> Result<Self, CliError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CliError> {
        let strategy = match lookup(STRATEGY_VAR) {
            Some(value) if !value.trim().is_empty() => Strategy::from_str(value.trim(), true)
                .map_err(|reason| CliError::Config {
                    var: STRATEGY_VAR,
                    value,
                    reason,
                })?,
            _ => Strategy::default(),
        };

        Ok(Self {
            strategy,
            log_filter: lookup(LOG_VAR),
        })
    }

    /// Command-line flags win over the environment.
    pub fn with_strategy(mut self, strategy: Option<Strategy>) -> Self {
        if let Some(strategy) = strategy {
            self.strategy = strategy;
        }
        self
    }
}

/// Installs the stderr subscriber. `verbose` forces debug output.
pub fn init_logging(config: &AppConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        config
            .log_filter
            .as_deref()
            .and_then(|filter| EnvFilter::try_new(filter).ok())
            .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
