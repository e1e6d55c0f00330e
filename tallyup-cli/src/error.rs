use crate::ledger::LedgerError;
use std::path::PathBuf;
use tallyup_domain::{BalanceError, SettlementError};
use tallyup_parser::ParseError;
use tallyup_presentation::{format_balance_error, format_parse_error, format_settlement_error};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", format_parse_error(.0))]
    Parse(#[from] ParseError),
    #[error("{}", format_balance_error(.0))]
    Balance(#[from] BalanceError),
    #[error("{}", format_settlement_error(.0))]
    Settlement(#[from] SettlementError),
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error("Cannot read {}: {source}", path.display())]
    ReadLedger {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid ledger {}: {source}", path.display())]
    InvalidLedger {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid {var} value '{value}': {reason}")]
    Config {
        var: &'static str,
        value: String,
        reason: String,
    },
}
