#![warn(clippy::uninlined_format_args)]

//! Debt settlement over opaque identifiers.
//!
//! The solver knows nothing about members or bills: it takes signed decimal
//! balances keyed by any hashable identifier and proposes transfers that bring
//! each of them back to zero.

mod exact_match;
mod greedy;
mod model;
mod rounding;

use rust_decimal::Decimal;
use std::hash::Hash;
use thiserror::Error;

pub use exact_match::ExactMatchSettlement;
pub use greedy::{GreedySettlement, check_balance, order_balance, reduce_balance};
pub use model::{PersonBalance, Transaction};
pub use rounding::{CENT, SCALE, round_half_down};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    #[error("Unsolvable: debiters (-{debits}) and crediters (+{credits}) are unbalanced")]
    Unbalanced { debits: Decimal, credits: Decimal },
}

/// A way of turning balances into transfers.
pub trait SettlementStrategy<Id>: Send + Sync {
    fn settle(
        &self,
        balances: &[PersonBalance<Id>],
    ) -> Result<Vec<Transaction<Id>>, SettlementError>;
}

/// Settles balances with the greedy strategy.
///
/// Entries sharing an identifier are summed first. Fails with
/// [`SettlementError::Unbalanced`] when debits and credits differ by a cent
/// or more.
pub fn settle<Id, I>(balances: I) -> Result<Vec<Transaction<Id>>, SettlementError>
where
    Id: Clone + Eq + Hash,
    I: IntoIterator<Item = (Id, Decimal)>,
{
    let (debiters, crediters) = order_balance(balances);
    check_balance(&debiters, &crediters)?;

    tracing::debug!(
        debiter_count = debiters.len(),
        crediter_count = crediters.len(),
        "Greedy settlement started"
    );
    let transactions = reduce_balance(debiters, crediters);
    tracing::debug!(
        transaction_count = transactions.len(),
        "Greedy settlement finished"
    );

    Ok(transactions)
}
