use crate::{
    SettlementError, SettlementStrategy,
    model::{PersonBalance, Transaction},
    rounding::{CENT, round_half_down},
};
use fxhash::FxBuildHasher;
use indexmap::IndexMap;
use rust_decimal::Decimal;
use std::hash::Hash;

/// Greedy debtor/creditor matching.
///
/// Each round sorts debiters ascending and crediters descending, then pairs
/// the last entry of each list: the debiter closest to zero with the smallest
/// crediter. The pair exchanges `min(|debit|, |credit|)` and any remainder
/// goes back into its list.
///
/// This is not a minimum-transaction-count solver. The pairing order is part
/// of the output contract and must not be "improved".
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedySettlement;

impl<Id> SettlementStrategy<Id> for GreedySettlement
where
    Id: Clone + Eq + Hash,
{
    fn settle(
        &self,
        balances: &[PersonBalance<Id>],
    ) -> Result<Vec<Transaction<Id>>, SettlementError> {
        crate::settle(
            balances
                .iter()
                .map(|person| (person.id.clone(), person.balance)),
        )
    }
}

/// Sums balances per identifier and splits them into `(debiters, crediters)`.
///
/// Identifiers keep their first-seen order. Zero balances land with the
/// debiters; they are consumed by the reduction without producing a transfer.
pub fn order_balance<Id, I>(balances: I) -> (Vec<PersonBalance<Id>>, Vec<PersonBalance<Id>>)
where
    Id: Eq + Hash,
    I: IntoIterator<Item = (Id, Decimal)>,
{
    let mut totals: IndexMap<Id, Decimal, FxBuildHasher> = IndexMap::default();
    for (id, balance) in balances {
        *totals.entry(id).or_insert(Decimal::ZERO) += balance;
    }

    let mut debiters = Vec::new();
    let mut crediters = Vec::new();
    for (id, balance) in totals {
        if balance > Decimal::ZERO {
            crediters.push(PersonBalance::new(id, balance));
        } else {
            debiters.push(PersonBalance::new(id, balance));
        }
    }

    (debiters, crediters)
}

/// Rejects balances whose debits and credits differ by a cent or more.
pub fn check_balance<Id>(
    debiters: &[PersonBalance<Id>],
    crediters: &[PersonBalance<Id>],
) -> Result<(), SettlementError> {
    let debits: Decimal = debiters.iter().map(|person| person.balance.abs()).sum();
    let credits: Decimal = crediters.iter().map(|person| person.balance.abs()).sum();

    if (credits - debits).abs() >= CENT {
        tracing::warn!(
            reject_reason = "unbalanced",
            debiter_count = debiters.len(),
            crediter_count = crediters.len(),
            debits = %debits,
            credits = %credits,
            "Settlement rejected due to unbalanced input"
        );
        return Err(SettlementError::Unbalanced { debits, credits });
    }

    Ok(())
}

/// Reduces validated balances into transfers.
///
/// Takes its lists by value; callers keep their own copies untouched.
pub fn reduce_balance<Id: Clone>(
    mut debiters: Vec<PersonBalance<Id>>,
    mut crediters: Vec<PersonBalance<Id>>,
) -> Vec<Transaction<Id>> {
    let mut transactions = Vec::with_capacity(debiters.len().max(crediters.len()));

    loop {
        // Stable sorts: equal balances keep their insertion order.
        debiters.sort_by(|a, b| a.balance.cmp(&b.balance));
        crediters.sort_by(|a, b| b.balance.cmp(&a.balance));

        let (Some(debiter), Some(crediter)) = (debiters.pop(), crediters.pop()) else {
            break;
        };

        let amount = debiter.balance.abs().min(crediter.balance.abs());
        let due = round_half_down(amount);
        if due >= CENT {
            transactions.push(Transaction::new(
                debiter.id.clone(),
                due,
                crediter.id.clone(),
            ));
        }

        let debiter_rest = debiter.balance + amount;
        if debiter_rest < Decimal::ZERO {
            debiters.push(PersonBalance::new(debiter.id, debiter_rest));
        }

        let crediter_rest = crediter.balance - amount;
        if crediter_rest > Decimal::ZERO {
            crediters.push(PersonBalance::new(crediter.id, crediter_rest));
        }
    }

    transactions
}
