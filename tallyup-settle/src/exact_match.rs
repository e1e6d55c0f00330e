use crate::{
    SettlementError, SettlementStrategy,
    greedy::{check_balance, order_balance},
    model::{PersonBalance, Transaction},
    rounding::{CENT, round_half_down},
};
use rust_decimal::Decimal;
use std::{cmp::Ordering, collections::VecDeque, hash::Hash};

/// Settles each creditor from an exact subset of debtors when one exists.
///
/// Creditors are visited in input order. For each one, the first subset of
/// the remaining debtors (by rounded cents) that sums to the credit pays it
/// off, later debtors of the subset paying first. Whatever is left is paired
/// front to front.
///
/// The subset search is exponential in the number of debtors; it is meant for
/// the small groups this tool deals with.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatchSettlement;

impl<Id> SettlementStrategy<Id> for ExactMatchSettlement
where
    Id: Clone + Eq + Hash,
{
    fn settle(
        &self,
        balances: &[PersonBalance<Id>],
    ) -> Result<Vec<Transaction<Id>>, SettlementError> {
        let (debiters, crediters) = order_balance(
            balances
                .iter()
                .map(|person| (person.id.clone(), person.balance)),
        );
        check_balance(&debiters, &crediters)?;

        let transactions = match_exact(debiters, crediters);
        tracing::debug!(
            transaction_count = transactions.len(),
            "Exact-match settlement finished"
        );
        Ok(transactions)
    }
}

fn match_exact<Id: Clone>(
    debiters: Vec<PersonBalance<Id>>,
    crediters: Vec<PersonBalance<Id>>,
) -> Vec<Transaction<Id>> {
    // Debts are tracked as positive magnitudes from here on.
    let mut debts: Vec<PersonBalance<Id>> = debiters
        .into_iter()
        .filter(|person| round_half_down(person.balance) < Decimal::ZERO)
        .map(|person| PersonBalance::new(person.id, -person.balance))
        .collect();
    let credits = crediters
        .into_iter()
        .filter(|person| round_half_down(person.balance) > Decimal::ZERO);

    let mut transactions = Vec::new();
    let mut unmatched = VecDeque::new();

    for credit in credits {
        let Some(mut indices) = exact_subset(round_half_down(credit.balance), &debts, 0) else {
            unmatched.push_back(credit);
            continue;
        };
        for &idx in &indices {
            push_transfer(
                &mut transactions,
                debts[idx].id.clone(),
                round_half_down(debts[idx].balance),
                credit.id.clone(),
            );
        }
        indices.sort_unstable_by(|a, b| b.cmp(a));
        for idx in indices {
            debts.remove(idx);
        }
    }

    let mut credits = unmatched;
    let mut debts = VecDeque::from(debts);
    while let (Some(credit), Some(debt)) = (credits.front_mut(), debts.front_mut()) {
        let amount = credit.balance.min(debt.balance);
        credit.balance -= amount;
        debt.balance -= amount;
        let (ower, receiver) = (debt.id.clone(), credit.id.clone());
        push_transfer(&mut transactions, ower, amount, receiver);

        if credit.balance.is_zero() {
            credits.pop_front();
        }
        if debt.balance.is_zero() {
            debts.pop_front();
        }
    }

    transactions
}

/// First subset of `debts` whose rounded amounts sum to `target`.
///
/// The search walks `debts` in list order, but the indices come back deepest
/// first: the last debt of the subset leads.
fn exact_subset<Id>(
    target: Decimal,
    debts: &[PersonBalance<Id>],
    offset: usize,
) -> Option<Vec<usize>> {
    let (first, rest) = debts.split_first()?;
    let amount = round_half_down(first.balance);

    match amount.cmp(&target) {
        Ordering::Greater => exact_subset(target, rest, offset + 1),
        Ordering::Equal => Some(vec![offset]),
        Ordering::Less => exact_subset(target - amount, rest, offset + 1)
            .map(|mut found| {
                found.push(offset);
                found
            })
            .or_else(|| exact_subset(target, rest, offset + 1)),
    }
}

fn push_transfer<Id>(
    transactions: &mut Vec<Transaction<Id>>,
    ower: Id,
    amount: Decimal,
    receiver: Id,
) {
    let due = round_half_down(amount);
    if due >= CENT {
        transactions.push(Transaction::new(ower, due, receiver));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GreedySettlement;
    use rstest::rstest;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("valid decimal")
    }

    fn people(values: &[(&'static str, &str)]) -> Vec<PersonBalance<&'static str>> {
        values
            .iter()
            .map(|(id, value)| PersonBalance::new(*id, dec(value)))
            .collect()
    }

    fn transfers(values: &[(&'static str, &str, &'static str)]) -> Vec<Transaction<&'static str>> {
        values
            .iter()
            .map(|(ower, amount, receiver)| Transaction::new(*ower, dec(amount), *receiver))
            .collect()
    }

    #[test]
    fn exact_subsets_beat_greedy_pairing() {
        let balances = people(&[
            ("a", "5"),
            ("b", "5"),
            ("c", "-2"),
            ("d", "-3"),
            ("e", "-1"),
            ("f", "-4"),
        ]);

        let exact = ExactMatchSettlement.settle(&balances).expect("balanced");
        let greedy = GreedySettlement.settle(&balances).expect("balanced");

        assert_eq!(
            exact,
            transfers(&[
                ("d", "3", "a"),
                ("c", "2", "a"),
                ("f", "4", "b"),
                ("e", "1", "b"),
            ])
        );
        assert_eq!(greedy.len(), 5);
    }

    #[test]
    fn matched_debtors_pay_last_first() {
        let balances = people(&[("a", "6"), ("b", "-1"), ("c", "-2"), ("d", "-3")]);

        let result = ExactMatchSettlement.settle(&balances).expect("balanced");

        assert_eq!(
            result,
            transfers(&[("d", "3", "a"), ("c", "2", "a"), ("b", "1", "a")])
        );
    }

    #[test]
    fn owned_identifiers_are_cloned_into_transfers() {
        let balances = vec![
            PersonBalance::new("x".to_string(), dec("4")),
            PersonBalance::new("y".to_string(), dec("-4")),
        ];

        let result = ExactMatchSettlement.settle(&balances).expect("balanced");

        assert_eq!(
            result,
            vec![Transaction::new("y".to_string(), dec("4"), "x".to_string())]
        );
        assert_eq!(balances[0].id, "x");
    }

    #[test]
    fn falls_back_to_front_pairing() {
        let balances = people(&[("a", "6"), ("b", "4"), ("c", "-5"), ("d", "-3"), ("e", "-2")]);

        let result = ExactMatchSettlement.settle(&balances).expect("balanced");

        assert_eq!(
            result,
            transfers(&[
                ("c", "5", "a"),
                ("d", "1", "a"),
                ("d", "2", "b"),
                ("e", "2", "b"),
            ])
        );
    }

    #[rstest]
    #[case::unbalanced(&[("a", "-10"), ("b", "5")])]
    #[case::lonely_creditor(&[("a", "0.5")])]
    fn rejects_unbalanced(#[case] input: &[(&'static str, &str)]) {
        assert!(matches!(
            ExactMatchSettlement.settle(&people(input)),
            Err(SettlementError::Unbalanced { .. })
        ));
    }

    #[test]
    fn sub_cent_balances_are_ignored() {
        let balances = people(&[("a", "0.004"), ("b", "-0.004")]);
        assert_eq!(ExactMatchSettlement.settle(&balances), Ok(Vec::new()));
    }

    #[test]
    fn single_debtor_single_creditor() {
        let balances = people(&[("a", "-8.12"), ("b", "0"), ("c", "8.12")]);
        assert_eq!(
            ExactMatchSettlement.settle(&balances),
            Ok(transfers(&[("a", "8.12", "c")]))
        );
    }
}
