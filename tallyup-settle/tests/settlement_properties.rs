use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashMap;
use tallyup_settle::{
    CENT, ExactMatchSettlement, GreedySettlement, PersonBalance, SettlementError,
    SettlementStrategy, Transaction, settle,
};

const NAMES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn balanced_people(people_count: usize, cents: &[i64]) -> Vec<PersonBalance<&'static str>> {
    let mut people = Vec::with_capacity(people_count);
    let mut sum = 0i64;
    for (idx, name) in NAMES.iter().take(people_count - 1).enumerate() {
        let balance = *cents.get(idx).unwrap_or(&0);
        sum += balance;
        people.push(PersonBalance::new(*name, Decimal::new(balance, 2)));
    }
    people.push(PersonBalance::new(
        NAMES[people_count - 1],
        Decimal::new(-sum, 2),
    ));
    people
}

fn residuals(
    people: &[PersonBalance<&'static str>],
    transactions: &[Transaction<&'static str>],
) -> HashMap<&'static str, Decimal> {
    let mut balances: HashMap<&str, Decimal> = people
        .iter()
        .map(|person| (person.id, person.balance))
        .collect();
    for transaction in transactions {
        *balances.entry(transaction.ower).or_default() += transaction.amount;
        *balances.entry(transaction.receiver).or_default() -= transaction.amount;
    }
    balances
}

proptest! {
    #[test]
    fn greedy_transfers_clear_every_balance(
        people_count in 2usize..=6,
        cents in prop::collection::vec(-50_000i64..=50_000, 1..=5),
    ) {
        let people = balanced_people(people_count, &cents);
        let transactions = settle(people.iter().map(|person| (person.id, person.balance)))
            .expect("balanced input");

        for transaction in &transactions {
            prop_assert!(transaction.amount >= CENT);
            prop_assert_ne!(transaction.ower, transaction.receiver);
        }
        for (name, residual) in residuals(&people, &transactions) {
            prop_assert!(residual.abs() < CENT, "{name} left with {residual}");
        }
        prop_assert!(transactions.len() < people_count);
    }

    #[test]
    fn exact_match_transfers_clear_every_balance(
        people_count in 2usize..=6,
        cents in prop::collection::vec(-50_000i64..=50_000, 1..=5),
    ) {
        let people = balanced_people(people_count, &cents);
        let transactions = ExactMatchSettlement.settle(&people).expect("balanced input");

        for transaction in &transactions {
            prop_assert!(transaction.amount >= CENT);
        }
        for (name, residual) in residuals(&people, &transactions) {
            prop_assert!(residual.abs() < CENT, "{name} left with {residual}");
        }
    }

    #[test]
    fn settling_is_deterministic(
        people_count in 2usize..=6,
        cents in prop::collection::vec(-50_000i64..=50_000, 1..=5),
    ) {
        let people = balanced_people(people_count, &cents);
        let first = GreedySettlement.settle(&people);
        let second = GreedySettlement.settle(&people);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn imbalance_of_a_cent_or_more_is_rejected(
        people_count in 2usize..=6,
        cents in prop::collection::vec(-50_000i64..=50_000, 1..=5),
        skew in 1i64..=10_000,
    ) {
        let mut people = balanced_people(people_count, &cents);
        people[0].balance += Decimal::new(skew, 2);

        let result = GreedySettlement.settle(&people);
        let is_unbalanced = matches!(result, Err(SettlementError::Unbalanced { .. }));
        prop_assert!(is_unbalanced);
    }
}
