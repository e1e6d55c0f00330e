use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use tallyup_domain::{
    Bill, BillId, BillType, Member, MemberId, Money, SettlementService, Weight, compute_balances,
};

fn members(member_count: usize, weights: &[u8]) -> Vec<Member> {
    (0..member_count)
        .map(|idx| {
            let weight = Decimal::from(*weights.get(idx).unwrap_or(&1));
            Member::new(MemberId(idx as u64 + 1), format!("m{idx}"))
                .with_weight(Weight::new(weight).expect("non-negative weight"))
        })
        .collect()
}

fn bills(
    member_count: usize,
    amounts: &[i64],
    payer_indexes: &[usize],
    ower_masks: &[usize],
) -> Vec<Bill> {
    amounts
        .iter()
        .enumerate()
        .map(|(idx, &amount)| {
            let payer = payer_indexes.get(idx).copied().unwrap_or(0) % member_count;
            let mask = ower_masks.get(idx).copied().unwrap_or(1);
            let mut owers: Vec<MemberId> = (0..member_count)
                .filter(|member| mask & (1 << member) != 0)
                .map(|member| MemberId(member as u64 + 1))
                .collect();
            if owers.is_empty() {
                owers.push(MemberId(payer as u64 + 1));
            }

            Bill {
                id: BillId(idx as u64 + 1),
                date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
                description: format!("bill {idx}"),
                payer: MemberId(payer as u64 + 1),
                amount: Money::new(amount, 2),
                owers,
                bill_type: BillType::Expense,
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn balances_sum_to_zero(
        member_count in 1usize..=6,
        weights in prop::collection::vec(1u8..=3, 0..=6),
        amounts in prop::collection::vec(-10_000i64..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        ower_masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let members = members(member_count, &weights);
        let bills = bills(member_count, &amounts, &payer_indexes, &ower_masks);

        let balances = compute_balances(&members, &bills).expect("valid bills");
        let total: Money = balances.values().sum();

        prop_assert_eq!(balances.len(), member_count);
        prop_assert!(
            total.abs().as_decimal() < Decimal::new(1, 9),
            "total drifted to {}",
            total.as_decimal()
        );
    }

    #[test]
    fn recomputing_gives_the_same_balances(
        member_count in 1usize..=6,
        weights in prop::collection::vec(1u8..=3, 0..=6),
        amounts in prop::collection::vec(0i64..=100_000, 0..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 0..=30),
        ower_masks in prop::collection::vec(0usize..=63, 0..=30),
    ) {
        let members = members(member_count, &weights);
        let bills = bills(member_count, &amounts, &payer_indexes, &ower_masks);

        let first = compute_balances(&members, &bills).expect("valid bills");
        let second = compute_balances(&members, &bills).expect("valid bills");

        prop_assert_eq!(first, second);
    }

    #[test]
    fn settlement_leaves_only_rounding_residue(
        member_count in 2usize..=6,
        weights in prop::collection::vec(1u8..=3, 0..=6),
        amounts in prop::collection::vec(0i64..=100_000, 1..=30),
        payer_indexes in prop::collection::vec(0usize..=5, 1..=30),
        ower_masks in prop::collection::vec(0usize..=63, 1..=30),
    ) {
        let members = members(member_count, &weights);
        let bills = bills(member_count, &amounts, &payer_indexes, &ower_masks);
        let balances = compute_balances(&members, &bills).expect("valid bills");

        let settlement = SettlementService::greedy()
            .settle(&balances)
            .expect("computed balances are balanced");

        let bound = Decimal::new(5, 3) * Decimal::from(member_count as u64);
        for (member, residual) in &settlement.residuals {
            prop_assert!(
                residual.abs().as_decimal() <= bound,
                "{member} left with {}",
                residual.as_decimal()
            );
        }
        for transaction in &settlement.transactions {
            prop_assert!(transaction.amount.is_positive());
            prop_assert_ne!(transaction.ower, transaction.receiver);
        }
    }
}
