use crate::{
    model::{Bill, BillType, Member, MemberId, Money, Weight},
    services::{BalanceCalculator, BalanceError},
};
use chrono::Datelike;
use std::collections::BTreeMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemberStats {
    pub member: MemberId,
    pub paid: Money,
    pub spent: Money,
    pub balance: Money,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub year: i32,
    pub month: u32,
    pub total: Money,
}

pub struct StatisticsService;

impl StatisticsService {
    /// What each active member paid, what they consumed, and the difference.
    ///
    /// Members keep the order they were given in.
    pub fn member_stats(
        &self,
        members: &[Member],
        bills: &[Bill],
    ) -> Result<Vec<MemberStats>, BalanceError> {
        let accumulator = BalanceCalculator.accumulate(members, bills)?;
        let balances = accumulator.balances();

        Ok(members
            .iter()
            .filter(|member| member.active)
            .map(|member| MemberStats {
                member: member.id,
                paid: lookup(accumulator.paid(), member.id),
                spent: lookup(accumulator.spent(), member.id),
                balance: lookup(&balances, member.id),
            })
            .collect())
    }

    /// Expense totals per calendar month, oldest first. Reimbursements are
    /// not expenses and are left out.
    pub fn monthly_stats(&self, bills: &[Bill]) -> Vec<MonthlyTotal> {
        let mut months: BTreeMap<(i32, u32), Money> = BTreeMap::new();
        for bill in bills
            .iter()
            .filter(|bill| bill.bill_type == BillType::Expense)
        {
            *months
                .entry((bill.date.year(), bill.date.month()))
                .or_insert(Money::ZERO) += bill.amount;
        }

        months
            .into_iter()
            .map(|((year, month), total)| MonthlyTotal { year, month, total })
            .collect()
    }

    /// Whether any member carries a weight other than 1.
    pub fn uses_weights(&self, members: &[Member]) -> bool {
        members.iter().any(|member| member.weight != Weight::ONE)
    }
}

fn lookup(balances: &BTreeMap<MemberId, Money>, member: MemberId) -> Money {
    balances.get(&member).copied().unwrap_or(Money::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BillId;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn members() -> Vec<Member> {
        vec![
            Member::new(MemberId(1), "zorglub")
                .with_weight(Weight::new(Decimal::TWO).expect("non-negative weight")),
            Member::new(MemberId(2), "fred"),
            Member::new(MemberId(3), "tata"),
            Member::new(MemberId(4), "pépé").deactivated(),
        ]
    }

    fn bill(
        id: u64,
        date: (i32, u32, u32),
        payer: u64,
        amount: Money,
        owers: &[u64],
        bill_type: BillType,
    ) -> Bill {
        Bill {
            id: BillId(id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).expect("valid date"),
            description: format!("bill {id}"),
            payer: MemberId(payer),
            amount,
            owers: owers.iter().copied().map(MemberId).collect(),
            bill_type,
        }
    }

    fn bills() -> Vec<Bill> {
        vec![
            bill(
                1,
                (2016, 12, 31),
                1,
                Money::from_i64(10),
                &[1, 2, 3, 4],
                BillType::Expense,
            ),
            bill(
                2,
                (2016, 12, 31),
                2,
                Money::from_i64(200),
                &[1, 3],
                BillType::Expense,
            ),
            bill(
                3,
                (2017, 1, 1),
                3,
                Money::new(1333, 2),
                &[2],
                BillType::Reimbursement,
            ),
        ]
    }

    #[test]
    fn stats_cover_active_members_only() {
        let stats = StatisticsService
            .member_stats(&members(), &bills())
            .expect("valid bills");

        let rendered: Vec<(u64, String, String, String)> = stats
            .iter()
            .map(|entry| {
                (
                    entry.member.0,
                    entry.paid.to_string(),
                    entry.spent.to_string(),
                    entry.balance.to_string(),
                )
            })
            .collect();

        assert_eq!(
            rendered,
            vec![
                (1, "10.00".into(), "137.33".into(), "-127.33".into()),
                (2, "200.00".into(), "15.33".into(), "184.67".into()),
                (3, "13.33".into(), "68.67".into(), "-55.34".into()),
            ]
        );
    }

    #[test]
    fn paid_minus_spent_is_the_balance() {
        let stats = StatisticsService
            .member_stats(&members(), &bills())
            .expect("valid bills");

        for entry in stats {
            assert_eq!(entry.paid - entry.spent, entry.balance);
        }
    }

    #[test]
    fn reimbursements_are_not_monthly_expenses() {
        let months = StatisticsService.monthly_stats(&bills());

        assert_eq!(
            months,
            vec![MonthlyTotal {
                year: 2016,
                month: 12,
                total: Money::from_i64(210),
            }]
        );
    }

    #[test]
    fn months_are_chronological() {
        let bills = vec![
            bill(1, (2020, 3, 1), 2, Money::from_i64(5), &[2], BillType::Expense),
            bill(2, (2019, 11, 9), 2, Money::from_i64(7), &[2], BillType::Expense),
            bill(3, (2020, 3, 28), 2, Money::from_i64(1), &[2], BillType::Expense),
        ];

        let months: Vec<(i32, u32, Money)> = StatisticsService
            .monthly_stats(&bills)
            .into_iter()
            .map(|entry| (entry.year, entry.month, entry.total))
            .collect();

        assert_eq!(
            months,
            vec![
                (2019, 11, Money::from_i64(7)),
                (2020, 3, Money::from_i64(6)),
            ]
        );
    }

    #[test]
    fn detects_weighted_members() {
        assert!(StatisticsService.uses_weights(&members()));
        assert!(!StatisticsService.uses_weights(&members()[1..]));
    }
}
