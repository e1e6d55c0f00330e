use crate::model::{Bill, BillId, Member, MemberBalances, MemberId, Money};
use fxhash::{FxHashMap, FxHashSet};
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("Bill {bill} has no ower weight to split its amount across")]
    DegenerateBill { bill: BillId },
    #[error("Bill {bill} references unknown member {member}")]
    UnknownMember { bill: BillId, member: MemberId },
    #[error("Bill {bill} overflows decimal precision")]
    Overflow { bill: BillId },
}

/// Running credits and debits per member.
///
/// Every member starts at zero, so members without bills still show up.
pub struct BalanceAccumulator {
    weights: FxHashMap<MemberId, Decimal>,
    paid: MemberBalances,
    spent: MemberBalances,
}

impl BalanceAccumulator {
    pub fn new(members: &[Member]) -> Self {
        let weights = members
            .iter()
            .map(|member| (member.id, member.weight.as_decimal()))
            .collect();
        let zeroes: MemberBalances = members
            .iter()
            .map(|member| (member.id, Money::ZERO))
            .collect();

        Self {
            weights,
            paid: zeroes.clone(),
            spent: zeroes,
        }
    }

    /// Credits the payer with the full amount and debits each ower their
    /// weighted share. Leaves the totals untouched on error.
    pub fn apply(&mut self, bill: &Bill) -> Result<(), BalanceError> {
        if !self.weights.contains_key(&bill.payer) {
            return Err(BalanceError::UnknownMember {
                bill: bill.id,
                member: bill.payer,
            });
        }

        let mut seen = FxHashSet::default();
        let mut owers = Vec::with_capacity(bill.owers.len());
        for &ower in &bill.owers {
            if !seen.insert(ower) {
                continue;
            }
            let weight = self
                .weights
                .get(&ower)
                .copied()
                .ok_or(BalanceError::UnknownMember {
                    bill: bill.id,
                    member: ower,
                })?;
            owers.push((ower, weight));
        }

        let share_weight_sum: Decimal = owers.iter().map(|(_, weight)| *weight).sum();
        if share_weight_sum.is_zero() {
            tracing::warn!(
                bill = bill.id.0,
                ower_count = owers.len(),
                "Bill cannot be split: owers carry no weight"
            );
            return Err(BalanceError::DegenerateBill { bill: bill.id });
        }

        let amount = bill.amount.as_decimal();
        let shares = owers
            .iter()
            .map(|&(ower, weight)| {
                amount
                    .checked_mul(weight)
                    .and_then(|scaled| scaled.checked_div(share_weight_sum))
                    .map(|share| (ower, Money::from_decimal(share)))
                    .ok_or(BalanceError::Overflow { bill: bill.id })
            })
            .collect::<Result<Vec<_>, _>>()?;

        // New totals are computed up front so an overflow changes nothing.
        let paid = Self::total(&self.paid, bill.payer)
            .checked_add(bill.amount)
            .ok_or(BalanceError::Overflow { bill: bill.id })?;
        let spent = shares
            .into_iter()
            .map(|(ower, share)| {
                Self::total(&self.spent, ower)
                    .checked_add(share)
                    .map(|total| (ower, total))
                    .ok_or(BalanceError::Overflow { bill: bill.id })
            })
            .collect::<Result<Vec<_>, _>>()?;

        self.paid.insert(bill.payer, paid);
        self.spent.extend(spent);

        Ok(())
    }

    fn total(totals: &MemberBalances, member: MemberId) -> Money {
        totals.get(&member).copied().unwrap_or(Money::ZERO)
    }

    /// Sum of bill amounts each member paid for.
    pub fn paid(&self) -> &MemberBalances {
        &self.paid
    }

    /// Sum of the shares each member owes.
    pub fn spent(&self) -> &MemberBalances {
        &self.spent
    }

    pub fn balances(&self) -> MemberBalances {
        self.paid
            .iter()
            .map(|(member, paid)| {
                let spent = self.spent.get(member).copied().unwrap_or(Money::ZERO);
                (*member, *paid - spent)
            })
            .collect()
    }
}

/// Turns a project's members and bills into net balances.
pub struct BalanceCalculator;

impl BalanceCalculator {
    /// Computes `paid - spent` for every member.
    ///
    /// Bill order does not matter. Inactive members still count for the bills
    /// they appear on.
    pub fn calculate(
        &self,
        members: &[Member],
        bills: &[Bill],
    ) -> Result<MemberBalances, BalanceError> {
        Ok(self.accumulate(members, bills)?.balances())
    }

    pub fn accumulate(
        &self,
        members: &[Member],
        bills: &[Bill],
    ) -> Result<BalanceAccumulator, BalanceError> {
        let mut accumulator = BalanceAccumulator::new(members);
        for bill in bills {
            accumulator.apply(bill)?;
        }
        tracing::debug!(
            member_count = members.len(),
            bill_count = bills.len(),
            "Balances computed"
        );
        Ok(accumulator)
    }
}
