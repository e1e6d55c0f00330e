use crate::model::{
    MemberBalances, MemberId, Money, Settlement, Transaction, replay_transactions,
};
use tallyup_settle::{GreedySettlement, PersonBalance, SettlementError, SettlementStrategy};

/// Bridges member balances to a settlement strategy.
pub struct SettlementService<'a> {
    strategy: &'a dyn SettlementStrategy<MemberId>,
}

impl<'a> SettlementService<'a> {
    pub fn new(strategy: &'a dyn SettlementStrategy<MemberId>) -> Self {
        Self { strategy }
    }

    pub fn greedy() -> SettlementService<'static> {
        SettlementService::new(&GreedySettlement)
    }

    /// Proposes transfers for `balances` and reports what each balance would
    /// be once they are made.
    pub fn settle(&self, balances: &MemberBalances) -> Result<Settlement, SettlementError> {
        self.settle_entries(balances.iter().map(|(member, money)| (*member, *money)))
    }

    /// Like [`Self::settle`], but entries for the same member are summed.
    pub fn settle_entries(
        &self,
        entries: impl IntoIterator<Item = (MemberId, Money)>,
    ) -> Result<Settlement, SettlementError> {
        let mut totals = MemberBalances::new();
        let people: Vec<PersonBalance<MemberId>> = entries
            .into_iter()
            .map(|(member, money)| {
                *totals.entry(member).or_insert(Money::ZERO) += money;
                PersonBalance::new(member, money.as_decimal())
            })
            .collect();

        let transactions: Vec<Transaction> = self
            .strategy
            .settle(&people)?
            .into_iter()
            .map(|transaction| Transaction {
                ower: transaction.ower,
                amount: Money::from_decimal(transaction.amount),
                receiver: transaction.receiver,
            })
            .collect();

        let residuals = replay_transactions(totals, &transactions);
        tracing::debug!(
            member_count = residuals.len(),
            transaction_count = transactions.len(),
            "Settlement proposed"
        );

        Ok(Settlement {
            transactions,
            residuals,
        })
    }
}
