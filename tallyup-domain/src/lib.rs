#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;

pub use model::{
    Bill, BillId, BillType, Member, MemberBalances, MemberId, Money, NegativeWeight, Settlement,
    Transaction, Weight, replay_transactions,
};
pub use services::{
    BalanceAccumulator, BalanceCalculator, BalanceError, MemberStats, MonthlyTotal,
    SettlementService, StatisticsService,
};
pub use tallyup_settle::{
    ExactMatchSettlement, GreedySettlement, SettlementError, SettlementStrategy,
};

/// Net balance (`paid - spent`) of every member, at full precision.
pub fn compute_balances(
    members: &[Member],
    bills: &[Bill],
) -> Result<MemberBalances, BalanceError> {
    BalanceCalculator.calculate(members, bills)
}

/// Greedy transfers that bring `balances` back to zero.
pub fn settle(balances: &MemberBalances) -> Result<Vec<Transaction>, SettlementError> {
    Ok(SettlementService::greedy().settle(balances)?.transactions)
}
