pub mod balance_calculator;
pub mod member_stats;
pub mod settlement_service;

pub use balance_calculator::{BalanceAccumulator, BalanceCalculator, BalanceError};
pub use member_stats::{MemberStats, MonthlyTotal, StatisticsService};
pub use settlement_service::SettlementService;
