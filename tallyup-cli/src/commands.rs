use crate::{config::Strategy, error::CliError, ledger::Ledger};
use indexmap::IndexMap;
use std::{collections::HashMap, fmt::Write as _, path::Path};
use tallyup_domain::{BalanceCalculator, MemberId, Money, SettlementService, StatisticsService};
use tallyup_i18n as i18n;
use tallyup_parser::parse_balances;
use tallyup_presentation::{SettlementPresenter, StatsPresenter};

/// Settles inline balances such as `alice +200, marc -100, henri -100`.
///
/// Names become members in the order they first appear.
pub fn settle_inline(input: &str, strategy: Strategy) -> Result<String, CliError> {
    let entries = parse_balances(input)?;

    let mut ids: IndexMap<&str, MemberId> = IndexMap::new();
    let balances: Vec<(MemberId, Money)> = entries
        .into_iter()
        .map(|(name, amount)| {
            let next = MemberId(ids.len() as u64 + 1);
            let id = *ids.entry(name).or_insert(next);
            (id, Money::from_decimal(amount))
        })
        .collect();
    let directory: HashMap<MemberId, String> = ids
        .into_iter()
        .map(|(name, id)| (id, name.to_string()))
        .collect();

    let settlement = SettlementService::new(strategy.solver()).settle_entries(balances)?;
    Ok(SettlementPresenter::transfers_or_notice(
        &settlement.transactions,
        &directory,
    ))
}

/// Balances, statistics, monthly totals and transfers for a ledger file.
pub fn settle_ledger(path: &Path, strategy: Strategy) -> Result<String, CliError> {
    let ledger = Ledger::load(path)?;
    render_ledger(&ledger, strategy)
}

pub fn render_ledger(ledger: &Ledger, strategy: Strategy) -> Result<String, CliError> {
    let balances = BalanceCalculator.calculate(&ledger.members, &ledger.bills)?;
    let settlement = SettlementService::new(strategy.solver()).settle(&balances)?;
    let stats = StatisticsService.member_stats(&ledger.members, &ledger.bills)?;
    let months = StatisticsService.monthly_stats(&ledger.bills);

    let directory = &ledger.members;
    let mut report = String::with_capacity(1024);
    let _ = writeln!(report, "{}", i18n::BALANCES);
    report.push_str(&SettlementPresenter::build_balance_table(
        &balances, directory,
    ));
    let _ = writeln!(report, "\n{}", i18n::STATISTICS);
    report.push_str(&StatsPresenter::build_member_stats_table(&stats, directory));
    let _ = writeln!(report, "\n{}", i18n::MONTHLY_EXPENSES);
    report.push_str(&StatsPresenter::build_monthly_table(&months));
    let _ = writeln!(report, "\n{}", i18n::TRANSFERS);
    report.push_str(&SettlementPresenter::transfers_or_notice(
        &settlement.transactions,
        directory,
    ));

    Ok(report)
}
