use tallyup_domain::{BalanceError, SettlementError};
use tallyup_i18n as i18n;
use tallyup_parser::ParseError;

pub fn format_balance_error(error: &BalanceError) -> String {
    match error {
        BalanceError::DegenerateBill { bill } => i18n::degenerate_bill(bill),
        BalanceError::UnknownMember { bill, member } => i18n::unknown_member(bill, member),
        BalanceError::Overflow { bill } => i18n::bill_overflow(bill),
    }
}

pub fn format_settlement_error(error: &SettlementError) -> String {
    match error {
        SettlementError::Unbalanced { debits, credits } => i18n::unbalanced(debits, credits),
    }
}

pub fn format_parse_error(error: &ParseError) -> String {
    match error {
        ParseError::Empty => i18n::NO_BALANCES.to_string(),
        ParseError::UnexpectedEnd { offset } => i18n::unexpected_end(*offset),
        ParseError::Syntax { offset, fragment } => i18n::syntax_error(*offset, fragment),
    }
}
