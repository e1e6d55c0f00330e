use crate::{
    directory::MemberDirectory,
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tallyup_domain::{MemberBalances, MemberId, Money, Transaction};
use tallyup_i18n as i18n;

pub struct SettlementPresenter;

impl SettlementPresenter {
    pub fn build_balance_table(
        balances: &MemberBalances,
        member_directory: &dyn MemberDirectory,
    ) -> String {
        let mut builder = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::MEMBER), Cow::Borrowed(i18n::BALANCE)]);

        for (member, balance) in balances {
            builder = builder.row([
                format_member_label(*member, member_directory),
                Cow::Owned(format_signed(*balance)),
            ]);
        }

        builder.build()
    }

    /// Transfers in the order they were proposed; `None` when there are none.
    pub fn build_transfer_table(
        transactions: &[Transaction],
        member_directory: &dyn MemberDirectory,
    ) -> Option<String> {
        if transactions.is_empty() {
            return None;
        }

        let table = TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Left, Alignment::Right])
            .headers(&[
                Cow::Borrowed(i18n::FROM),
                Cow::Borrowed(i18n::TO),
                Cow::Borrowed(i18n::AMOUNT),
            ])
            .rows(transactions.iter().map(|transaction| {
                [
                    format_member_label(transaction.ower, member_directory),
                    format_member_label(transaction.receiver, member_directory),
                    Cow::Owned(transaction.amount.to_string()),
                ]
            }))
            .build();

        Some(table)
    }

    /// The transfer table, or a notice that nothing needs to move.
    pub fn transfers_or_notice(
        transactions: &[Transaction],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        Self::build_transfer_table(transactions, member_directory)
            .unwrap_or_else(|| format!("{}\n", i18n::NO_TRANSFERS))
    }
}

pub(crate) fn format_member_label<'a>(
    member_id: MemberId,
    member_directory: &'a dyn MemberDirectory,
) -> Cow<'a, str> {
    match member_directory.display_name(member_id) {
        Some(name) => Cow::Borrowed(name),
        None => Cow::Owned(member_id.to_string()),
    }
}

/// `+` for zero and credits, `-` for debts, always two decimals.
pub(crate) fn format_signed(money: Money) -> String {
    let rendered = money.to_string();
    if rendered.starts_with('-') {
        rendered
    } else {
        format!("+{rendered}")
    }
}
