use crate::{
    directory::MemberDirectory,
    settlement_presenter::{format_member_label, format_signed},
    text_table::{Alignment, TextTableBuilder},
};
use std::borrow::Cow;
use tallyup_domain::{MemberStats, MonthlyTotal};
use tallyup_i18n as i18n;

pub struct StatsPresenter;

impl StatsPresenter {
    pub fn build_member_stats_table(
        stats: &[MemberStats],
        member_directory: &dyn MemberDirectory,
    ) -> String {
        TextTableBuilder::new()
            .alignments(&[
                Alignment::Left,
                Alignment::Right,
                Alignment::Right,
                Alignment::Right,
            ])
            .headers(&[
                Cow::Borrowed(i18n::MEMBER),
                Cow::Borrowed(i18n::PAID),
                Cow::Borrowed(i18n::SPENT),
                Cow::Borrowed(i18n::BALANCE),
            ])
            .rows(stats.iter().map(|entry| {
                [
                    format_member_label(entry.member, member_directory),
                    Cow::Owned(entry.paid.to_string()),
                    Cow::Owned(entry.spent.to_string()),
                    Cow::Owned(format_signed(entry.balance)),
                ]
            }))
            .build()
    }

    pub fn build_monthly_table(months: &[MonthlyTotal]) -> String {
        TextTableBuilder::new()
            .alignments(&[Alignment::Left, Alignment::Right])
            .headers(&[Cow::Borrowed(i18n::MONTH), Cow::Borrowed(i18n::TOTAL)])
            .rows(months.iter().map(|month| {
                [
                    Cow::Owned(format!("{:04}-{:02}", month.year, month.month)),
                    Cow::Owned(month.total.to_string()),
                ]
            }))
            .build()
    }
}
