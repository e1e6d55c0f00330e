#![warn(clippy::uninlined_format_args)]

pub mod directory;
pub mod error_presenter;
pub mod settlement_presenter;
pub mod stats_presenter;
pub mod text_table;

pub use directory::MemberDirectory;
pub use error_presenter::{format_balance_error, format_parse_error, format_settlement_error};
pub use settlement_presenter::SettlementPresenter;
pub use stats_presenter::StatsPresenter;
pub use text_table::{Alignment, TextTableBuilder};
