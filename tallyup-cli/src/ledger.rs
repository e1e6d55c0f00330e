use crate::error::CliError;
use chrono::NaiveDate;
use fxhash::FxHashSet;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs, path::Path};
use tallyup_domain::{Bill, BillId, BillType, Member, MemberId, Money, NegativeWeight, Weight};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    #[error("Member #{member}: {source}")]
    InvalidWeight {
        member: u64,
        source: NegativeWeight,
    },
    #[error("Member #{0} is declared more than once")]
    DuplicateMember(u64),
    #[error("Bill #{0} is declared more than once")]
    DuplicateBill(u64),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LedgerFile {
    #[serde(default)]
    members: Vec<MemberRecord>,
    #[serde(default)]
    bills: Vec<BillRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MemberRecord {
    id: u64,
    name: String,
    #[serde(default = "default_weight")]
    weight: Decimal,
    #[serde(default = "default_active")]
    active: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct BillRecord {
    id: u64,
    date: NaiveDate,
    #[serde(default)]
    description: String,
    payer: u64,
    amount: Decimal,
    owers: Vec<u64>,
    #[serde(default)]
    kind: BillKind,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum BillKind {
    #[default]
    Expense,
    Reimbursement,
}

fn default_weight() -> Decimal {
    Decimal::ONE
}

fn default_active() -> bool {
    true
}

/// Members and bills of one project.
#[derive(Debug, Clone, PartialEq)]
pub struct Ledger {
    pub members: Vec<Member>,
    pub bills: Vec<Bill>,
}

impl Ledger {
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = fs::read_to_string(path).map_err(|source| CliError::ReadLedger {
            path: path.to_path_buf(),
            source,
        })?;
        let ledger = Self::parse_at(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            member_count = ledger.members.len(),
            bill_count = ledger.bills.len(),
            "Ledger loaded"
        );
        Ok(ledger)
    }

    pub fn parse(content: &str) -> Result<Self, CliError> {
        Self::parse_at(content, Path::new("<inline>"))
    }

    fn parse_at(content: &str, path: &Path) -> Result<Self, CliError> {
        let file: LedgerFile = toml::from_str(content).map_err(|source| {
            CliError::InvalidLedger {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Ok(Self::try_from(file)?)
    }
}

impl TryFrom<LedgerFile> for Ledger {
    type Error = LedgerError;

    fn try_from(file: LedgerFile) -> Result<Self, Self::Error> {
        let mut seen = FxHashSet::default();
        let mut members = Vec::with_capacity(file.members.len());
        for record in file.members {
            if !seen.insert(record.id) {
                return Err(LedgerError::DuplicateMember(record.id));
            }
            let weight = Weight::new(record.weight).map_err(|source| LedgerError::InvalidWeight {
                member: record.id,
                source,
            })?;
            let member = Member::new(MemberId(record.id), record.name).with_weight(weight);
            members.push(if record.active {
                member
            } else {
                member.deactivated()
            });
        }

        let mut seen = FxHashSet::default();
        let mut bills = Vec::with_capacity(file.bills.len());
        for record in file.bills {
            if !seen.insert(record.id) {
                return Err(LedgerError::DuplicateBill(record.id));
            }
            bills.push(Bill {
                id: BillId(record.id),
                date: record.date,
                description: record.description,
                payer: MemberId(record.payer),
                amount: Money::from_decimal(record.amount),
                owers: record.owers.into_iter().map(MemberId).collect(),
                bill_type: match record.kind {
                    BillKind::Expense => BillType::Expense,
                    BillKind::Reimbursement => BillType::Reimbursement,
                },
            });
        }

        Ok(Self { members, bills })
    }
}
