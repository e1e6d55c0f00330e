use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use std::{
    collections::BTreeMap,
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BillId(pub u64);

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Exact decimal amount of money, in the project's single currency.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Rounds to cents for display (banker's rounding).
    pub fn round_cents(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven),
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.round_cents().0;
        if value.is_zero() {
            value = Decimal::ZERO;
        }
        value.rescale(2);
        write!(f, "{value}")
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Weight must not be negative (got {0})")]
pub struct NegativeWeight(pub Decimal);

/// Share multiplier used when splitting a bill.
///
/// Zero is allowed; a bill whose owers all weigh zero cannot be split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(Decimal);

impl Weight {
    pub const ONE: Self = Self(Decimal::ONE);

    pub fn new(value: Decimal) -> Result<Self, NegativeWeight> {
        if value < Decimal::ZERO {
            return Err(NegativeWeight(value));
        }
        Ok(Self(value))
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub weight: Weight,
    pub active: bool,
}

impl Member {
    /// An active member with weight 1.
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            weight: Weight::ONE,
            active: true,
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn deactivated(mut self) -> Self {
        self.active = false;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BillType {
    #[default]
    Expense,
    /// Money paid back between members; counts toward balances, not expenses.
    Reimbursement,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bill {
    pub id: BillId,
    pub date: NaiveDate,
    pub description: String,
    pub payer: MemberId,
    /// Signed; a negative amount records a refund or correction.
    pub amount: Money,
    pub owers: Vec<MemberId>,
    pub bill_type: BillType,
}

/// Net balance per member. Ordered by id so that iteration is stable.
pub type MemberBalances = BTreeMap<MemberId, Money>;

/// A proposed payment from `ower` to `receiver`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub ower: MemberId,
    pub amount: Money,
    pub receiver: MemberId,
}

#[derive(Debug, PartialEq)]
pub struct Settlement {
    pub transactions: Vec<Transaction>,
    /// What is left of each balance after replaying `transactions`.
    pub residuals: MemberBalances,
}

/// Applies transactions to balances: owers move up, receivers move down.
pub fn replay_transactions(
    mut balances: MemberBalances,
    transactions: &[Transaction],
) -> MemberBalances {
    for transaction in transactions {
        *balances.entry(transaction.ower).or_insert(Money::ZERO) += transaction.amount;
        *balances.entry(transaction.receiver).or_insert(Money::ZERO) -= transaction.amount;
    }
    balances
}
