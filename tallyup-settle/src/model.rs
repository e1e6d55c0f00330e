use rust_decimal::Decimal;

/// Net position of one participant (positive: is owed money, negative: owes money).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonBalance<Id = String> {
    pub id: Id,
    pub balance: Decimal,
}

impl<Id> PersonBalance<Id> {
    pub fn new(id: Id, balance: Decimal) -> Self {
        Self { id, balance }
    }
}

/// A proposed payment of `amount` from `ower` to `receiver`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction<Id = String> {
    pub ower: Id,
    pub amount: Decimal,
    pub receiver: Id,
}

impl<Id> Transaction<Id> {
    pub fn new(ower: Id, amount: Decimal, receiver: Id) -> Self {
        Self {
            ower,
            amount,
            receiver,
        }
    }
}
