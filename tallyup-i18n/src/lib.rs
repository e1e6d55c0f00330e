#[cfg(all(feature = "fr", feature = "en"))]
compile_error!("Cannot enable both 'fr' and 'en' features at the same time");

#[cfg(feature = "fr")]
pub mod strings {
    pub const MEMBER: &str = "Membre";
    pub const BALANCE: &str = "Solde";
    pub const FROM: &str = "De";
    pub const TO: &str = "À";
    pub const AMOUNT: &str = "Montant";
    pub const PAID: &str = "A payé";
    pub const SPENT: &str = "A dépensé";
    pub const MONTH: &str = "Mois";
    pub const TOTAL: &str = "Total";
    pub const BALANCES: &str = "Soldes";
    pub const TRANSFERS: &str = "Remboursements";
    pub const STATISTICS: &str = "Statistiques";
    pub const MONTHLY_EXPENSES: &str = "Dépenses mensuelles";
    pub const NO_TRANSFERS: &str = "Aucun remboursement nécessaire";
    pub const NO_BALANCES: &str = "Aucun solde donné.";
}

#[cfg(feature = "en")]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PAID: &str = "Paid";
    pub const SPENT: &str = "Spent";
    pub const MONTH: &str = "Month";
    pub const TOTAL: &str = "Total";
    pub const BALANCES: &str = "Balances";
    pub const TRANSFERS: &str = "Transfers";
    pub const STATISTICS: &str = "Statistics";
    pub const MONTHLY_EXPENSES: &str = "Monthly expenses";
    pub const NO_TRANSFERS: &str = "No transfers needed";
    pub const NO_BALANCES: &str = "No balances given.";
}

#[cfg(not(any(feature = "fr", feature = "en")))]
pub mod strings {
    pub const MEMBER: &str = "Member";
    pub const BALANCE: &str = "Balance";
    pub const FROM: &str = "From";
    pub const TO: &str = "To";
    pub const AMOUNT: &str = "Amount";
    pub const PAID: &str = "Paid";
    pub const SPENT: &str = "Spent";
    pub const MONTH: &str = "Month";
    pub const TOTAL: &str = "Total";
    pub const BALANCES: &str = "Balances";
    pub const TRANSFERS: &str = "Transfers";
    pub const STATISTICS: &str = "Statistics";
    pub const MONTHLY_EXPENSES: &str = "Monthly expenses";
    pub const NO_TRANSFERS: &str = "No transfers needed";
    pub const NO_BALANCES: &str = "No balances given.";
}

pub use strings::*;

use std::fmt::Display;

#[cfg(feature = "fr")]
pub fn unbalanced(debits: impl Display, credits: impl Display) -> String {
    format!("Impossible d'équilibrer : débits -{debits}, crédits +{credits}")
}

#[cfg(feature = "fr")]
pub fn degenerate_bill(bill: impl Display) -> String {
    format!("La facture {bill} n'a aucun participant pondéré pour la répartir")
}

#[cfg(feature = "fr")]
pub fn unknown_member(bill: impl Display, member: impl Display) -> String {
    format!("La facture {bill} mentionne le membre inconnu {member}")
}

#[cfg(feature = "fr")]
pub fn bill_overflow(bill: impl Display) -> String {
    format!("La facture {bill} dépasse la précision décimale")
}

#[cfg(feature = "fr")]
pub fn unexpected_end(offset: usize) -> String {
    format!("Fin de saisie inattendue (position {offset})")
}

#[cfg(feature = "fr")]
pub fn syntax_error(offset: usize, fragment: impl Display) -> String {
    format!("Erreur de syntaxe à la position {offset} : '{fragment}' inattendu")
}

#[cfg(not(feature = "fr"))]
pub fn unbalanced(debits: impl Display, credits: impl Display) -> String {
    format!("Unsolvable: debits -{debits} and credits +{credits} do not cancel out")
}

#[cfg(not(feature = "fr"))]
pub fn degenerate_bill(bill: impl Display) -> String {
    format!("Bill {bill} has no weighted ower to split it across")
}

#[cfg(not(feature = "fr"))]
pub fn unknown_member(bill: impl Display, member: impl Display) -> String {
    format!("Bill {bill} references unknown member {member}")
}

#[cfg(not(feature = "fr"))]
pub fn bill_overflow(bill: impl Display) -> String {
    format!("Bill {bill} overflows decimal precision")
}

#[cfg(not(feature = "fr"))]
pub fn unexpected_end(offset: usize) -> String {
    format!("Unexpected end of input at offset {offset}")
}

#[cfg(not(feature = "fr"))]
pub fn syntax_error(offset: usize, fragment: impl Display) -> String {
    format!("Syntax error at offset {offset}: unexpected '{fragment}'")
}
