//! Transaction model
//!
//! A transaction is an immutable record of a deposit or payment plus one
//! derived field, the running balance, which only the ledger writes.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Category assigned to records that were stored without one
pub const UNCATEGORIZED: &str = "Uncategorized";

/// A single ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Calendar date, `YYYY-MM-DD`
    date: String,

    /// Time of day, `HH:MM:SS`
    time: String,

    description: String,

    vendor: String,

    category: String,

    /// Positive for deposits, negative for payments
    amount: Money,

    /// Running balance after this transaction; derived, never authoritative
    balance: Money,
}

impl Transaction {
    /// Create an uncategorized transaction
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
        vendor: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self::with_category(date, time, description, vendor, UNCATEGORIZED, amount)
    }

    /// Create a transaction with a category
    pub fn with_category(
        date: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
        vendor: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            description: description.into(),
            vendor: vendor.into(),
            category: category.into(),
            amount,
            balance: Money::zero(),
        }
    }

    /// Create a transaction carrying a cached balance (as read from storage)
    pub fn with_balance(
        date: impl Into<String>,
        time: impl Into<String>,
        description: impl Into<String>,
        vendor: impl Into<String>,
        category: impl Into<String>,
        amount: Money,
        balance: Money,
    ) -> Self {
        let mut txn = Self::with_category(date, time, description, vendor, category, amount);
        txn.balance = balance;
        txn
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    /// Running balance as of this transaction
    ///
    /// Only meaningful after the owning ledger has recomputed balances.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Check if this is a deposit (positive amount)
    pub fn is_deposit(&self) -> bool {
        self.amount.is_positive()
    }

    /// Check if this is a payment (negative amount)
    pub fn is_payment(&self) -> bool {
        self.amount.is_negative()
    }

    pub(crate) fn set_balance(&mut self, balance: Money) {
        self.balance = balance;
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({}) {}",
            self.date, self.time, self.description, self.vendor, self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transaction_is_uncategorized() {
        let txn = Transaction::new(
            "2024-01-01",
            "09:00:00",
            "Paycheck",
            "Employer",
            Money::from_cents(100000),
        );
        assert_eq!(txn.category(), UNCATEGORIZED);
        assert_eq!(txn.balance(), Money::zero());
    }

    #[test]
    fn test_deposit_payment() {
        let deposit = Transaction::new("2024-01-01", "09:00:00", "a", "b", Money::from_cents(1));
        assert!(deposit.is_deposit());
        assert!(!deposit.is_payment());

        let payment = Transaction::new("2024-01-01", "09:00:00", "a", "b", Money::from_cents(-1));
        assert!(payment.is_payment());
        assert!(!payment.is_deposit());

        let zero = Transaction::new("2024-01-01", "09:00:00", "a", "b", Money::zero());
        assert!(!zero.is_deposit());
        assert!(!zero.is_payment());
    }

    #[test]
    fn test_with_balance_keeps_cache() {
        let txn = Transaction::with_balance(
            "2024-01-02",
            "10:00:00",
            "Rent",
            "Landlord",
            "Rent",
            Money::from_cents(-20000),
            Money::from_cents(80000),
        );
        assert_eq!(txn.balance(), Money::from_cents(80000));
        assert_eq!(txn.category(), "Rent");
    }

    #[test]
    fn test_display() {
        let txn = Transaction::with_category(
            "2024-01-02",
            "10:00:00",
            "Rent",
            "Landlord",
            "Rent",
            Money::from_cents(-20000),
        );
        assert_eq!(
            format!("{}", txn),
            "2024-01-02 10:00:00 Rent (Landlord) -200.00"
        );
    }
}
