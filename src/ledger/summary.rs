//! Ledger totals

use crate::models::{Money, Transaction};

/// Totals over a set of transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    /// Sum of positive amounts
    pub deposits: Money,
    /// Sum of negative amounts, as a positive magnitude
    pub payments: Money,
    /// Balance of the newest transaction, or zero when there is none
    pub ending_balance: Money,
    pub count: usize,
}

impl LedgerSummary {
    /// Summarize transactions given in display order (newest first)
    pub fn from_transactions<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();

        for (i, txn) in transactions.into_iter().enumerate() {
            if i == 0 {
                summary.ending_balance = txn.balance();
            }
            if txn.is_deposit() {
                summary.deposits += txn.amount();
            } else if txn.is_payment() {
                summary.payments += txn.amount().abs();
            }
            summary.count += 1;
        }

        summary
    }

    /// Deposits minus payments
    pub fn net(&self) -> Money {
        self.deposits - self.payments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(date: &str, amount: i64, balance: i64) -> Transaction {
        Transaction::with_balance(
            date,
            "12:00:00",
            "d",
            "v",
            "c",
            Money::from_cents(amount),
            Money::from_cents(balance),
        )
    }

    #[test]
    fn test_empty() {
        let summary = LedgerSummary::from_transactions(std::iter::empty());
        assert_eq!(summary, LedgerSummary::default());
        assert_eq!(summary.ending_balance, Money::zero());
    }

    #[test]
    fn test_totals() {
        let txns = vec![
            txn("2024-01-03", -2500, 77500),
            txn("2024-01-02", -20000, 80000),
            txn("2024-01-01", 100000, 100000),
        ];

        let summary = LedgerSummary::from_transactions(&txns);
        assert_eq!(summary.deposits, Money::from_cents(100000));
        assert_eq!(summary.payments, Money::from_cents(22500));
        assert_eq!(summary.ending_balance, Money::from_cents(77500));
        assert_eq!(summary.net(), Money::from_cents(77500));
        assert_eq!(summary.count, 3);
    }
}
