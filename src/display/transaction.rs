//! Transaction display formatting
//!
//! Provides utilities for formatting transactions for terminal display,
//! including the register view and the ledger summary.

use crate::ledger::LedgerSummary;
use crate::models::{Money, Transaction};

const REGISTER_WIDTH: usize = 104;

/// Format a single transaction for display (register row)
///
/// `position` is the 1-based display position accepted by `delete --index`.
pub fn format_transaction_row(position: usize, txn: &Transaction, symbol: &str) -> String {
    format!(
        "{:>4} {:10} {:8} {:20} {:16} {:14} {:>12} {:>12}",
        position,
        txn.date(),
        txn.time(),
        truncate(txn.description(), 20),
        truncate(txn.vendor(), 16),
        truncate(txn.category(), 14),
        txn.amount().format_with_symbol(symbol),
        txn.balance().format_with_symbol(symbol)
    )
}

/// Format a list of transactions as a register
///
/// Rows are numbered in the order given.
pub fn format_transaction_register(transactions: &[&Transaction], symbol: &str) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4} {:10} {:8} {:20} {:16} {:14} {:>12} {:>12}\n",
        "#", "Date", "Time", "Description", "Vendor", "Category", "Amount", "Balance"
    ));
    output.push_str(&"-".repeat(REGISTER_WIDTH));
    output.push('\n');

    for (i, txn) in transactions.iter().enumerate() {
        output.push_str(&format_transaction_row(i + 1, txn, symbol));
        output.push('\n');
    }

    output
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let kind = if txn.is_deposit() {
        "Deposit"
    } else if txn.is_payment() {
        "Payment"
    } else {
        "Zero amount"
    };

    let mut output = String::new();
    output.push_str(&format!("Type:        {}\n", kind));
    output.push_str(&format!("Date:        {} {}\n", txn.date(), txn.time()));
    output.push_str(&format!("Description: {}\n", txn.description()));
    output.push_str(&format!("Vendor:      {}\n", txn.vendor()));
    output.push_str(&format!("Category:    {}\n", txn.category()));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Balance:     {}\n",
        txn.balance().format_with_symbol(symbol)
    ));
    output
}

/// Format the ledger totals
pub fn format_summary(summary: &LedgerSummary, symbol: &str) -> String {
    let line = |label: &str, amount: Money| {
        format!("{:<16}{:>14}\n", label, amount.format_with_symbol(symbol))
    };

    let mut output = String::new();
    output.push_str(&format!("{:<16}{:>14}\n", "Transactions:", summary.count));
    output.push_str(&line("Deposits:", summary.deposits));
    output.push_str(&line("Payments:", summary.payments));
    output.push_str(&line("Net:", summary.net()));
    output.push_str(&"-".repeat(30));
    output.push('\n');
    output.push_str(&line("Ending balance:", summary.ending_balance));
    output
}

/// Truncate a string to a maximum number of characters
pub(crate) fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::with_category(
            "2025-01-15",
            "09:30:00",
            "Weekly groceries",
            "Test Store",
            "Food",
            Money::from_cents(-5000),
        )
    }

    #[test]
    fn test_format_transaction_row() {
        let formatted = format_transaction_row(1, &sample(), "$");
        assert!(formatted.contains("2025-01-15"));
        assert!(formatted.contains("Test Store"));
        assert!(formatted.contains("Food"));
        assert!(formatted.contains("-$50.00"));
    }

    #[test]
    fn test_format_empty_register() {
        let formatted = format_transaction_register(&[], "$");
        assert!(formatted.contains("No transactions found"));
    }

    #[test]
    fn test_register_numbers_rows() {
        let a = sample();
        let b = Transaction::new("2025-01-16", "10:00:00", "Pay", "Acme", Money::from_cents(100000));
        let formatted = format_transaction_register(&[&b, &a], "$");

        let rows: Vec<&str> = formatted.lines().skip(2).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].trim_start().starts_with("1 2025-01-16"));
        assert!(rows[1].trim_start().starts_with("2 2025-01-15"));
    }

    #[test]
    fn test_format_transaction_details() {
        let formatted = format_transaction_details(&sample(), "$");
        assert!(formatted.contains("Payment"));
        assert!(formatted.contains("Weekly groceries"));
        assert!(formatted.contains("Food"));
    }

    #[test]
    fn test_format_summary() {
        let summary = LedgerSummary {
            deposits: Money::from_cents(150000),
            payments: Money::from_cents(20000),
            ending_balance: Money::from_cents(130000),
            count: 2,
        };

        let formatted = format_summary(&summary, "$");
        assert!(formatted.contains("$1500.00"));
        assert!(formatted.contains("$200.00"));
        assert!(formatted.contains("Ending balance:"));
        assert!(formatted.contains("$1300.00"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Short", 10), "Short");
        let result = truncate("A very long string", 10);
        assert_eq!(result.chars().count(), 10);
        assert!(result.ends_with("..."));
    }
}
