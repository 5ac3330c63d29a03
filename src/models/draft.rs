//! Validated input path for new transactions
//!
//! Raw user text is turned into a [`Transaction`] here. Dates and times are
//! parsed with chrono and re-emitted zero-padded, so that date text stored in
//! the ledger always compares correctly as a string.

use chrono::{Local, NaiveDate, NaiveTime};

use super::money::Money;
use super::transaction::{Transaction, UNCATEGORIZED};
use crate::error::{LedgerError, LedgerResult};

/// Storage date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Storage time format
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// User-supplied fields for a transaction that has not been created yet
#[derive(Debug, Clone, Default)]
pub struct TransactionDraft {
    /// Date text (YYYY-MM-DD); defaults to today
    pub date: Option<String>,
    /// Time text (HH:MM:SS or HH:MM); defaults to now
    pub time: Option<String>,
    pub description: String,
    pub vendor: String,
    /// Empty or missing means uncategorized
    pub category: Option<String>,
}

impl TransactionDraft {
    pub fn new(description: impl Into<String>, vendor: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            vendor: vendor.into(),
            ..Self::default()
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Build a deposit; the amount is always stored as positive
    pub fn into_deposit(self, amount: &str) -> LedgerResult<Transaction> {
        let amount = Money::parse(amount)?;
        self.into_transaction(amount.abs())
    }

    /// Build a payment; the amount is always stored as negative
    pub fn into_payment(self, amount: &str) -> LedgerResult<Transaction> {
        let amount = Money::parse(amount)?;
        self.into_transaction(-amount.abs())
    }

    /// Validate every field and build the transaction with the amount as given
    pub fn into_transaction(self, amount: Money) -> LedgerResult<Transaction> {
        let now = Local::now();

        let date = match self.date.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => normalize_date(text)?,
            _ => now.date_naive().format(DATE_FORMAT).to_string(),
        };

        let time = match self.time.as_deref().map(str::trim) {
            Some(text) if !text.is_empty() => normalize_time(text)?,
            _ => now.time().format(TIME_FORMAT).to_string(),
        };

        let description = clean_field("description", &self.description)?;
        let vendor = clean_field("vendor", &self.vendor)?;
        let category = match self.category.as_deref() {
            Some(c) if !c.trim().is_empty() => clean_field("category", c)?,
            _ => UNCATEGORIZED.to_string(),
        };

        Ok(Transaction::with_category(
            date,
            time,
            description,
            vendor,
            category,
            amount,
        ))
    }
}

/// Parse a date and render it in the zero-padded storage form
///
/// Accepts unpadded input such as `2024-1-5`.
pub fn normalize_date(text: &str) -> LedgerResult<String> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
        .map(|d| d.format(DATE_FORMAT).to_string())
        .map_err(|_| {
            LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", text))
        })
}

/// Parse a time (`HH:MM:SS` or `HH:MM`) and render it as `HH:MM:SS`
pub fn normalize_time(text: &str) -> LedgerResult<String> {
    let text = text.trim();
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, "%H:%M"))
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| {
            LedgerError::Validation(format!("Invalid time format: '{}'. Use HH:MM:SS", text))
        })
}

/// Trim a free-text field and reject characters the line format cannot hold
fn clean_field(name: &str, value: &str) -> LedgerResult<String> {
    if value.contains(['|', '\n', '\r']) {
        return Err(LedgerError::Validation(format!(
            "The {} may not contain '|' or line breaks",
            name
        )));
    }
    Ok(value.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deposit_forces_positive() {
        let txn = TransactionDraft::new("Paycheck", "Employer")
            .date("2024-01-01")
            .time("09:00:00")
            .category("Income")
            .into_deposit("-1000")
            .unwrap();
        assert_eq!(txn.amount(), Money::from_cents(100000));
        assert_eq!(txn.category(), "Income");
    }

    #[test]
    fn test_payment_forces_negative() {
        let txn = TransactionDraft::new("Rent", "Landlord")
            .date("2024-01-02")
            .time("10:00")
            .into_payment("200.00")
            .unwrap();
        assert_eq!(txn.amount(), Money::from_cents(-20000));
        assert_eq!(txn.time(), "10:00:00");
        assert_eq!(txn.category(), UNCATEGORIZED);
    }

    #[test]
    fn test_invalid_amount() {
        let err = TransactionDraft::new("x", "y")
            .date("2024-01-01")
            .into_deposit("lots")
            .unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
    }

    #[test]
    fn test_date_is_zero_padded() {
        assert_eq!(normalize_date("2024-1-5").unwrap(), "2024-01-05");
        assert!(normalize_date("01/05/2024").unwrap_err().is_validation());
        assert!(normalize_date("2024-13-01").is_err());
    }

    #[test]
    fn test_time_formats() {
        assert_eq!(normalize_time("9:05").unwrap(), "09:05:00");
        assert_eq!(normalize_time("23:59:59").unwrap(), "23:59:59");
        assert!(normalize_time("25:00").is_err());
    }

    #[test]
    fn test_rejects_delimiter_in_text() {
        let err = TransactionDraft::new("a|b", "vendor")
            .date("2024-01-01")
            .into_deposit("1")
            .unwrap_err();
        assert!(err.is_validation());

        let err = TransactionDraft::new("ok", "line\nbreak")
            .date("2024-01-01")
            .into_deposit("1")
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_defaults_date_and_time() {
        let txn = TransactionDraft::new("Coffee", "Cafe")
            .into_payment("3.50")
            .unwrap();
        assert_eq!(txn.date().len(), 10);
        assert_eq!(txn.time().len(), 8);
    }
}
