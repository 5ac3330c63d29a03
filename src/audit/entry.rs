//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Money, Transaction};
use crate::storage::encode_line;

/// Types of ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Transaction was added
    Create,
    /// Transaction was deleted
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// The record as it appears (or appeared) in the ledger file
    pub record: String,

    /// The transaction itself
    pub transaction: Transaction,

    /// 1-based display position the record was deleted from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,

    /// Ending balance of the ledger once the operation completed
    pub ending_balance: Money,
}

impl AuditEntry {
    /// Create an entry for an added transaction
    pub fn create(txn: &Transaction, ending_balance: Money) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            record: encode_line(txn),
            transaction: txn.clone(),
            position: None,
            ending_balance,
        }
    }

    /// Create an entry for a deleted transaction
    pub fn delete(txn: &Transaction, position: usize, ending_balance: Money) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            record: encode_line(txn),
            transaction: txn.clone(),
            position: Some(position),
            ending_balance,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.record
        );

        if let Some(position) = self.position {
            output.push_str(&format!(" (position {})", position));
        }

        output.push_str(&format!("\n  Ending balance: {}", self.ending_balance));
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction::with_category(
            "2024-01-01",
            "09:00:00",
            "Paycheck",
            "Employer",
            "Income",
            Money::from_cents(100000),
        )
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&sample(), Money::from_cents(100000));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(
            entry.record,
            "2024-01-01|09:00:00|Paycheck|Employer|Income|1000.00|0.00"
        );
        assert!(entry.position.is_none());
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&sample(), 3, Money::zero());
        assert_eq!(entry.operation, Operation::Delete);
        assert_eq!(entry.position, Some(3));
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::delete(&sample(), 1, Money::zero());

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"delete\""));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Delete);
        assert_eq!(deserialized.transaction, sample());
    }

    #[test]
    fn test_human_readable_format() {
        let entry = AuditEntry::delete(&sample(), 2, Money::from_cents(-500));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("DELETE"));
        assert!(formatted.contains("Paycheck"));
        assert!(formatted.contains("position 2"));
        assert!(formatted.contains("-5.00"));
    }
}
