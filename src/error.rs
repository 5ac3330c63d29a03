//! Custom error types for the ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum LedgerError {
    /// A stored line could not be decoded into a transaction
    #[error("Malformed record ({reason}): {line}")]
    MalformedRecord { reason: String, line: String },

    /// The backing file could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// A by-index delete targeted a position outside the ledger
    #[error("Index {index} is out of range (ledger has {len} transactions)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Amount text is not numeric, or a value is not finite
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Validation errors for user-supplied transaction fields
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the ledger store (settings, audit log)
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),
}

impl LedgerError {
    /// Create a malformed-record error for a stored line
    pub fn malformed(reason: impl Into<String>, line: impl Into<String>) -> Self {
        Self::MalformedRecord {
            reason: reason.into(),
            line: line.into(),
        }
    }

    /// Check if this is a malformed-record error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedRecord { .. })
    }

    /// Check if this is a storage error
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type LedgerResult<T> = Result<T, LedgerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LedgerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_malformed_record() {
        let err = LedgerError::malformed("expected 5, 6 or 7 fields, found 3", "a|b|c");
        assert_eq!(
            err.to_string(),
            "Malformed record (expected 5, 6 or 7 fields, found 3): a|b|c"
        );
        assert!(err.is_malformed());
        assert!(!err.is_storage());
    }

    #[test]
    fn test_index_out_of_range() {
        let err = LedgerError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 4 is out of range (ledger has 2 transactions)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let ledger_err: LedgerError = io_err.into();
        assert!(matches!(ledger_err, LedgerError::Io(_)));
    }
}
