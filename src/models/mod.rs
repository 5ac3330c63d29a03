//! Core data models for the ledger
//!
//! Transactions, the money type they are measured in, and the validated
//! input path used to create new transactions from user text.

pub mod draft;
pub mod money;
pub mod transaction;

pub use draft::TransactionDraft;
pub use money::Money;
pub use transaction::{Transaction, UNCATEGORIZED};
