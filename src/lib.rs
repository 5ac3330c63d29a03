//! ledger-cli - Personal transaction ledger
//!
//! This library keeps an ordered collection of deposits and payments backed by
//! a pipe-delimited text file, maintains a running balance over it, and
//! answers searches, deletions and reports.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Transaction, money and the validated input path
//! - `storage`: Line codec and the file-backed record store
//! - `ledger`: The in-memory ledger, filtering, deletion and totals
//! - `reports`: Period and spending reports
//! - `audit`: Audit logging of adds and deletes
//! - `config`: Configuration and path management
//! - `display`, `cli`: Terminal formatting and command handlers
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust,no_run
//! use ledger::ledger::Ledger;
//! use ledger::models::TransactionDraft;
//! use ledger::storage::FileStore;
//!
//! # fn main() -> ledger::LedgerResult<()> {
//! let mut book = Ledger::open(FileStore::new("transactions.csv"))?;
//! let txn = TransactionDraft::new("Paycheck", "Acme").into_deposit("1500")?;
//! let balance = book.add_transaction(txn).into_result()?;
//! println!("Balance: {}", balance);
//! # Ok(())
//! # }
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
