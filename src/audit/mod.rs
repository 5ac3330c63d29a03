//! Audit logging for ledger mutations
//!
//! Every added and deleted transaction is recorded in an append-only
//! line-delimited JSON log next to the ledger file.
//!
//! - `AuditEntry`: one operation, with the affected record and the ending
//!   balance after it.
//! - `AuditLogger`: appends entries to the log and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
