//! Storage layer for the ledger
//!
//! Encodes transactions as pipe-delimited lines and persists them to a flat
//! text file with O(1) appends and full atomic rewrites.

pub mod codec;
pub mod file_io;
pub mod file_store;

pub use codec::{decode_line, encode_line};
pub use file_store::FileStore;

use crate::error::LedgerResult;

/// Durable line storage behind a ledger
///
/// All failures are reported as [`crate::LedgerError::Storage`].
pub trait RecordStore {
    /// Read every stored line in file order; a missing store yields nothing
    fn load_all(&self) -> LedgerResult<Vec<String>>;

    /// Append one line after the existing content
    fn append_one(&mut self, line: &str) -> LedgerResult<()>;

    /// Replace the whole store with `lines`, in the order given
    fn rewrite_all(&mut self, lines: &[String]) -> LedgerResult<()>;
}
