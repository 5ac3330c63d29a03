//! Flat-file record store
//!
//! Persists encoded ledger lines to a single text file.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_io::{append_line, read_lines, write_lines_atomic};
use super::RecordStore;
use crate::error::LedgerResult;

/// Record store backed by one pipe-delimited text file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store for the given file; the file need not exist yet
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for FileStore {
    fn load_all(&self) -> LedgerResult<Vec<String>> {
        let lines = read_lines(&self.path)?;
        debug!("Read {} lines from {}", lines.len(), self.path.display());
        Ok(lines)
    }

    fn append_one(&mut self, line: &str) -> LedgerResult<()> {
        append_line(&self.path, line)?;
        debug!("Appended 1 record to {}", self.path.display());
        Ok(())
    }

    fn rewrite_all(&mut self, lines: &[String]) -> LedgerResult<()> {
        write_lines_atomic(&self.path, lines)?;
        debug!("Rewrote {} records to {}", lines.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, FileStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("transactions.csv"));
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_then_load() {
        let (_temp_dir, mut store) = create_test_store();
        store.append_one("a|b|c|d|1.00").unwrap();
        store.append_one("a|b|c|d|2.00").unwrap();

        assert_eq!(store.load_all().unwrap(), vec!["a|b|c|d|1.00", "a|b|c|d|2.00"]);
    }

    #[test]
    fn test_rewrite_all() {
        let (_temp_dir, mut store) = create_test_store();
        store.append_one("stale").unwrap();
        store
            .rewrite_all(&["new one".to_string(), "new two".to_string()])
            .unwrap();

        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "new one\nnew two\n"
        );
    }
}
