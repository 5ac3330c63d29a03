//! Audit logger for append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::warn;

use crate::error::{LedgerError, LedgerResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry as a JSON line and flush it
    pub fn log(&self, entry: &AuditEntry) -> LedgerResult<()> {
        self.log_batch(std::slice::from_ref(entry))
    }

    /// Log multiple audit entries, flushing once at the end
    pub fn log_batch(&self, entries: &[AuditEntry]) -> LedgerResult<()> {
        if entries.is_empty() {
            return Ok(());
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        for entry in entries {
            let json = serde_json::to_string(entry).map_err(|e| {
                LedgerError::Json(format!("Failed to serialize audit entry: {}", e))
            })?;

            writeln!(file, "{}", json)
                .map_err(|e| LedgerError::Io(format!("Failed to write audit entry: {}", e)))?;
        }

        file.flush()
            .map_err(|e| LedgerError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read the most recent `count` entries, oldest of them first
    ///
    /// Lines that are not valid entries are skipped with a warning.
    pub fn read_recent(&self, count: usize) -> LedgerResult<Vec<AuditEntry>> {
        if count == 0 || !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| LedgerError::Io(format!("Failed to open audit log: {}", e)))?;

        let mut recent: VecDeque<AuditEntry> = VecDeque::with_capacity(count.min(256));
        for (line_num, line) in BufReader::new(file).lines().enumerate() {
            let line = line.map_err(|e| {
                LedgerError::Io(format!(
                    "Failed to read audit log line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<AuditEntry>(&line) {
                Ok(entry) => {
                    if recent.len() == count {
                        recent.pop_front();
                    }
                    recent.push_back(entry);
                }
                Err(e) => warn!("Skipping audit log line {}: {}", line_num + 1, e),
            }
        }

        Ok(recent.into())
    }

    pub fn exists(&self) -> bool {
        self.log_path.exists()
    }
}
