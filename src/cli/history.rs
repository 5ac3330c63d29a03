//! CLI command for the audit history

use clap::Args;

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Arguments for `history`
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show, most recent last
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle `history`
pub fn handle_history_command(logger: &AuditLogger, args: HistoryArgs) -> LedgerResult<()> {
    if !logger.exists() {
        println!("No audit history yet.");
        return Ok(());
    }

    let entries = logger.read_recent(args.limit)?;
    if entries.is_empty() {
        println!("No audit history yet.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditEntry;
    use crate::models::{Money, Transaction};
    use tempfile::TempDir;

    #[test]
    fn test_missing_log_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));

        handle_history_command(&logger, HistoryArgs { limit: 5 }).unwrap();
    }

    #[test]
    fn test_reads_existing_log() {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        let txn = Transaction::new("2024-01-01", "09:00:00", "Pay", "Acme", Money::from_cents(100));
        logger.log(&AuditEntry::create(&txn, Money::from_cents(100))).unwrap();

        handle_history_command(&logger, HistoryArgs { limit: 5 }).unwrap();
    }
}
