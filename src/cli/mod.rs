//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger.

pub mod history;
pub mod report;
pub mod transaction;

pub use history::{handle_history_command, HistoryArgs};
pub use report::{handle_report_command, ReportArgs};
pub use transaction::{
    handle_delete_command, handle_entry_command, handle_list_command, handle_summary_command,
    DeleteArgs, EntryArgs, EntryKind, ListArgs,
};
