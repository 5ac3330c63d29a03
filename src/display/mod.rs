//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for terminal display,
//! including the register, summaries and reports.

pub mod report;
pub mod transaction;

pub use report::{format_period_report, format_spending_report};
pub use transaction::{
    format_summary, format_transaction_details, format_transaction_register,
    format_transaction_row,
};
