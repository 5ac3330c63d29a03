//! Report formatting utilities for terminal output

use super::transaction::{format_summary, format_transaction_register, truncate};
use crate::reports::{PeriodReport, SpendingReport};

const REPORT_WIDTH: usize = 60;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Format a header line with padding
pub fn format_header(title: &str, width: usize) -> String {
    let padding = width.saturating_sub(title.len()) / 2;
    format!("{}{}", " ".repeat(padding), title)
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Format a double separator line
pub fn double_separator(width: usize) -> String {
    "═".repeat(width)
}

/// Format a period report: header, register of matching rows, then totals
pub fn format_period_report(report: &PeriodReport<'_>, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header(&report.period.to_string(), REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format_header(
        &format!("{} to {}", report.start_date, report.end_date),
        REPORT_WIDTH,
    ));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    output.push_str(&format_transaction_register(&report.transactions, symbol));
    output.push('\n');
    output.push_str(&format_summary(&report.summary, symbol));

    output
}

/// Format spending by category, largest first
pub fn format_spending_report(report: &SpendingReport, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format_header("Spending by Category", REPORT_WIDTH));
    output.push('\n');
    output.push_str(&double_separator(REPORT_WIDTH));
    output.push('\n');

    if report.categories.is_empty() {
        output.push_str("No payments found.\n");
        return output;
    }

    output.push_str(&format!(
        "{:<24} {:>6} {:>14} {:>8}\n",
        "Category", "Count", "Spent", "Share"
    ));
    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');

    for entry in &report.categories {
        output.push_str(&format!(
            "{:<24} {:>6} {:>14} {:>8}\n",
            truncate(&entry.category, 24),
            entry.transaction_count,
            entry.total_spending.format_with_symbol(symbol),
            format_percentage(entry.percentage)
        ));
    }

    output.push_str(&separator(REPORT_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{:<24} {:>6} {:>14}\n",
        "Total",
        report.total_transactions,
        report.total_spending.format_with_symbol(symbol)
    ));

    output
}
