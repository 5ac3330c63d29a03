//! Transaction CLI commands
//!
//! Implements the commands that add, list and delete ledger entries.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_summary, format_transaction_register};
use crate::error::LedgerResult;
use crate::ledger::{Ledger, Persisted, TransactionFilter};
use crate::models::draft::normalize_date;
use crate::models::{Money, Transaction, TransactionDraft};
use crate::storage::RecordStore;

/// Arguments shared by `deposit` and `payment`
#[derive(Args, Debug)]
pub struct EntryArgs {
    /// Amount (e.g., "1500" or "82.50"); the sign is set by the command
    #[arg(allow_hyphen_values = true)]
    pub amount: String,
    /// What the transaction was for
    #[arg(short, long)]
    pub description: String,
    /// Who paid or was paid
    #[arg(short, long)]
    pub vendor: String,
    /// Category name, defaults to the configured default category
    #[arg(short, long)]
    pub category: Option<String>,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub date: Option<String>,
    /// Transaction time (HH:MM or HH:MM:SS), defaults to now
    #[arg(long)]
    pub time: Option<String>,
}

/// Arguments for `list`
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Only deposits
    #[arg(long, conflicts_with = "payments")]
    pub deposits: bool,
    /// Only payments
    #[arg(long)]
    pub payments: bool,
    /// Payments in this category (case-insensitive)
    #[arg(short, long)]
    pub category: Option<String>,
    /// Start date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End date (YYYY-MM-DD), inclusive
    #[arg(long)]
    pub to: Option<String>,
    /// Description contains this text
    #[arg(short, long)]
    pub description: Option<String>,
    /// Vendor contains this text
    #[arg(short, long)]
    pub vendor: Option<String>,
    /// Exact signed amount (e.g., "-200.00")
    #[arg(short, long, allow_hyphen_values = true)]
    pub amount: Option<String>,
    /// Number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for `delete`; exactly one selector is required
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct DeleteArgs {
    /// 1-based position as shown by `list` without filters
    #[arg(long)]
    pub index: Option<usize>,
    /// Delete every transaction on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,
    /// Delete every transaction whose vendor contains this text
    #[arg(long)]
    pub vendor: Option<String>,
}

/// Which way money moves for a new entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Payment,
}

/// Handle `deposit` and `payment`
pub fn handle_entry_command<S: RecordStore>(
    ledger: &mut Ledger<S>,
    settings: &Settings,
    kind: EntryKind,
    args: EntryArgs,
) -> LedgerResult<()> {
    let mut draft = TransactionDraft::new(args.description, args.vendor)
        .category(args.category.unwrap_or_else(|| settings.default_category.clone()));
    if let Some(date) = args.date {
        draft = draft.date(date);
    }
    if let Some(time) = args.time {
        draft = draft.time(time);
    }

    let txn = match kind {
        EntryKind::Deposit => draft.into_deposit(&args.amount)?,
        EntryKind::Payment => draft.into_payment(&args.amount)?,
    };

    let label = match kind {
        EntryKind::Deposit => "deposit",
        EntryKind::Payment => "payment",
    };
    let summary = txn.to_string();

    let result = ledger.add_transaction(txn);
    warn_if_unsaved(&result);

    println!("Added {}: {}", label, summary);
    println!(
        "Balance: {}",
        result.value.format_with_symbol(&settings.currency_symbol)
    );
    Ok(())
}

/// Build the ledger filter described by `list` arguments
pub fn build_filter(args: ListArgs) -> LedgerResult<TransactionFilter> {
    let mut filter = TransactionFilter::new();

    if args.deposits {
        filter = filter.deposits();
    }
    if args.payments {
        filter = filter.payments();
    }
    if let Some(category) = args.category {
        filter = filter.category(category);
    }
    if let Some(from) = args.from {
        filter = filter.from_date(normalize_date(&from)?);
    }
    if let Some(to) = args.to {
        filter = filter.to_date(normalize_date(&to)?);
    }
    if let Some(term) = args.description {
        filter = filter.description(term);
    }
    if let Some(term) = args.vendor {
        filter = filter.vendor(term);
    }
    if let Some(amount) = args.amount {
        filter = filter.amount(Money::parse(&amount)?);
    }
    if let Some(limit) = args.limit {
        filter = filter.limit(limit);
    }

    Ok(filter)
}

/// Handle `list`
pub fn handle_list_command<S: RecordStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: ListArgs,
) -> LedgerResult<()> {
    let filter = build_filter(args)?;
    let transactions = ledger.filter(&filter);

    print!(
        "{}",
        format_transaction_register(&transactions, &settings.currency_symbol)
    );
    println!(
        "\nShowing {} of {} transactions",
        transactions.len(),
        ledger.len()
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete_command<S: RecordStore>(
    ledger: &mut Ledger<S>,
    args: DeleteArgs,
) -> LedgerResult<()> {
    let removed: Vec<Transaction> = if let Some(index) = args.index {
        let result = ledger.delete_by_index(index)?;
        warn_if_unsaved(&result);
        vec![result.value]
    } else if let Some(date) = args.date {
        let result = ledger.delete_by_date(&date);
        warn_if_unsaved(&result);
        result.value
    } else if let Some(vendor) = args.vendor {
        let result = ledger.delete_by_vendor(&vendor)?;
        warn_if_unsaved(&result);
        result.value
    } else {
        Vec::new()
    };

    if removed.is_empty() {
        println!("No matching transactions; nothing deleted.");
        return Ok(());
    }

    println!("Deleted {} transaction(s):", removed.len());
    for txn in &removed {
        println!("  {}", txn);
    }
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command<S: RecordStore>(ledger: &Ledger<S>, settings: &Settings) {
    print!(
        "{}",
        format_summary(&ledger.summary(), &settings.currency_symbol)
    );
}

/// Print a warning when a change was applied but could not be saved
pub fn warn_if_unsaved<T>(result: &Persisted<T>) {
    if let Some(e) = &result.storage_error {
        eprintln!("Warning: change applied but not saved: {}", e);
    }
}
