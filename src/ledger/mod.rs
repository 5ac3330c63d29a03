//! The ledger engine
//!
//! [`Ledger`] owns the in-memory transactions in display order (newest first)
//! and is the only thing allowed to change them. Every mutation recomputes the
//! running balances and then tries to bring the backing store back in sync.
//!
//! Storage failures never undo an in-memory change. They are handed back in a
//! [`Persisted`] and leave the ledger [`SyncState::Dirty`] until a later write
//! succeeds.

pub mod filter;
pub mod summary;

pub use filter::{FlowKind, TransactionFilter};
pub use summary::LedgerSummary;

use tracing::{debug, info, warn};

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Money, Transaction};
use crate::storage::{decode_line, encode_line, FileStore, RecordStore};

use filter::contains_ignore_case;

/// Whether the in-memory ledger matches what was last persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Clean,
    Dirty,
}

/// Outcome of loading raw lines into a ledger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadReport {
    pub loaded: usize,
    /// Lines that could not be decoded and were dropped
    pub skipped: usize,
}

/// Result of a mutation that has already been applied in memory
///
/// `storage_error` is set when the follow-up write to the store failed.
#[derive(Debug)]
#[must_use]
pub struct Persisted<T> {
    pub value: T,
    pub storage_error: Option<LedgerError>,
}

impl<T> Persisted<T> {
    fn new(value: T, storage: LedgerResult<()>) -> Self {
        Self {
            value,
            storage_error: storage.err(),
        }
    }

    /// Check if the store accepted the change
    pub fn is_persisted(&self) -> bool {
        self.storage_error.is_none()
    }

    /// Treat a storage failure as an error, discarding the value
    pub fn into_result(self) -> LedgerResult<T> {
        match self.storage_error {
            Some(err) => Err(err),
            None => Ok(self.value),
        }
    }
}

/// Ordered collection of transactions backed by a record store
pub struct Ledger<S: RecordStore = FileStore> {
    /// Display order: index 0 is the newest transaction
    transactions: Vec<Transaction>,
    store: S,
    audit: Option<AuditLogger>,
    state: SyncState,
    last_load: LoadReport,
}

impl<S: RecordStore> Ledger<S> {
    /// Create an empty ledger without reading the store
    pub fn new(store: S) -> Self {
        Self {
            transactions: Vec::new(),
            store,
            audit: None,
            state: SyncState::Clean,
            last_load: LoadReport::default(),
        }
    }

    /// Create a ledger from everything currently in the store
    pub fn open(store: S) -> LedgerResult<Self> {
        let mut ledger = Self::new(store);
        let lines = ledger.store.load_all()?;
        ledger.load(&lines);
        Ok(ledger)
    }

    /// Record every add and delete in the given audit log
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Replace the ledger contents with decoded lines
    ///
    /// Lines are expected oldest first, as they are appended on disk; each
    /// decoded record is placed in front of the previous one. Lines that fail
    /// to decode are skipped and counted.
    pub fn load<I, L>(&mut self, lines: I) -> LoadReport
    where
        I: IntoIterator<Item = L>,
        L: AsRef<str>,
    {
        let mut report = LoadReport::default();
        let mut decoded = Vec::new();

        for line in lines {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            match decode_line(line) {
                Ok(txn) => {
                    decoded.push(txn);
                    report.loaded += 1;
                }
                Err(e) => {
                    warn!("Skipping unreadable ledger line: {}", e);
                    report.skipped += 1;
                }
            }
        }

        decoded.reverse();
        self.transactions = decoded;
        self.recompute_balances();
        self.state = SyncState::Clean;
        self.last_load = report;

        debug!(
            "Loaded {} transactions ({} skipped)",
            report.loaded, report.skipped
        );
        report
    }

    /// Recompute every running balance, oldest to newest
    pub fn recompute_balances(&mut self) {
        let mut running = Money::zero();
        for txn in self.transactions.iter_mut().rev() {
            running += txn.amount();
            txn.set_balance(running);
        }
    }

    /// Add a transaction as the newest entry and return the new balance
    pub fn add_transaction(&mut self, txn: Transaction) -> Persisted<Money> {
        self.transactions.insert(0, txn);
        self.recompute_balances();

        let newest = &self.transactions[0];
        let balance = newest.balance();
        info!("Added transaction: {}", newest);

        let storage = match self.state {
            // A previous write was lost; appending alone would not catch up
            SyncState::Dirty => self.rewrite(),
            SyncState::Clean => {
                self.state = SyncState::Dirty;
                let result = self.store.append_one(&encode_line(newest));
                if result.is_ok() {
                    self.state = SyncState::Clean;
                }
                result
            }
        };
        if let Err(e) = &storage {
            warn!("Transaction added in memory but not saved: {}", e);
        }

        if let Some(audit) = &self.audit {
            let entry = AuditEntry::create(&self.transactions[0], balance);
            if let Err(e) = audit.log(&entry) {
                warn!("Failed to write audit entry: {}", e);
            }
        }

        Persisted::new(balance, storage)
    }

    /// Transactions matching `filter`, in display order
    pub fn filter(&self, filter: &TransactionFilter) -> Vec<&Transaction> {
        let matches = self.transactions.iter().filter(|t| filter.matches(t));
        match filter.limit {
            Some(limit) => matches.take(limit).collect(),
            None => matches.collect(),
        }
    }

    pub fn deposits(&self) -> Vec<&Transaction> {
        self.filter(&TransactionFilter::new().deposits())
    }

    pub fn payments(&self) -> Vec<&Transaction> {
        self.filter(&TransactionFilter::new().payments())
    }

    /// Payments whose category equals `category`, ignoring case
    pub fn by_category(&self, category: &str) -> Vec<&Transaction> {
        self.filter(&TransactionFilter::new().category(category))
    }

    /// Delete the transaction at a 1-based display position
    pub fn delete_by_index(&mut self, index: usize) -> LedgerResult<Persisted<Transaction>> {
        let len = self.transactions.len();
        if index == 0 || index > len {
            return Err(LedgerError::IndexOutOfRange { index, len });
        }

        let removed = self.transactions.remove(index - 1);
        let storage = self.after_delete(&[(index, &removed)]);
        Ok(Persisted::new(removed, storage))
    }

    /// Delete every transaction dated exactly `date`
    pub fn delete_by_date(&mut self, date: &str) -> Persisted<Vec<Transaction>> {
        let date = date.trim();
        self.delete_where(|t| t.date() == date)
    }

    /// Delete every transaction whose vendor contains `term`, ignoring case
    ///
    /// An empty term is rejected rather than matching the whole ledger.
    pub fn delete_by_vendor(&mut self, term: &str) -> LedgerResult<Persisted<Vec<Transaction>>> {
        if term.trim().is_empty() {
            return Err(LedgerError::Validation(
                "Vendor search term may not be empty".into(),
            ));
        }
        Ok(self.delete_where(|t| contains_ignore_case(t.vendor(), term)))
    }

    fn delete_where<F>(&mut self, predicate: F) -> Persisted<Vec<Transaction>>
    where
        F: Fn(&Transaction) -> bool,
    {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.transactions)
            .into_iter()
            .enumerate()
            .partition(|(_, t)| predicate(t));
        self.transactions = kept.into_iter().map(|(_, t)| t).collect();

        if removed.is_empty() {
            // Nothing changed, so the store is left alone
            return Persisted::new(Vec::new(), Ok(()));
        }

        let positioned: Vec<(usize, &Transaction)> =
            removed.iter().map(|(i, t)| (i + 1, t)).collect();
        let storage = self.after_delete(&positioned);

        Persisted::new(removed.into_iter().map(|(_, t)| t).collect(), storage)
    }

    /// Recompute, rewrite the store and audit after records were removed
    fn after_delete(&mut self, removed: &[(usize, &Transaction)]) -> LedgerResult<()> {
        self.recompute_balances();
        self.state = SyncState::Dirty;
        info!("Deleted {} transaction(s)", removed.len());

        let storage = self.rewrite();
        if let Err(e) = &storage {
            warn!("Transactions deleted in memory but file not rewritten: {}", e);
        }

        if let Some(audit) = &self.audit {
            let ending = self.ending_balance();
            let entries: Vec<AuditEntry> = removed
                .iter()
                .map(|(position, txn)| AuditEntry::delete(txn, *position, ending))
                .collect();
            if let Err(e) = audit.log_batch(&entries) {
                warn!("Failed to write audit entries: {}", e);
            }
        }

        storage
    }

    /// Rewrite the whole store from memory
    ///
    /// Lines are written oldest first so the file keeps the same order that
    /// appends produce and a reload yields the same display order.
    fn rewrite(&mut self) -> LedgerResult<()> {
        let lines: Vec<String> = self.transactions.iter().rev().map(encode_line).collect();
        self.store.rewrite_all(&lines)?;
        self.state = SyncState::Clean;
        Ok(())
    }

    /// Write everything to the store, clearing a pending dirty state
    pub fn persist(&mut self) -> LedgerResult<()> {
        self.rewrite()
    }

    /// Totals over the whole ledger
    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_transactions(&self.transactions)
    }

    /// Balance after the newest transaction
    pub fn ending_balance(&self) -> Money {
        self.transactions
            .first()
            .map(Transaction::balance)
            .unwrap_or_default()
    }

    /// All transactions in display order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn sync_state(&self) -> SyncState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == SyncState::Dirty
    }

    /// Counts from the most recent [`Ledger::load`]
    pub fn last_load(&self) -> LoadReport {
        self.last_load
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
