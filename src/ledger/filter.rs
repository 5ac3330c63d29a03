//! Search criteria over ledger transactions

use crate::models::{Money, Transaction};

/// Restrict results to one direction of money flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    /// Positive amounts only
    Deposits,
    /// Negative amounts only
    Payments,
}

/// Options for filtering transactions
///
/// All criteria are combined with AND. Text matches ignore case. Date bounds
/// are inclusive and compared as `YYYY-MM-DD` text.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<FlowKind>,
    /// Exact category match; implies payments only
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Substring of the description
    pub description: Option<String>,
    /// Substring of the vendor
    pub vendor: Option<String>,
    /// Exact amount
    pub amount: Option<Money>,
    /// Maximum number of transactions to return
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn deposits(mut self) -> Self {
        self.kind = Some(FlowKind::Deposits);
        self
    }

    pub fn payments(mut self) -> Self {
        self.kind = Some(FlowKind::Payments);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by inclusive date range
    pub fn date_range(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self.end_date = Some(end.into());
        self
    }

    pub fn from_date(mut self, start: impl Into<String>) -> Self {
        self.start_date = Some(start.into());
        self
    }

    pub fn to_date(mut self, end: impl Into<String>) -> Self {
        self.end_date = Some(end.into());
        self
    }

    pub fn description(mut self, term: impl Into<String>) -> Self {
        self.description = Some(term.into());
        self
    }

    pub fn vendor(mut self, term: impl Into<String>) -> Self {
        self.vendor = Some(term.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Check whether a single transaction satisfies every criterion
    ///
    /// `limit` is not considered here.
    pub fn matches(&self, txn: &Transaction) -> bool {
        match self.kind {
            Some(FlowKind::Deposits) if !txn.is_deposit() => return false,
            Some(FlowKind::Payments) if !txn.is_payment() => return false,
            _ => {}
        }

        if let Some(category) = &self.category {
            if !txn.is_payment() || !eq_ignore_case(txn.category(), category) {
                return false;
            }
        }

        if let Some(start) = &self.start_date {
            if txn.date() < start.as_str() {
                return false;
            }
        }
        if let Some(end) = &self.end_date {
            if txn.date() > end.as_str() {
                return false;
            }
        }

        if let Some(term) = &self.description {
            if !contains_ignore_case(txn.description(), term) {
                return false;
            }
        }
        if let Some(term) = &self.vendor {
            if !contains_ignore_case(txn.vendor(), term) {
                return false;
            }
        }

        if let Some(amount) = self.amount {
            if txn.amount() != amount {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring test
pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.trim().to_lowercase())
}

/// Case-insensitive equality, folding the same way as [`contains_ignore_case`]
pub(crate) fn eq_ignore_case(value: &str, wanted: &str) -> bool {
    value.to_lowercase() == wanted.trim().to_lowercase()
}
