//! Spending Report
//!
//! Aggregates payments by category.

use std::collections::HashMap;

use crate::ledger::{Ledger, TransactionFilter};
use crate::models::Money;
use crate::storage::RecordStore;

/// Spending for one category
#[derive(Debug, Clone, PartialEq)]
pub struct SpendingByCategory {
    /// Category name as first seen in display order
    pub category: String,
    /// Total spending (positive magnitude)
    pub total_spending: Money,
    pub transaction_count: usize,
    /// Percentage of total spending
    pub percentage: f64,
}

/// Spending Report
#[derive(Debug, Clone, Default)]
pub struct SpendingReport {
    /// Categories ordered by total spending, largest first
    pub categories: Vec<SpendingByCategory>,
    /// Total spending across all categories (positive magnitude)
    pub total_spending: Money,
    pub total_transactions: usize,
}

impl SpendingReport {
    /// Generate a spending report over payments matching `filter`
    ///
    /// The filter is narrowed to payments; category names are grouped
    /// without regard to case.
    pub fn generate<S: RecordStore>(ledger: &Ledger<S>, filter: TransactionFilter) -> Self {
        let payments = ledger.filter(&filter.payments());

        let mut index: HashMap<String, usize> = HashMap::new();
        let mut categories: Vec<SpendingByCategory> = Vec::new();
        let mut total_spending = Money::zero();

        for txn in &payments {
            let key = txn.category().to_lowercase();
            let slot = *index.entry(key).or_insert_with(|| {
                categories.push(SpendingByCategory {
                    category: txn.category().to_string(),
                    total_spending: Money::zero(),
                    transaction_count: 0,
                    percentage: 0.0,
                });
                categories.len() - 1
            });

            let entry = &mut categories[slot];
            entry.total_spending += txn.amount().abs();
            entry.transaction_count += 1;
            total_spending += txn.amount().abs();
        }

        if !total_spending.is_zero() {
            for entry in &mut categories {
                entry.percentage =
                    entry.total_spending.as_f64() / total_spending.as_f64() * 100.0;
            }
        }

        categories.sort_by(|a, b| {
            b.total_spending
                .cmp(&a.total_spending)
                .then_with(|| a.category.cmp(&b.category))
        });

        Self {
            categories,
            total_spending,
            total_transactions: payments.len(),
        }
    }
}
