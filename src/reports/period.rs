//! Period Report
//!
//! Transactions and totals for a calendar window relative to a given day:
//! month to date, previous month, year to date and previous year.

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;

use crate::ledger::{Ledger, LedgerSummary, TransactionFilter};
use crate::models::draft::DATE_FORMAT;
use crate::models::Transaction;
use crate::storage::RecordStore;

/// Predefined reporting windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    MonthToDate,
    PreviousMonth,
    YearToDate,
    PreviousYear,
}

impl ReportPeriod {
    pub const ALL: [ReportPeriod; 4] = [
        Self::MonthToDate,
        Self::PreviousMonth,
        Self::YearToDate,
        Self::PreviousYear,
    ];

    /// Parse a period name such as "month-to-date" or "mtd"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "month-to-date" | "mtd" => Some(Self::MonthToDate),
            "previous-month" | "last-month" => Some(Self::PreviousMonth),
            "year-to-date" | "ytd" => Some(Self::YearToDate),
            "previous-year" | "last-year" => Some(Self::PreviousYear),
            _ => None,
        }
    }

    /// Inclusive date bounds of this window as seen from `today`
    pub fn range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let month_start = today - Duration::days(i64::from(today.day0()));
        let year_start = today - Duration::days(i64::from(today.ordinal0()));

        match self {
            Self::MonthToDate => (month_start, today),
            Self::PreviousMonth => {
                let end = month_start - Duration::days(1);
                (end - Duration::days(i64::from(end.day0())), end)
            }
            Self::YearToDate => (year_start, today),
            Self::PreviousYear => {
                let end = year_start - Duration::days(1);
                (end - Duration::days(i64::from(end.ordinal0())), end)
            }
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthToDate => write!(f, "Month to Date"),
            Self::PreviousMonth => write!(f, "Previous Month"),
            Self::YearToDate => write!(f, "Year to Date"),
            Self::PreviousYear => write!(f, "Previous Year"),
        }
    }
}

/// Transactions falling inside one reporting window
#[derive(Debug, Clone)]
pub struct PeriodReport<'a> {
    pub period: ReportPeriod,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Matching transactions in display order
    pub transactions: Vec<&'a Transaction>,
    /// Totals over the window; the ending balance is the balance after its newest entry
    pub summary: LedgerSummary,
}

impl<'a> PeriodReport<'a> {
    /// Generate the report for `period` as seen from `today`
    pub fn generate<S: RecordStore>(
        ledger: &'a Ledger<S>,
        period: ReportPeriod,
        today: NaiveDate,
    ) -> Self {
        let (start_date, end_date) = period.range(today);
        let filter = TransactionFilter::new().date_range(
            start_date.format(DATE_FORMAT).to_string(),
            end_date.format(DATE_FORMAT).to_string(),
        );

        let transactions = ledger.filter(&filter);
        let summary = LedgerSummary::from_transactions(transactions.iter().copied());

        Self {
            period,
            start_date,
            end_date,
            transactions,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LedgerResult;
    use crate::models::Money;

    struct NullStore;

    impl RecordStore for NullStore {
        fn load_all(&self) -> LedgerResult<Vec<String>> {
            Ok(Vec::new())
        }
        fn append_one(&mut self, _line: &str) -> LedgerResult<()> {
            Ok(())
        }
        fn rewrite_all(&mut self, _lines: &[String]) -> LedgerResult<()> {
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse() {
        assert_eq!(ReportPeriod::parse("mtd"), Some(ReportPeriod::MonthToDate));
        assert_eq!(
            ReportPeriod::parse("Previous_Month"),
            Some(ReportPeriod::PreviousMonth)
        );
        assert_eq!(ReportPeriod::parse("ytd"), Some(ReportPeriod::YearToDate));
        assert_eq!(
            ReportPeriod::parse("last-year"),
            Some(ReportPeriod::PreviousYear)
        );
        assert_eq!(ReportPeriod::parse("fortnight"), None);
    }

    #[test]
    fn test_ranges() {
        let today = date(2024, 3, 15);

        assert_eq!(
            ReportPeriod::MonthToDate.range(today),
            (date(2024, 3, 1), today)
        );
        assert_eq!(
            ReportPeriod::PreviousMonth.range(today),
            (date(2024, 2, 1), date(2024, 2, 29))
        );
        assert_eq!(
            ReportPeriod::YearToDate.range(today),
            (date(2024, 1, 1), today)
        );
        assert_eq!(
            ReportPeriod::PreviousYear.range(today),
            (date(2023, 1, 1), date(2023, 12, 31))
        );
    }

    #[test]
    fn test_previous_month_in_january() {
        assert_eq!(
            ReportPeriod::PreviousMonth.range(date(2024, 1, 10)),
            (date(2023, 12, 1), date(2023, 12, 31))
        );
    }

    #[test]
    fn test_generate() {
        let mut ledger = Ledger::new(NullStore);
        for (d, cents) in [
            ("2023-12-31", 100000),
            ("2024-02-10", -20000),
            ("2024-03-01", 5000),
            ("2024-03-14", -1500),
        ] {
            let _ = ledger.add_transaction(Transaction::new(
                d,
                "12:00:00",
                "t",
                "v",
                Money::from_cents(cents),
            ));
        }

        let today = date(2024, 3, 15);

        let mtd = PeriodReport::generate(&ledger, ReportPeriod::MonthToDate, today);
        assert_eq!(mtd.transactions.len(), 2);
        assert_eq!(mtd.summary.deposits, Money::from_cents(5000));
        assert_eq!(mtd.summary.payments, Money::from_cents(1500));
        assert_eq!(mtd.summary.ending_balance, Money::from_cents(83500));

        let prev = PeriodReport::generate(&ledger, ReportPeriod::PreviousMonth, today);
        assert_eq!(prev.transactions.len(), 1);
        assert_eq!(prev.summary.ending_balance, Money::from_cents(80000));

        let last_year = PeriodReport::generate(&ledger, ReportPeriod::PreviousYear, today);
        assert_eq!(last_year.transactions.len(), 1);
        assert_eq!(last_year.transactions[0].date(), "2023-12-31");
    }
}
