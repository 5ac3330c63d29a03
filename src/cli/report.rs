//! CLI commands for reports

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_period_report, format_spending_report};
use crate::error::{LedgerError, LedgerResult};
use crate::ledger::{Ledger, TransactionFilter};
use crate::models::draft::{normalize_date, DATE_FORMAT};
use crate::reports::{PeriodReport, ReportPeriod, SpendingReport};
use crate::storage::RecordStore;

/// Arguments for `report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// month-to-date, previous-month, year-to-date, previous-year or spending
    pub kind: String,
    /// Compute calendar periods as of this date instead of today (YYYY-MM-DD)
    #[arg(long)]
    pub as_of: Option<String>,
    /// Spending report start date (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<String>,
    /// Spending report end date (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<String>,
}

/// Handle `report`
pub fn handle_report_command<S: RecordStore>(
    ledger: &Ledger<S>,
    settings: &Settings,
    args: ReportArgs,
) -> LedgerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    if args.kind.trim().eq_ignore_ascii_case("spending") {
        let mut filter = TransactionFilter::new();
        if let Some(from) = &args.from {
            filter = filter.from_date(normalize_date(from)?);
        }
        if let Some(to) = &args.to {
            filter = filter.to_date(normalize_date(to)?);
        }

        let report = SpendingReport::generate(ledger, filter);
        print!("{}", format_spending_report(&report, symbol));
        return Ok(());
    }

    let period = ReportPeriod::parse(&args.kind).ok_or_else(|| {
        LedgerError::Validation(format!(
            "Unknown report '{}'. Use month-to-date, previous-month, year-to-date, previous-year or spending",
            args.kind
        ))
    })?;

    let today = match &args.as_of {
        Some(text) => parse_day(text)?,
        None => Local::now().date_naive(),
    };

    let report = PeriodReport::generate(ledger, period, today);
    print!("{}", format_period_report(&report, symbol));
    Ok(())
}

fn parse_day(text: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", text))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStore;
    use tempfile::TempDir;

    fn args(kind: &str) -> ReportArgs {
        ReportArgs {
            kind: kind.into(),
            as_of: Some("2024-03-15".into()),
            from: None,
            to: None,
        }
    }

    #[test]
    fn test_unknown_report_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(FileStore::new(temp_dir.path().join("t.csv")));

        let err = handle_report_command(&ledger, &Settings::default(), args("weekly"))
            .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_known_reports_run() {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::new(FileStore::new(temp_dir.path().join("t.csv")));
        let settings = Settings::default();

        for kind in ["mtd", "previous-month", "year-to-date", "last-year", "Spending"] {
            handle_report_command(&ledger, &settings, args(kind)).unwrap();
        }
    }

    #[test]
    fn test_bad_as_of_date() {
        assert!(parse_day("15/03/2024").unwrap_err().is_validation());
        assert_eq!(
            parse_day("2024-03-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }
}
