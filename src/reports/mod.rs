//! Reports over the ledger
//!
//! Calendar-window reports and spending by category.

pub mod period;
pub mod spending;

pub use period::{PeriodReport, ReportPeriod};
pub use spending::{SpendingByCategory, SpendingReport};
