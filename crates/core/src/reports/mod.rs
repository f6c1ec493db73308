//! Quarterly financial reports and their yearly taxation.
//!
//! This module provides pure business logic over per-quarter actuals:
//! - Report value types and period aggregates
//! - Partitioning of a period into complete calendar years
//! - Single-rate progressive tax brackets
//! - Validation of incoming quarterly reports

pub mod error;
pub mod partition;
pub mod tax;
pub mod types;
pub mod validation;


pub use error::ReportError;
pub use partition::find_full_year_reports;
pub use tax::{TaxBracket, TaxSchedule, TaxSummary, YearTax, calculate_taxes};
pub use types::{ConsolidatedReport, FinancialReport, FinancialReportByPeriod};
pub use validation::validate_reports;
