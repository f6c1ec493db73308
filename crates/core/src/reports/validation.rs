//! Validation of incoming quarterly reports.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::error::ReportError;
use super::types::FinancialReport;
use crate::period::{FIRST_QUARTER, LAST_QUARTER};

/// Quarters of `today`'s year that have already ended.
fn finished_quarters(today: NaiveDate) -> u8 {
    // month0 is 0..=11, so the quotient always fits.
    u8::try_from(today.month0() / 3).unwrap_or(0)
}

impl FinancialReport {
    /// Checks that the report can be recorded as of `today`.
    ///
    /// # Errors
    ///
    /// - `ReportError::NegativeRevenue` / `ReportError::NegativeCosts`
    /// - `ReportError::InvalidQuarter` if the quarter is outside 1..=4
    /// - `ReportError::FutureYear` if the year is after `today`'s year
    /// - `ReportError::QuarterNotFinished` for a quarter of the current year that
    ///   has not ended yet
    pub fn validate(&self, today: NaiveDate) -> Result<(), ReportError> {
        if self.revenue < Decimal::ZERO {
            return Err(ReportError::NegativeRevenue(self.revenue));
        }

        if self.costs < Decimal::ZERO {
            return Err(ReportError::NegativeCosts(self.costs));
        }

        if !(FIRST_QUARTER..=LAST_QUARTER).contains(&self.quarter) {
            return Err(ReportError::InvalidQuarter(self.quarter));
        }

        let current = today.year();
        if self.year > current {
            return Err(ReportError::FutureYear {
                year: self.year,
                current,
            });
        }

        if self.year == current && self.quarter > finished_quarters(today) {
            return Err(ReportError::QuarterNotFinished {
                year: self.year,
                quarter: self.quarter,
            });
        }

        Ok(())
    }
}

/// Validates a batch of reports, stopping at the first invalid one.
///
/// # Errors
///
/// Returns the first report's error, paired with its position.
pub fn validate_reports(
    reports: &[FinancialReport],
    today: NaiveDate,
) -> Result<(), (usize, ReportError)> {
    reports
        .iter()
        .enumerate()
        .try_for_each(|(index, report)| report.validate(today).map_err(|e| (index, e)))
}
