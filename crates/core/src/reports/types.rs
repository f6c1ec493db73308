//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use venturebook_shared::types::{CompanyId, FinancialReportId, Money, Percent};

use super::error::ReportError;
use crate::period::Period;

/// One company's actuals for one quarter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReport {
    /// Report ID.
    pub id: FinancialReportId,
    /// Company the report belongs to.
    pub company_id: CompanyId,
    /// Quarter revenue.
    pub revenue: Money,
    /// Quarter costs.
    pub costs: Money,
    /// Calendar year.
    pub year: i32,
    /// Quarter within the year (1-4).
    pub quarter: u8,
}

impl FinancialReport {
    /// Revenue minus costs for the quarter.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Overflow` if the difference leaves the `Decimal` range.
    pub fn profit(&self) -> Result<Money, ReportError> {
        self.revenue
            .checked_sub(self.costs)
            .ok_or(ReportError::Overflow {
                context: "quarter profit",
            })
    }
}

/// Sums `amount` over `reports` without wrapping or panicking.
fn checked_total(
    reports: &[FinancialReport],
    context: &'static str,
    amount: impl Fn(&FinancialReport) -> Result<Money, ReportError>,
) -> Result<Money, ReportError> {
    reports.iter().try_fold(Decimal::ZERO, |total, report| {
        total
            .checked_add(amount(report)?)
            .ok_or(ReportError::Overflow { context })
    })
}

/// Reports of a period, ordered by year then quarter.
///
/// Totals are recomputed from `reports` on every call and fail with
/// `ReportError::Overflow` instead of panicking on out-of-range sums.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialReportByPeriod {
    /// Period the reports were requested for.
    pub period: Period,
    /// Quarterly reports.
    pub reports: Vec<FinancialReport>,
}

impl FinancialReportByPeriod {
    /// Creates an aggregate over `reports`.
    #[must_use]
    pub const fn new(period: Period, reports: Vec<FinancialReport>) -> Self {
        Self { period, reports }
    }

    /// Aggregate with no reports.
    #[must_use]
    pub const fn empty(period: Period) -> Self {
        Self::new(period, Vec::new())
    }

    /// Sum of quarterly revenue.
    pub fn revenue(&self) -> Result<Money, ReportError> {
        checked_total(&self.reports, "total revenue", |r| Ok(r.revenue))
    }

    /// Sum of quarterly costs.
    pub fn costs(&self) -> Result<Money, ReportError> {
        checked_total(&self.reports, "total costs", |r| Ok(r.costs))
    }

    /// Sum of quarterly profit.
    pub fn profit(&self) -> Result<Money, ReportError> {
        checked_total(&self.reports, "total profit", FinancialReport::profit)
    }

    /// Number of quarterly reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Returns true if there are no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

/// Financial report of a user across all owned companies, with taxes.
///
/// Built once all company reports are taxed; never partially filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedReport {
    /// Raw quarterly reports of every company, in company order.
    pub report: FinancialReportByPeriod,
    /// Taxes over every complete year of every company.
    pub taxes: Money,
    /// Taxes as a percentage of complete-year revenue.
    ///
    /// `None` when no company has complete-year revenue to tax.
    pub tax_load: Option<Percent>,
}

impl ConsolidatedReport {
    /// Period of the report.
    #[must_use]
    pub const fn period(&self) -> &Period {
        &self.report.period
    }

    /// Sum of revenue over all reports.
    pub fn revenue(&self) -> Result<Money, ReportError> {
        self.report.revenue()
    }

    /// Sum of costs over all reports.
    pub fn costs(&self) -> Result<Money, ReportError> {
        self.report.costs()
    }

    /// Sum of profit over all reports.
    pub fn profit(&self) -> Result<Money, ReportError> {
        self.report.profit()
    }

    /// Tax load, treating a missing taxable base as zero.
    #[must_use]
    pub fn tax_load_or_zero(&self) -> Percent {
        self.tax_load.unwrap_or(Decimal::ZERO)
    }
}
