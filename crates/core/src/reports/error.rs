//! Report error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating reports, building a tax schedule or totalling amounts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Revenue below zero.
    #[error("Revenue cannot be negative: {0}")]
    NegativeRevenue(Decimal),

    /// Costs below zero.
    #[error("Costs cannot be negative: {0}")]
    NegativeCosts(Decimal),

    /// Quarter outside 1..=4.
    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u8),

    /// Report dated after the current year.
    #[error("Report year {year} is after the current year {current}")]
    FutureYear {
        /// Year of the report.
        year: i32,
        /// Current year.
        current: i32,
    },

    /// Report for a quarter of the current year that has not ended yet.
    #[error("Quarter {quarter} of {year} has not finished yet")]
    QuarterNotFinished {
        /// Year of the report.
        year: i32,
        /// Quarter of the report.
        quarter: u8,
    },

    /// Tax schedule brackets are inconsistent.
    #[error("Invalid tax schedule: {0}")]
    InvalidTaxSchedule(String),

    /// A total exceeded the range of `Decimal`.
    #[error("Arithmetic overflow in {context}")]
    Overflow {
        /// Which amount was being computed.
        context: &'static str,
    },
}
