//! Period error types.

use thiserror::Error;

/// Errors raised while building a [`Period`](super::Period).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Quarter outside 1..=4.
    #[error("Quarter must be between 1 and 4, got {0}")]
    InvalidQuarter(u8),

    /// End of the period precedes its start.
    #[error("Period end {end_year} Q{end_quarter} is before start {start_year} Q{start_quarter}")]
    EndBeforeStart {
        /// Start year.
        start_year: i32,
        /// Start quarter.
        start_quarter: u8,
        /// End year.
        end_year: i32,
        /// End quarter.
        end_quarter: u8,
    },
}
