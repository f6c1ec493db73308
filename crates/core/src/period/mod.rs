//! Inclusive ranges of calendar quarters.

pub mod error;
pub mod types;

pub use error::PeriodError;
pub use types::{FIRST_QUARTER, LAST_QUARTER, Period, QUARTERS_IN_YEAR};
