//! Period type.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// First quarter of a calendar year.
pub const FIRST_QUARTER: u8 = 1;
/// Last quarter of a calendar year.
pub const LAST_QUARTER: u8 = 4;
/// Number of quarters in a calendar year.
pub const QUARTERS_IN_YEAR: u8 = 4;

/// Inclusive range of `(year, quarter)` pairs.
///
/// Always satisfies `start <= end` and quarters in 1..=4; the only way to obtain
/// a `Period` is through a validating constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PeriodBounds")]
pub struct Period {
    start_year: i32,
    start_quarter: u8,
    end_year: i32,
    end_quarter: u8,
}

#[derive(Deserialize)]
struct PeriodBounds {
    start_year: i32,
    start_quarter: u8,
    end_year: i32,
    end_quarter: u8,
}

impl TryFrom<PeriodBounds> for Period {
    type Error = PeriodError;

    fn try_from(b: PeriodBounds) -> Result<Self, Self::Error> {
        Self::new(b.start_year, b.start_quarter, b.end_year, b.end_quarter)
    }
}

impl Period {
    /// Builds a period, validating quarter numbers and ordering.
    ///
    /// # Errors
    ///
    /// - `PeriodError::InvalidQuarter` if either quarter is outside 1..=4
    /// - `PeriodError::EndBeforeStart` if the end precedes the start
    pub fn new(
        start_year: i32,
        start_quarter: u8,
        end_year: i32,
        end_quarter: u8,
    ) -> Result<Self, PeriodError> {
        for quarter in [start_quarter, end_quarter] {
            if !(FIRST_QUARTER..=LAST_QUARTER).contains(&quarter) {
                return Err(PeriodError::InvalidQuarter(quarter));
            }
        }

        if (end_year, end_quarter) < (start_year, start_quarter) {
            return Err(PeriodError::EndBeforeStart {
                start_year,
                start_quarter,
                end_year,
                end_quarter,
            });
        }

        Ok(Self {
            start_year,
            start_quarter,
            end_year,
            end_quarter,
        })
    }

    /// All four quarters of `year`.
    #[must_use]
    pub const fn full_year(year: i32) -> Self {
        Self {
            start_year: year,
            start_quarter: FIRST_QUARTER,
            end_year: year,
            end_quarter: LAST_QUARTER,
        }
    }

    /// The calendar year before the one containing `today`.
    #[must_use]
    pub fn previous_full_year(today: NaiveDate) -> Self {
        Self::full_year(today.year() - 1)
    }

    /// First year of the period.
    #[must_use]
    pub const fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Quarter of the first year where the period starts.
    #[must_use]
    pub const fn start_quarter(&self) -> u8 {
        self.start_quarter
    }

    /// Last year of the period.
    #[must_use]
    pub const fn end_year(&self) -> i32 {
        self.end_year
    }

    /// Quarter of the last year where the period ends.
    #[must_use]
    pub const fn end_quarter(&self) -> u8 {
        self.end_quarter
    }

    /// Calendar years touched by the period.
    #[must_use]
    pub fn years(&self) -> RangeInclusive<i32> {
        self.start_year..=self.end_year
    }

    /// In-scope quarter range of `year`, or `None` when the year is outside the period.
    #[must_use]
    pub fn quarter_span(&self, year: i32) -> Option<(u8, u8)> {
        if !self.years().contains(&year) {
            return None;
        }
        let start = if year == self.start_year {
            self.start_quarter
        } else {
            FIRST_QUARTER
        };
        let end = if year == self.end_year {
            self.end_quarter
        } else {
            LAST_QUARTER
        };
        Some((start, end))
    }

    /// Returns true when all four quarters of `year` fall inside the period.
    #[must_use]
    pub fn covers_full_year(&self, year: i32) -> bool {
        self.quarter_span(year) == Some((FIRST_QUARTER, LAST_QUARTER))
    }

    /// Returns true when `(year, quarter)` falls inside the period.
    #[must_use]
    pub fn contains(&self, year: i32, quarter: u8) -> bool {
        self.quarter_span(year)
            .is_some_and(|(start, end)| (start..=end).contains(&quarter))
    }

    /// Quarters of the period in chronological order.
    pub fn quarters(&self) -> impl Iterator<Item = (i32, u8)> {
        let period = *self;
        period.years().flat_map(move |year| {
            let (start, end) = period
                .quarter_span(year)
                .unwrap_or((FIRST_QUARTER, LAST_QUARTER));
            (start..=end).map(move |quarter| (year, quarter))
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}Q{}..{}Q{}",
            self.start_year, self.start_quarter, self.end_year, self.end_quarter
        )
    }
}
