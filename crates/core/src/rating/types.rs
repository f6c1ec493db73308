//! Rating data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use venturebook_shared::config::RatingConfig;
use venturebook_shared::types::{Money, UserId};

use super::error::RatingError;
use crate::directory::Company;
use crate::period::Period;
use crate::reports::TaxSchedule;

/// Tunables of the rating service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingSettings {
    /// Maximum number of per-company report fetches in flight.
    pub fetch_concurrency: usize,
    /// Tax brackets applied to complete years.
    pub tax_schedule: TaxSchedule,
}

impl Default for RatingSettings {
    fn default() -> Self {
        Self {
            fetch_concurrency: 4,
            tax_schedule: TaxSchedule::standard(),
        }
    }
}

impl RatingSettings {
    /// Builds settings from application configuration.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::Report` when the configured tax brackets are invalid.
    pub fn from_config(config: &RatingConfig) -> Result<Self, RatingError> {
        let tax_schedule = match &config.tax_brackets {
            Some(brackets) => TaxSchedule::from_config(brackets)?,
            None => TaxSchedule::standard(),
        };
        Ok(Self {
            fetch_concurrency: config.fetch_concurrency.max(1),
            tax_schedule,
        })
    }
}

/// Entrepreneur rating with the inputs it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRating {
    /// Rated user.
    pub user_id: UserId,
    /// Period the rating covers.
    pub period: Period,
    /// Final score.
    pub rating: Decimal,
    /// Profit across all owned companies.
    pub profit: Money,
    /// Revenue across all owned companies.
    pub revenue: Money,
    /// Company with the greatest profit.
    pub most_profitable_company: Company,
    /// Activity field weight of that company.
    pub cost: Money,
    /// Largest activity field weight.
    pub max_cost: Money,
}
