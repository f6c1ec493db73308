//! Yearly tax on complete-year profit.
//!
//! A single bracket rate applies to the whole annual profit; this is not a
//! marginal schedule.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use venturebook_shared::config::TaxBracketConfig;
use venturebook_shared::types::{Money, Percent};

use super::error::ReportError;
use super::types::FinancialReportByPeriod;
use crate::period::QUARTERS_IN_YEAR;

/// One bracket: annual profits below `below` are taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive upper bound; `None` for the open-ended top bracket.
    pub below: Option<Money>,
    /// Rate in percent.
    pub rate: Percent,
}

impl TaxBracket {
    /// Bracket for profits strictly below `bound`.
    #[must_use]
    pub const fn below(bound: Money, rate: Percent) -> Self {
        Self {
            below: Some(bound),
            rate,
        }
    }

    /// Open-ended top bracket.
    #[must_use]
    pub const fn top(rate: Percent) -> Self {
        Self { below: None, rate }
    }

    fn applies_to(&self, profit: Money) -> bool {
        self.below.is_none_or(|bound| profit < bound)
    }
}

/// Ordered tax brackets ending with an open-ended bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
}

impl TaxSchedule {
    /// The standard schedule.
    ///
    /// | Annual profit            | Rate |
    /// |--------------------------|------|
    /// | below 10,000,000         | 4%   |
    /// | below 50,000,000         | 7%   |
    /// | below 150,000,000        | 13%  |
    /// | below 500,000,000        | 20%  |
    /// | 500,000,000 and above    | 30%  |
    #[must_use]
    pub fn standard() -> Self {
        Self {
            brackets: vec![
                TaxBracket::below(dec!(10000000), dec!(4)),
                TaxBracket::below(dec!(50000000), dec!(7)),
                TaxBracket::below(dec!(150000000), dec!(13)),
                TaxBracket::below(dec!(500000000), dec!(20)),
                TaxBracket::top(dec!(30)),
            ],
        }
    }

    /// Builds a schedule from explicit brackets.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::InvalidTaxSchedule` if the list is empty, bounds are
    /// not strictly ascending, only the last bracket is open-ended, or a rate is
    /// negative.
    pub fn from_brackets(brackets: Vec<TaxBracket>) -> Result<Self, ReportError> {
        let Some((last, bounded)) = brackets.split_last() else {
            return Err(ReportError::InvalidTaxSchedule(
                "at least one bracket is required".to_string(),
            ));
        };

        if last.below.is_some() {
            return Err(ReportError::InvalidTaxSchedule(
                "last bracket must be open-ended".to_string(),
            ));
        }

        let mut previous: Option<Money> = None;
        for bracket in bounded {
            let Some(bound) = bracket.below else {
                return Err(ReportError::InvalidTaxSchedule(
                    "only the last bracket may be open-ended".to_string(),
                ));
            };
            if previous.is_some_and(|p| bound <= p) {
                return Err(ReportError::InvalidTaxSchedule(format!(
                    "bracket bound {bound} is not above the previous one"
                )));
            }
            previous = Some(bound);
        }

        if let Some(bracket) = brackets.iter().find(|b| b.rate.is_sign_negative()) {
            return Err(ReportError::InvalidTaxSchedule(format!(
                "rate {} is negative",
                bracket.rate
            )));
        }

        Ok(Self { brackets })
    }

    /// Builds a schedule from configuration entries.
    ///
    /// # Errors
    ///
    /// Same as [`TaxSchedule::from_brackets`].
    pub fn from_config(entries: &[TaxBracketConfig]) -> Result<Self, ReportError> {
        Self::from_brackets(
            entries
                .iter()
                .map(|e| TaxBracket {
                    below: e.below,
                    rate: e.rate_percent,
                })
                .collect(),
        )
    }

    /// Brackets in ascending order.
    #[must_use]
    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Rate in percent applied to an annual `profit`.
    ///
    /// Negative profit falls into the lowest bracket.
    #[must_use]
    pub fn rate_for(&self, profit: Money) -> Percent {
        self.brackets
            .iter()
            .find(|b| b.applies_to(profit))
            .map_or(Decimal::ZERO, |b| b.rate)
    }

    /// Tax owed on an annual `profit`.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::Overflow` when `profit * rate` leaves the `Decimal` range.
    pub fn tax_for(&self, profit: Money) -> Result<Money, ReportError> {
        profit
            .checked_mul(self.rate_for(profit))
            .map(|scaled| scaled / Decimal::ONE_HUNDRED)
            .ok_or(ReportError::Overflow {
                context: "annual tax",
            })
    }
}

impl Default for TaxSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Tax computed for one complete year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearTax {
    /// Calendar year.
    pub year: i32,
    /// Annual profit.
    pub profit: Money,
    /// Annual revenue.
    pub revenue: Money,
    /// Bracket rate in percent.
    pub rate: Percent,
    /// Tax owed.
    pub taxes: Money,
}

/// Taxes across complete years.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSummary {
    /// Per-year breakdown in ascending year order.
    pub years: Vec<YearTax>,
    /// Sum of taxes.
    pub total_taxes: Money,
    /// Sum of revenue of the taxed years.
    pub total_revenue: Money,
}

/// Taxes every year of `full_years` that has exactly four quarterly reports.
///
/// Years with fewer reports carry no tax liability and are skipped.
///
/// # Errors
///
/// Returns `ReportError::Overflow` if a yearly total, a tax amount or a running
/// sum leaves the `Decimal` range.
pub fn calculate_taxes(
    full_years: &BTreeMap<i32, FinancialReportByPeriod>,
    schedule: &TaxSchedule,
) -> Result<TaxSummary, ReportError> {
    let overflow = |context: &'static str| ReportError::Overflow { context };
    let mut summary = TaxSummary::default();

    for (&year, bucket) in full_years {
        if bucket.len() != usize::from(QUARTERS_IN_YEAR) {
            continue;
        }

        let profit = bucket.profit()?;
        let revenue = bucket.revenue()?;
        if profit.is_sign_negative() {
            tracing::warn!(year, %profit, "negative annual profit taxed at the lowest bracket");
        }

        let rate = schedule.rate_for(profit);
        let taxes = schedule.tax_for(profit)?;

        summary.total_taxes = summary
            .total_taxes
            .checked_add(taxes)
            .ok_or_else(|| overflow("total taxes"))?;
        summary.total_revenue = summary
            .total_revenue
            .checked_add(revenue)
            .ok_or_else(|| overflow("total taxable revenue"))?;
        summary.years.push(YearTax {
            year,
            profit,
            revenue,
            rate,
            taxes,
        });
    }

    Ok(summary)
}
