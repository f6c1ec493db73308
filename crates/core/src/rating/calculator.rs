//! Entrepreneur rating formula.

use rust_decimal::Decimal;
use venturebook_shared::types::Money;

use super::error::RatingError;

/// Averages the normalized industry weight and the profit margin.
///
/// `rating = (cost / max_cost + profit / revenue) / 2`
///
/// `cost / max_cost` lies in `[0, 1]` when `max_cost` is the true maximum of
/// non-negative weights. The margin is unbounded above and negative for a loss.
///
/// # Errors
///
/// Returns `RatingError::DivisionByZero` when `max_cost` or `revenue` is zero.
pub fn calc_rating(
    profit: Money,
    revenue: Money,
    cost: Money,
    max_cost: Money,
) -> Result<Decimal, RatingError> {
    let industry_weight = cost
        .checked_div(max_cost)
        .ok_or(RatingError::DivisionByZero {
            context: "activity field cost / max cost",
        })?;
    let margin = profit
        .checked_div(revenue)
        .ok_or(RatingError::DivisionByZero {
            context: "profit margin",
        })?;

    Ok((industry_weight + margin) / Decimal::TWO)
}
