//! Money and percentage aliases with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.

use rust_decimal::Decimal;

/// Monetary amount in the directory's single reporting currency.
pub type Money = Decimal;

/// Percentage value (`7` means 7%).
pub type Percent = Decimal;

/// Expresses `part` as a percentage of `whole`.
///
/// Returns `None` when `whole` is zero instead of an unbounded value.
#[must_use]
pub fn checked_percent_of(part: Money, whole: Money) -> Option<Percent> {
    part.checked_div(whole).map(|ratio| ratio * Decimal::ONE_HUNDRED)
}
