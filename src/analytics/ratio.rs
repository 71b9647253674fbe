//! Ratio helpers shared by the aggregators.
//!
//! Every ratio on the dashboard is rounded to two decimal places with
//! midpoints rounded away from zero, and every ratio with a zero
//! denominator is zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places KPI ratios are rounded to.
pub const RATIO_DECIMAL_PLACES: u32 = 2;

fn round(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns `part / whole * 100`, rounded, or zero when `whole` is zero.
///
/// # Example
///
/// ```
/// use hr_dashboard::analytics::percentage;
/// use rust_decimal::Decimal;
///
/// assert_eq!(percentage(8, 10), Decimal::new(80, 0));
/// assert_eq!(percentage(1, 3), Decimal::new(3333, 2));
/// assert_eq!(percentage(5, 0), Decimal::ZERO);
/// ```
pub fn percentage(part: u64, whole: u64) -> Decimal {
    if whole == 0 {
        return Decimal::ZERO;
    }
    round(Decimal::from(part) * Decimal::from(100) / Decimal::from(whole))
}

/// Returns `total / count`, rounded, or zero when `count` is zero.
///
/// # Example
///
/// ```
/// use hr_dashboard::analytics::average;
/// use rust_decimal::Decimal;
///
/// assert_eq!(average(6, 3), Decimal::new(2, 0));
/// assert_eq!(average(7, 3), Decimal::new(233, 2));
/// assert_eq!(average(0, 0), Decimal::ZERO);
/// ```
pub fn average(total: u64, count: u64) -> Decimal {
    if count == 0 {
        return Decimal::ZERO;
    }
    round(Decimal::from(total) / Decimal::from(count))
}
