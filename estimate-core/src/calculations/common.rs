//! Shared numeric helpers for estimate math.

use rust_decimal::Decimal;

/// Rounds a value to two decimal places, half-up (away from zero at the
/// midpoint), the usual convention for money.
///
/// Stored amounts keep their full precision; this is applied only where a
/// value crosses a display or document boundary.
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::calculations::common::round_currency;
///
/// assert_eq!(round_currency(dec!(17.515)), dec!(17.52));
/// assert_eq!(round_currency(dec!(17.514)), dec!(17.51));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a user-entered amount to zero when negative.
///
/// Quantities, costs, hours and rates on an estimate are specified as
/// non-negative; form input that parses below zero is treated as zero.
pub fn clamp_non_negative(value: Decimal) -> Decimal {
    if value < Decimal::ZERO { Decimal::ZERO } else { value }
}
