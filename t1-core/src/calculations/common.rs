//! Shared arithmetic helpers for the calculation stages.

use rust_decimal::Decimal;

/// Rounds to the cent using half-up (away from zero) rounding.
///
/// Every stage output is rounded this way before it feeds the next stage.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use t1_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(9227.315)), dec!(9227.32));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// The amount by which `value` exceeds `threshold`, floored at zero.
///
/// This is the shape of every phase-out and clawback base in the pipeline;
/// using it keeps subtractions from ever propagating a negative.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use t1_core::calculations::common::excess_over;
///
/// assert_eq!(excess_over(dec!(100000), dec!(86912)), dec!(13088));
/// assert_eq!(excess_over(dec!(50000), dec!(86912)), dec!(0));
/// ```
pub fn excess_over(value: Decimal, threshold: Decimal) -> Decimal {
    if value > threshold {
        value - threshold
    } else {
        Decimal::ZERO
    }
}
