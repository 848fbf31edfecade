use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to `digits` decimal places, ties away from zero
/// (`0.125 -> 0.13`, `-0.125 -> -0.13`).
#[inline]
pub fn round_half_away_from_zero(x: Decimal, digits: u32) -> Decimal {
    x.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero)
}
