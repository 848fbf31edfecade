use rust_decimal::Decimal;
use serde::Deserialize;

use crate::commute::commuteerror::InvalidInputError;
use crate::math::round::round_half_away_from_zero;

/// Decimal places of a cost.
pub const COST_DIGITS: u32 = 2;

/// Two-tier per-kilometer rate: `base_rate` up to `threshold_km`,
/// `extended_rate` for every kilometer beyond it.
///
/// The default is the German commuting allowance from 2022 on:
/// 0.30 per km for the first 20 km, 0.38 per km above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct AllowanceRates {
    threshold_km: Decimal,
    base_rate: Decimal,
    extended_rate: Decimal
}

impl AllowanceRates {
    pub fn new(threshold_km: Decimal, base_rate: Decimal, extended_rate: Decimal) -> Result<AllowanceRates, InvalidInputError> {
        for value in [threshold_km, base_rate, extended_rate] {
            if value.is_sign_negative() && !value.is_zero() {
                return Err(InvalidInputError::NegativeRate(value));
            }
        }
        Ok(AllowanceRates { threshold_km, base_rate, extended_rate })
    }

    pub fn threshold_km(&self) -> Decimal {
        self.threshold_km
    }

    pub fn base_rate(&self) -> Decimal {
        self.base_rate
    }

    pub fn extended_rate(&self) -> Decimal {
        self.extended_rate
    }

    /// Rejects negative values that slipped in through deserialization.
    pub fn validated(self) -> Result<AllowanceRates, InvalidInputError> {
        AllowanceRates::new(self.threshold_km, self.base_rate, self.extended_rate)
    }

    /// `min(d, T) * R1 + max(0, d - T) * R2`, rounded to two decimals half
    /// away from zero. Fails with `Overflow` when an intermediate value
    /// leaves the `Decimal` range.
    pub fn cost(&self, distance_km: Decimal) -> Result<Decimal, InvalidInputError> {
        if distance_km.is_sign_negative() && !distance_km.is_zero() {
            return Err(InvalidInputError::NegativeDistance(distance_km));
        }
        let overflow = || InvalidInputError::Overflow(distance_km);

        let base = distance_km
            .min(self.threshold_km)
            .checked_mul(self.base_rate)
            .ok_or_else(overflow)?;
        let extended = distance_km
            .checked_sub(self.threshold_km)
            .ok_or_else(overflow)?
            .max(Decimal::ZERO)
            .checked_mul(self.extended_rate)
            .ok_or_else(overflow)?;
        let total = base.checked_add(extended).ok_or_else(overflow)?;
        Ok(round_half_away_from_zero(total, COST_DIGITS))
    }
}

impl Default for AllowanceRates {
    fn default() -> Self {
        AllowanceRates {
            threshold_km: Decimal::new(20, 0),
            base_rate: Decimal::new(30, 2),
            extended_rate: Decimal::new(38, 2)
        }
    }
}

/// Cost of one commute day at the default rates.
pub fn cost(distance_km: Decimal) -> Result<Decimal, InvalidInputError> {
    AllowanceRates::default().cost(distance_km)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn reference_values() {
        assert_eq!(cost(dec("0")).unwrap(), dec("0.00"));
        assert_eq!(cost(dec("20")).unwrap(), dec("6.00"));
        assert_eq!(cost(dec("29")).unwrap(), dec("9.42"));
        assert_eq!(cost(dec("50")).unwrap(), dec("17.40"));
    }

    #[test]
    fn below_threshold_uses_base_rate_only() {
        assert_eq!(cost(dec("12")).unwrap(), dec("3.60"));
        assert_eq!(cost(dec("0.5")).unwrap(), dec("0.15"));
    }

    #[test]
    fn fractional_distance_is_rounded() {
        // 6.00 + 0.5 * 0.38 = 6.19
        assert_eq!(cost(dec("20.5")).unwrap(), dec("6.19"));
        // 6.00 + 0.125 * 0.38 = 6.0475
        assert_eq!(cost(dec("20.125")).unwrap(), dec("6.05"));
        // 0.05 * 0.30 = 0.015, a tie
        assert_eq!(cost(dec("0.05")).unwrap(), dec("0.02"));
    }

    #[test]
    fn negative_distance_is_rejected() {
        assert_eq!(
            cost(dec("-1")),
            Err(InvalidInputError::NegativeDistance(dec("-1")))
        );
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(cost(dec("-0")).unwrap(), dec("0"));
    }

    #[test]
    fn huge_distance_overflows_instead_of_panicking() {
        let rates = AllowanceRates::new(dec("20"), dec("0.30"), dec("1000")).unwrap();
        let distance = dec("1000000000000000000000000000");
        assert_eq!(
            rates.cost(distance),
            Err(InvalidInputError::Overflow(distance))
        );
    }

    #[test]
    fn custom_rates() {
        // flat 0.30 for every kilometer
        let rates = AllowanceRates::new(dec("20"), dec("0.30"), dec("0.30")).unwrap();
        assert_eq!(rates.cost(dec("29")).unwrap(), dec("8.70"));
        assert!(AllowanceRates::new(dec("20"), dec("-0.30"), dec("0.38")).is_err());
    }
}
