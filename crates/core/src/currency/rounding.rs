//! Amount rounding per currency granularity.
//!
//! CRITICAL: Rounding strategy for money:
//! - Round to the currency's minor unit, never to a fixed precision
//! - Default to banker's rounding (round half to even)
//! - Five-subunit currencies round to multiples of 0.2, not to a decimal digit

use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};

use super::types::MinorUnit;

/// Rule for resolving amounts exactly halfway between two representable values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MidpointRounding {
    /// Banker's rounding: 2.5 → 2, 3.5 → 4.
    #[default]
    ToEven,
    /// Commercial rounding: 2.5 → 3, -2.5 → -3.
    AwayFromZero,
}

impl MidpointRounding {
    /// Maps this rule onto the `rust_decimal` strategy.
    #[must_use]
    pub const fn strategy(self) -> RoundingStrategy {
        match self {
            Self::ToEven => RoundingStrategy::MidpointNearestEven,
            Self::AwayFromZero => RoundingStrategy::MidpointAwayFromZero,
        }
    }
}

const FIVE: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Rounds `amount` to the granularity described by `minor_unit`.
///
/// - `Digits(d)` rounds to `d` fractional digits.
/// - `NotApplicable` rounds to a whole number.
/// - `FiveSubunit` scales by five, rounds to an integer and scales back, so
///   the result is always a multiple of 0.2.
///
/// The result carries exactly the currency's display digits as its scale.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use moneta_core::currency::{MidpointRounding, MinorUnit, round_amount};
///
/// let rounded = round_amount(dec!(0.70), MinorUnit::FiveSubunit, MidpointRounding::ToEven);
/// assert_eq!(rounded, dec!(0.8));
/// ```
#[must_use]
pub fn round_amount(amount: Decimal, minor_unit: MinorUnit, rule: MidpointRounding) -> Decimal {
    let strategy = rule.strategy();
    let mut rounded = match minor_unit {
        MinorUnit::Digits(digits) => amount.round_dp_with_strategy(u32::from(digits), strategy),
        MinorUnit::NotApplicable => amount.round_dp_with_strategy(0, strategy),
        MinorUnit::FiveSubunit => match amount.checked_mul(FIVE) {
            Some(scaled) => scaled.round_dp_with_strategy(0, strategy) / FIVE,
            // Anything this large carries no fractional digits, so it is
            // already a multiple of 0.2.
            None => amount,
        },
    };
    rounded.rescale(minor_unit.decimal_digits());
    rounded
}

/// Rounds with banker's rounding.
#[must_use]
pub fn round_to_even(amount: Decimal, minor_unit: MinorUnit) -> Decimal {
    round_amount(amount, minor_unit, MidpointRounding::ToEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0.10), dec!(0.0))]
    #[case(dec!(0.30), dec!(0.4))]
    #[case(dec!(0.50), dec!(0.4))]
    #[case(dec!(0.70), dec!(0.8))]
    #[case(dec!(0.90), dec!(0.8))]
    #[case(dec!(1.10), dec!(1.2))]
    #[case(dec!(0.2), dec!(0.2))]
    #[case(dec!(-0.30), dec!(-0.4))]
    #[case(dec!(12.345), dec!(12.4))]
    fn test_five_subunit_half_even(#[case] raw: Decimal, #[case] expected: Decimal) {
        assert_eq!(round_to_even(raw, MinorUnit::FiveSubunit), expected);
    }

    #[rstest]
    #[case(dec!(0.10), dec!(0.2))]
    #[case(dec!(0.05), dec!(0.0))]
    #[case(dec!(0.30), dec!(0.4))]
    #[case(dec!(0.50), dec!(0.6))]
    #[case(dec!(0.90), dec!(1.0))]
    fn test_five_subunit_away_from_zero(#[case] raw: Decimal, #[case] expected: Decimal) {
        let rounded = round_amount(raw, MinorUnit::FiveSubunit, MidpointRounding::AwayFromZero);
        assert_eq!(rounded, expected);
    }

    #[test]
    fn test_decimal_digits() {
        assert_eq!(round_to_even(dec!(10.005), MinorUnit::Digits(2)), dec!(10.00));
        assert_eq!(round_to_even(dec!(10.015), MinorUnit::Digits(2)), dec!(10.02));
        assert_eq!(
            round_amount(dec!(10.005), MinorUnit::Digits(2), MidpointRounding::AwayFromZero),
            dec!(10.01)
        );
        assert_eq!(round_to_even(dec!(1.23456), MinorUnit::Digits(3)), dec!(1.235));
        assert_eq!(round_to_even(dec!(1.23455), MinorUnit::Digits(4)), dec!(1.2346));
        assert_eq!(round_to_even(dec!(2.5), MinorUnit::Digits(0)), dec!(2));
        assert_eq!(round_to_even(dec!(3.5), MinorUnit::Digits(0)), dec!(4));
    }

    #[test]
    fn test_scale_matches_display_digits() {
        assert_eq!(round_to_even(dec!(12.5), MinorUnit::Digits(2)).to_string(), "12.50");
        assert_eq!(round_to_even(dec!(0.1), MinorUnit::FiveSubunit).to_string(), "0.0");
        assert_eq!(round_to_even(dec!(7), MinorUnit::FiveSubunit).to_string(), "7.0");
        assert_eq!(round_to_even(dec!(7.00), MinorUnit::NotApplicable).to_string(), "7");
    }

    #[test]
    fn test_not_applicable_rounds_to_whole() {
        assert_eq!(round_to_even(dec!(2.5), MinorUnit::NotApplicable), dec!(2));
        assert_eq!(round_to_even(dec!(2.51), MinorUnit::NotApplicable), dec!(3));
        assert_eq!(
            round_amount(dec!(2.5), MinorUnit::NotApplicable, MidpointRounding::AwayFromZero),
            dec!(3)
        );
    }

    #[test]
    fn test_five_subunit_extreme_magnitude() {
        let huge = Decimal::MAX;
        assert_eq!(round_to_even(huge, MinorUnit::FiveSubunit), huge);
    }

    #[test]
    fn test_strategy_mapping() {
        assert_eq!(
            MidpointRounding::ToEven.strategy(),
            RoundingStrategy::MidpointNearestEven
        );
        assert_eq!(
            MidpointRounding::AwayFromZero.strategy(),
            RoundingStrategy::MidpointAwayFromZero
        );
        assert_eq!(MidpointRounding::default(), MidpointRounding::ToEven);
    }
}
