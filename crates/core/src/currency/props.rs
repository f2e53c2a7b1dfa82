//! Property-based tests for rounding and the registry.
//!
//! - Rounding is idempotent for every catalog currency
//! - Five-subunit results are multiples of 0.2
//! - Rounded amounts never carry more digits than the currency displays
//! - Registry add/get/remove behaves like a set of keys

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::builder::CurrencyBuilder;
use super::catalog::CATALOG;
use super::registry::CurrencyRegistry;
use super::rounding::{MidpointRounding, round_amount};
use super::types::MinorUnit;

/// Strategy to generate amounts with up to 6 fractional digits (±10,000,000).
fn raw_amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 6))
}

/// Strategy to pick any catalog minor unit.
fn catalog_minor_unit() -> impl Strategy<Value = MinorUnit> {
    (0..CATALOG.len()).prop_map(|i| CATALOG[i].minor_unit)
}

fn midpoint_rule() -> impl Strategy<Value = MidpointRounding> {
    prop_oneof![
        Just(MidpointRounding::ToEven),
        Just(MidpointRounding::AwayFromZero)
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // =========================================================================
    // Rounding
    // =========================================================================

    /// Rounding an already rounded amount changes nothing.
    #[test]
    fn prop_rounding_is_idempotent(
        amount in raw_amount(),
        minor_unit in catalog_minor_unit(),
        rule in midpoint_rule(),
    ) {
        let once = round_amount(amount, minor_unit, rule);
        let twice = round_amount(once, minor_unit, rule);
        prop_assert_eq!(once, twice);
    }

    /// Five-subunit results times five are whole numbers.
    #[test]
    fn prop_five_subunit_granularity(
        amount in raw_amount(),
        rule in midpoint_rule(),
    ) {
        let rounded = round_amount(amount, MinorUnit::FiveSubunit, rule);
        let scaled = rounded * Decimal::from(5);
        prop_assert_eq!(scaled, scaled.trunc(), "{} is not a multiple of 0.2", rounded);
    }

    /// Rounded amounts fit the currency's display digits.
    #[test]
    fn prop_rounded_fits_decimal_digits(
        amount in raw_amount(),
        minor_unit in catalog_minor_unit(),
    ) {
        let rounded = round_amount(amount, minor_unit, MidpointRounding::ToEven);
        let digits = minor_unit.decimal_digits();
        prop_assert_eq!(rounded, rounded.round_dp(digits));
    }

    /// Rounding moves an amount by at most half a minor unit.
    #[test]
    fn prop_rounding_error_is_bounded(
        amount in raw_amount(),
        minor_unit in catalog_minor_unit(),
    ) {
        let rounded = round_amount(amount, minor_unit, MidpointRounding::ToEven);
        let half_unit = minor_unit.smallest_amount() / Decimal::TWO;
        prop_assert!((rounded - amount).abs() <= half_unit);
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// A fresh key can be added once, read back, and removed once.
    #[test]
    fn prop_registry_round_trip(code in "[A-Z]{4}", namespace in "[A-Z]{3,8}") {
        let registry = CurrencyRegistry::new();
        let currency = CurrencyBuilder::new(&code, &namespace).build().unwrap();

        prop_assert!(registry.try_add(&code, &namespace, currency.clone()));
        prop_assert_eq!(registry.try_get_in(&code, &namespace), Some(currency.clone()));
        prop_assert!(!registry.try_add(&code, &namespace, currency.clone()));
        prop_assert_eq!(registry.try_remove(&code, &namespace), Some(currency));
        prop_assert!(registry.try_get_in(&code, &namespace).is_none());
        prop_assert_eq!(registry.len(), CATALOG.len());
    }
}
