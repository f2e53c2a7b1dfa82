//! Property-based tests for money arithmetic and allocation.
//!
//! - Same-currency operations stay in that currency
//! - Mixed-currency operations always fail
//! - Splitting never gains or loses a minor unit

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::types::Money;
use crate::currency::{CurrencyError, CurrencyRegistry};

/// Strategy to generate amounts with up to 4 fractional digits (±1,000,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-10_000_000_000_000i64..10_000_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick currencies covering every minor-unit kind.
fn code() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("EUR"),
        Just("USD"),
        Just("JPY"),
        Just("BHD"),
        Just("MGA"),
        Just("XAU"),
    ]
}

fn money(amount: Decimal, code: &str) -> Money {
    Money::from_code(amount, code, &CurrencyRegistry::new()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Same-currency closure
    // =========================================================================

    /// Add and subtract keep the currency and are inverse to each other.
    #[test]
    fn prop_add_subtract_closure(a in amount(), b in amount(), code in code()) {
        let left = money(a, code);
        let right = money(b, code);

        let sum = left.add(&right).unwrap();
        prop_assert_eq!(sum.currency().code(), code);
        prop_assert_eq!(sum.subtract(&right).unwrap(), left);
    }

    /// Mixing two different currencies is always rejected.
    #[test]
    fn prop_mixed_currencies_rejected(a in amount(), b in amount()) {
        let euros = money(a, "EUR");
        let dollars = money(b, "USD");

        let is_combination_error =
            |r: Result<Money, CurrencyError>| matches!(r, Err(CurrencyError::InvalidCurrencyCombination { .. }));
        prop_assert!(is_combination_error(euros.add(&dollars)));
        prop_assert!(is_combination_error(euros.subtract(&dollars)));
        prop_assert!(euros.compare(&dollars).is_err());
        prop_assert!(euros.divide_by(&dollars).is_err());
    }

    /// Results of scalar operations are already rounded.
    #[test]
    fn prop_multiply_result_is_rounded(a in amount(), factor in amount(), code in code()) {
        let product = money(a, code).multiply(factor).unwrap();
        let again = Money::new(product.amount(), product.currency().clone());
        prop_assert_eq!(product, again);
    }

    /// Negating twice is the identity.
    #[test]
    fn prop_double_negation(a in amount(), code in code()) {
        let original = money(a, code);
        prop_assert_eq!(original.negate().negate(), original);
    }

    // =========================================================================
    // Allocation
    // =========================================================================

    /// Equal splits sum back to the original.
    #[test]
    fn prop_safe_divide_preserves_total(a in amount(), code in code(), shares in 1usize..20) {
        let total = money(a, code);
        let parts = total.safe_divide(shares).unwrap();
        let sum: Decimal = parts.iter().map(Money::amount).sum();

        prop_assert_eq!(parts.len(), shares);
        prop_assert_eq!(sum, total.amount());
    }

    /// Weighted splits sum back to the original.
    #[test]
    fn prop_ratios_preserve_total(
        a in amount(),
        code in code(),
        ratios in prop::collection::vec(1u32..100, 1..8),
    ) {
        let total = money(a, code);
        let parts = total.safe_divide_by_ratios(&ratios).unwrap();
        let sum: Decimal = parts.iter().map(Money::amount).sum();

        prop_assert_eq!(sum, total.amount());
    }
}
