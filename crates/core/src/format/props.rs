//! Property-based tests for money text.
//!
//! - Local-style text parses back to the money it came from
//! - Formatting never panics, whatever the style and profile

use moneta_shared::{FormatProfile, NegativePattern};
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::codec::MoneyTextCodec;
use super::style::{MoneyStyle, StyleKind};
use crate::currency::CurrencyRegistry;
use crate::money::Money;

/// Strategy to generate amounts with up to 4 fractional digits (±100,000,000).
fn amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000_000i64..1_000_000_000_000i64).prop_map(|v| Decimal::new(v, 4))
}

/// Strategy to pick a built-in profile, or de-DE grouped with spaces under
/// any negative pattern.
fn profile() -> impl Strategy<Value = FormatProfile> {
    let built_in = (0..FormatProfile::BUILT_IN.len()).prop_map(|i| {
        FormatProfile::named(FormatProfile::BUILT_IN[i]).unwrap_or_default()
    });
    let negative = prop_oneof![
        Just(NegativePattern::LeadingMinus),
        Just(NegativePattern::Parentheses),
        Just(NegativePattern::MinusBeforeNumber),
        Just(NegativePattern::TrailingMinus),
    ];
    let space_grouped = negative.prop_map(|negative_pattern| FormatProfile {
        group_separator: ' ',
        negative_pattern,
        ..FormatProfile::named("de-DE").unwrap_or_default()
    });
    prop_oneof![3 => built_in, 1 => space_grouped]
}

/// Currencies with a symbol no other catalog entry shares.
fn unique_symbol_code() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("EUR"), Just("INR"), Just("UAH"), Just("GEL"), Just("BHD")]
}

fn style() -> impl Strategy<Value = MoneyStyle> {
    let kind = prop_oneof![
        Just(StyleKind::Symbol),
        Just(StyleKind::International),
        Just(StyleKind::Name),
        Just(StyleKind::Compact),
    ];
    (kind, prop::option::of(0u32..6)).prop_map(|(kind, precision)| MoneyStyle { kind, precision })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Local currency in local style parses back unchanged.
    #[test]
    fn prop_local_round_trip(amount in amount(), profile in profile()) {
        let registry = CurrencyRegistry::new();
        let codec = MoneyTextCodec::new(&registry, profile).unwrap();
        let money = Money::new(amount, codec.local_currency().clone());

        let text = codec.format(&money, &MoneyStyle::symbol());
        let parsed = codec.parse(&text).unwrap();
        prop_assert_eq!(parsed, money, "text was {}", text);
    }

    /// A foreign currency with a unique symbol parses back unchanged.
    #[test]
    fn prop_unique_symbol_round_trip(
        amount in amount(),
        profile in profile(),
        code in unique_symbol_code(),
    ) {
        let registry = CurrencyRegistry::new();
        let codec = MoneyTextCodec::new(&registry, profile).unwrap();
        let money = Money::from_code(amount, code, &registry).unwrap();

        let text = codec.format(&money, &MoneyStyle::symbol());
        let parsed = codec.parse(&text).unwrap();
        prop_assert_eq!(parsed, money, "text was {}", text);
    }

    /// International style carries the code, so it always parses back.
    #[test]
    fn prop_international_round_trip(amount in amount(), profile in profile()) {
        let registry = CurrencyRegistry::new();
        let codec = MoneyTextCodec::new(&registry, profile).unwrap();
        let money = Money::from_code(amount, "USD", &registry).unwrap();

        let text = codec.format(&money, &MoneyStyle::international());
        prop_assert_eq!(codec.parse(&text).unwrap(), money);
    }

    /// Every style renders something containing a digit.
    #[test]
    fn prop_format_total(amount in amount(), profile in profile(), style in style()) {
        let registry = CurrencyRegistry::new();
        let codec = MoneyTextCodec::new(&registry, profile).unwrap();
        let money = Money::from_code(amount, "MGA", &registry).unwrap();

        let text = codec.format(&money, &style);
        prop_assert!(text.chars().any(|c| c.is_ascii_digit()), "no digits in {}", text);
    }
}
