//! Locale formatting profiles.
//!
//! A profile is the caller-supplied half of money formatting: separators,
//! digit grouping and where the sign and currency text go. The currency text
//! and digit count are never taken from here; the formatter derives those
//! from the currency being rendered.

use serde::{Deserialize, Serialize};

/// Placement of the currency text around a positive amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositivePattern {
    /// `$n`
    SymbolBefore,
    /// `n$`
    SymbolAfter,
    /// `$ n`
    SymbolBeforeSpace,
    /// `n $`
    SymbolAfterSpace,
}

impl PositivePattern {
    /// Returns true if the currency text precedes the number.
    #[must_use]
    pub const fn symbol_first(self) -> bool {
        matches!(self, Self::SymbolBefore | Self::SymbolBeforeSpace)
    }

    /// Returns true if the currency text is separated from the number by a space.
    #[must_use]
    pub const fn spaced(self) -> bool {
        matches!(self, Self::SymbolBeforeSpace | Self::SymbolAfterSpace)
    }
}

/// Placement of the negative sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NegativePattern {
    /// Minus in front of the whole expression: `-$1.00`, `-1,00 €`.
    LeadingMinus,
    /// Whole expression in parentheses: `($1.00)`.
    Parentheses,
    /// Minus directly in front of the digits: `$-1.00`, `€ -1,00`.
    MinusBeforeNumber,
    /// Minus after the whole expression: `$1.00-`.
    TrailingMinus,
}

/// Number formatting conventions of a locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatProfile {
    /// Profile name (e.g. "en-US").
    pub name: String,
    /// Separator between integral and fractional digits.
    pub decimal_separator: char,
    /// Separator between digit groups.
    pub group_separator: char,
    /// Digit group sizes from the decimal point outwards; the last size
    /// repeats. Empty or a leading zero disables grouping.
    pub group_sizes: Vec<usize>,
    /// Currency placement for positive amounts.
    pub positive_pattern: PositivePattern,
    /// Sign placement for negative amounts.
    pub negative_pattern: NegativePattern,
    /// ISO 4217 code of the currency in local use.
    pub currency_code: String,
}

impl FormatProfile {
    /// Names of the built-in profiles, in lookup order.
    pub const BUILT_IN: &'static [&'static str] = &[
        "invariant", "en-US", "en-GB", "en-IN", "nl-NL", "de-DE", "fr-FR", "de-CH", "ja-JP",
    ];

    fn build(
        name: &str,
        decimal_separator: char,
        group_separator: char,
        group_sizes: &[usize],
        positive_pattern: PositivePattern,
        negative_pattern: NegativePattern,
        currency_code: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            decimal_separator,
            group_separator,
            group_sizes: group_sizes.to_vec(),
            positive_pattern,
            negative_pattern,
            currency_code: currency_code.to_string(),
        }
    }

    /// Culture-neutral profile: `¤1,234.56`, negatives in parentheses.
    #[must_use]
    pub fn invariant() -> Self {
        Self::build(
            "invariant",
            '.',
            ',',
            &[3],
            PositivePattern::SymbolBefore,
            NegativePattern::Parentheses,
            "XXX",
        )
    }

    /// Looks up a built-in profile by name (case-insensitive).
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        use NegativePattern::{LeadingMinus, MinusBeforeNumber};
        use PositivePattern::{SymbolAfterSpace, SymbolBefore, SymbolBeforeSpace};

        let profile = match name.to_ascii_lowercase().as_str() {
            "invariant" | "" => Self::invariant(),
            "en-us" => Self::build("en-US", '.', ',', &[3], SymbolBefore, LeadingMinus, "USD"),
            "en-gb" => Self::build("en-GB", '.', ',', &[3], SymbolBefore, LeadingMinus, "GBP"),
            "en-in" => Self::build("en-IN", '.', ',', &[3, 2], SymbolBefore, LeadingMinus, "INR"),
            "nl-nl" => Self::build(
                "nl-NL",
                ',',
                '.',
                &[3],
                SymbolBeforeSpace,
                MinusBeforeNumber,
                "EUR",
            ),
            "de-de" => Self::build("de-DE", ',', '.', &[3], SymbolAfterSpace, LeadingMinus, "EUR"),
            "fr-fr" => Self::build(
                "fr-FR",
                ',',
                '\u{202f}',
                &[3],
                SymbolAfterSpace,
                LeadingMinus,
                "EUR",
            ),
            "de-ch" => Self::build(
                "de-CH",
                '.',
                '\u{2019}',
                &[3],
                SymbolBeforeSpace,
                MinusBeforeNumber,
                "CHF",
            ),
            "ja-jp" => Self::build("ja-JP", '.', ',', &[3], SymbolBefore, LeadingMinus, "JPY"),
            _ => return None,
        };
        Some(profile)
    }

    /// Returns a copy of this profile whose local currency is `code`.
    #[must_use]
    pub fn with_currency(mut self, code: &str) -> Self {
        self.currency_code = code.to_uppercase();
        self
    }
}

impl Default for FormatProfile {
    fn default() -> Self {
        Self::invariant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("en-US", '.', ',', "USD")]
    #[case("EN-us", '.', ',', "USD")]
    #[case("nl-NL", ',', '.', "EUR")]
    #[case("de-DE", ',', '.', "EUR")]
    #[case("ja-JP", '.', ',', "JPY")]
    #[case("invariant", '.', ',', "XXX")]
    fn test_named_profiles(
        #[case] name: &str,
        #[case] decimal: char,
        #[case] group: char,
        #[case] currency: &str,
    ) {
        let profile = FormatProfile::named(name).unwrap();
        assert_eq!(profile.decimal_separator, decimal);
        assert_eq!(profile.group_separator, group);
        assert_eq!(profile.currency_code, currency);
    }

    #[test]
    fn test_every_built_in_name_resolves() {
        for name in FormatProfile::BUILT_IN {
            let profile = FormatProfile::named(name).unwrap();
            assert_eq!(&profile.name, name);
        }
    }

    #[test]
    fn test_unknown_profile() {
        assert!(FormatProfile::named("xx-XX").is_none());
    }

    #[test]
    fn test_with_currency_uppercases() {
        let profile = FormatProfile::invariant().with_currency("eur");
        assert_eq!(profile.currency_code, "EUR");
    }

    #[test]
    fn test_pattern_helpers() {
        assert!(PositivePattern::SymbolBefore.symbol_first());
        assert!(!PositivePattern::SymbolBefore.spaced());
        assert!(!PositivePattern::SymbolAfterSpace.symbol_first());
        assert!(PositivePattern::SymbolAfterSpace.spaced());
    }

    #[test]
    fn test_serde_kebab_case() {
        let json = serde_json::to_string(&NegativePattern::MinusBeforeNumber).unwrap();
        assert_eq!(json, "\"minus-before-number\"");

        let profile = FormatProfile::named("de-DE").unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        let back: FormatProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
