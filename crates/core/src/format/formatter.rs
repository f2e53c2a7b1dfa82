//! Money to text.
//!
//! Formatting is a pure function of the money, the caller's profile and a
//! style. The profile decides separators, grouping and sign placement; the
//! style picks the currency text; the currency decides the digit count
//! unless the style overrides it.

use moneta_shared::{FormatProfile, NegativePattern};
use rust_decimal::{Decimal, RoundingStrategy};

use super::style::{COMPACT_DEFAULT_PRECISION, MoneyStyle, StyleKind};
use crate::money::Money;

const THOUSAND: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

const COMPACT_SUFFIXES: [&str; 5] = ["", "K", "M", "B", "T"];

/// Renders `money` as text.
///
/// # Example
///
/// ```
/// use moneta_core::currency::CurrencyRegistry;
/// use moneta_core::format::{MoneyStyle, format_money};
/// use moneta_core::money::Money;
/// use moneta_shared::FormatProfile;
/// use rust_decimal_macros::dec;
///
/// let registry = CurrencyRegistry::new();
/// let money = Money::from_code(dec!(-1234.5), "USD", &registry).unwrap();
/// let profile = FormatProfile::named("en-US").unwrap();
///
/// assert_eq!(format_money(&money, &profile, &MoneyStyle::symbol()), "-$1,234.50");
/// assert_eq!(format_money(&money, &profile, &MoneyStyle::international()), "-USD 1,234.50");
/// ```
#[must_use]
pub fn format_money(money: &Money, profile: &FormatProfile, style: &MoneyStyle) -> String {
    let currency = money.currency();

    match style.kind {
        StyleKind::Symbol => {
            let digits = style.precision.unwrap_or_else(|| currency.decimal_digits());
            let (negative, number) = render_number(money.amount(), digits, profile);
            let spaced = profile.positive_pattern.spaced();
            let first = profile.positive_pattern.symbol_first();
            arrange(&number, currency.symbol(), spaced, first, negative, profile)
        }
        StyleKind::International => {
            let digits = style.precision.unwrap_or_else(|| currency.decimal_digits());
            let (negative, number) = render_number(money.amount(), digits, profile);
            let first = profile.positive_pattern.symbol_first();
            arrange(&number, currency.code(), true, first, negative, profile)
        }
        StyleKind::Name => {
            let digits = style.precision.unwrap_or_else(|| currency.decimal_digits());
            let (negative, number) = render_number(money.amount(), digits, profile);
            arrange(&number, currency.english_name(), true, false, negative, profile)
        }
        StyleKind::Compact => {
            let digits = style.precision.unwrap_or(COMPACT_DEFAULT_PRECISION);
            let (negative, number) = render_compact(money.amount(), digits, profile);
            let spaced = profile.positive_pattern.spaced();
            let first = profile.positive_pattern.symbol_first();
            arrange(&number, currency.symbol(), spaced, first, negative, profile)
        }
    }
}

/// Places the currency text and the sign around an unsigned number.
fn arrange(
    number: &str,
    currency: &str,
    spaced: bool,
    currency_first: bool,
    negative: bool,
    profile: &FormatProfile,
) -> String {
    let gap = if spaced { " " } else { "" };
    let join = |number: &str| {
        if currency_first {
            format!("{currency}{gap}{number}")
        } else {
            format!("{number}{gap}{currency}")
        }
    };

    if !negative {
        return join(number);
    }
    match profile.negative_pattern {
        NegativePattern::LeadingMinus => format!("-{}", join(number)),
        NegativePattern::Parentheses => format!("({})", join(number)),
        NegativePattern::MinusBeforeNumber => join(&format!("-{number}")),
        NegativePattern::TrailingMinus => format!("{}-", join(number)),
    }
}

/// Rounds to `digits` and renders the magnitude with the profile's
/// separators. Returns whether the displayed value is negative.
fn render_number(amount: Decimal, digits: u32, profile: &FormatProfile) -> (bool, String) {
    let mut rounded = amount.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(digits);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    (negative, localize(&rounded.abs().to_string(), profile))
}

/// Scales by thousands, appends the magnitude suffix and drops trailing
/// fractional zeros.
fn render_compact(amount: Decimal, digits: u32, profile: &FormatProfile) -> (bool, String) {
    let mut magnitude = amount.abs();
    let mut tier = 0;
    while magnitude >= THOUSAND && tier < COMPACT_SUFFIXES.len() - 1 {
        magnitude /= THOUSAND;
        tier += 1;
    }

    let mut rounded =
        magnitude.round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    if rounded >= THOUSAND && tier < COMPACT_SUFFIXES.len() - 1 {
        // 999.96K rounds to 1000.0K; show it as 1M instead.
        rounded = (rounded / THOUSAND)
            .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
        tier += 1;
    }

    let negative = amount.is_sign_negative() && !rounded.is_zero();
    let number = localize(&rounded.normalize().to_string(), profile);
    (negative, format!("{number}{}", COMPACT_SUFFIXES[tier]))
}

/// Converts a plain `1234.5` rendering into the profile's grouping and
/// decimal separator.
fn localize(plain: &str, profile: &FormatProfile) -> String {
    let (integral, fraction) = match plain.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (plain, None),
    };

    let mut out = group_digits(integral, &profile.group_sizes, profile.group_separator);
    if let Some(fraction) = fraction {
        out.push(profile.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Inserts `separator` between digit groups, counting from the right. The
/// last group size repeats; a zero size stops grouping.
fn group_digits(digits: &str, sizes: &[usize], separator: char) -> String {
    let mut groups: Vec<&str> = Vec::new();
    let mut end = digits.len();
    let mut sizes = sizes.iter().copied();
    let mut size = sizes.next().unwrap_or(0);

    while size > 0 && end > size {
        groups.push(&digits[end - size..end]);
        end -= size;
        if let Some(next) = sizes.next() {
            size = next;
        }
    }
    groups.push(&digits[..end]);

    groups.reverse();
    groups.join(&separator.to_string())
}
