//! Text to money.
//!
//! Parsing runs in three steps:
//! 1. Split the text into amount characters and a currency token
//! 2. Resolve the token against the local currency, then the registry
//! 3. Read the amount with the caller's separators

use std::str::FromStr;

use moneta_shared::FormatProfile;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::currency::{Currency, CurrencyError, CurrencyRegistry};

/// Amount characters and currency token of a money string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitText {
    /// Digits, signs, parentheses and separators in their original order.
    pub amount: String,
    /// Everything else, with surrounding whitespace removed.
    pub currency: String,
    /// Byte offset in `amount` where a decimal separator that ended the
    /// currency token met the digits, as in `$.50`.
    pub joined_decimal: Option<usize>,
}

impl SplitText {
    /// Reads a trailing decimal separator of the currency token as the
    /// start of the amount instead: `$.` + `50` becomes `$` + `.50`.
    ///
    /// Returns `None` when the token does not end that way.
    #[must_use]
    pub fn detach_decimal(&self, profile: &FormatProfile) -> Option<Self> {
        let at = self.joined_decimal?;
        let currency = self.currency.strip_suffix(profile.decimal_separator)?;

        let mut amount = self.amount.clone();
        amount.insert(at, profile.decimal_separator);
        Some(Self {
            amount,
            currency: currency.trim_end().to_string(),
            joined_decimal: None,
        })
    }
}

/// Splits `text` into its amount and currency parts.
///
/// A separator directly after a currency character belongs to the currency,
/// so symbols such as `kr.`, `Bs.` and `B/.` survive intact. Whitespace is
/// dropped unless the profile uses it as group separator.
///
/// A decimal separator kept this way right before a digit is recorded in
/// [`SplitText::joined_decimal`]; see [`SplitText::detach_decimal`].
#[must_use]
pub fn split_text(text: &str, profile: &FormatProfile) -> SplitText {
    let mut split = SplitText::default();
    let mut in_currency = false;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let is_separator = c == profile.decimal_separator || c == profile.group_separator;

        if is_separator && in_currency {
            split.currency.push(c);
            let before_digit = chars.peek().is_some_and(char::is_ascii_digit);
            split.joined_decimal =
                (c == profile.decimal_separator && before_digit).then_some(split.amount.len());
        } else if is_separator || c.is_ascii_digit() || matches!(c, '+' | '-' | '(' | ')') {
            split.amount.push(c);
            in_currency = false;
        } else if c.is_whitespace() {
            in_currency = false;
        } else {
            split.currency.push(c);
            split.joined_decimal = None;
            in_currency = true;
        }
    }

    split.currency = split.currency.trim().to_string();
    split
}

/// Reads a signed amount written with the profile's separators.
///
/// Accepts a leading `+` or `-`, a trailing `-`, or surrounding
/// parentheses for negatives. Group separators may appear anywhere in the
/// integral part; the decimal separator at most once.
///
/// # Errors
///
/// Returns `CurrencyError::MalformedAmount` carrying `amount` otherwise.
pub fn parse_amount(amount: &str, profile: &FormatProfile) -> Result<Decimal, CurrencyError> {
    let malformed = || CurrencyError::MalformedAmount(amount.to_string());

    let mut body = amount.trim();
    let mut negative = false;

    // A whitespace group separator may sit between the number and a sign
    // that followed the currency symbol: "(1 234,56 €)", "1 234,56 €-".
    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        body = inner.trim();
        negative = true;
    }
    if let Some(rest) = body.strip_prefix('-').or_else(|| body.strip_suffix('-')) {
        if negative {
            return Err(malformed());
        }
        body = rest.trim();
        negative = true;
    } else if let Some(rest) = body.strip_prefix('+') {
        body = rest.trim();
    }

    let mut normalized = String::with_capacity(body.len() + 1);
    if negative {
        normalized.push('-');
    }

    let mut seen_digit = false;
    let mut seen_decimal = false;
    for c in body.chars() {
        match c {
            _ if c.is_ascii_digit() => {
                normalized.push(c);
                seen_digit = true;
            }
            _ if c == profile.decimal_separator && !seen_decimal => {
                if !seen_digit {
                    normalized.push('0');
                }
                normalized.push('.');
                seen_decimal = true;
            }
            // grouping only inside the integral digits
            _ if c == profile.group_separator && seen_digit && !seen_decimal => {}
            _ => return Err(malformed()),
        }
    }
    if !seen_digit {
        return Err(malformed());
    }
    if normalized.ends_with('.') {
        normalized.pop();
    }

    Decimal::from_str(&normalized).map_err(|_| malformed())
}

/// Resolves a currency token.
///
/// An empty token, or the local currency's symbol or code, resolves to
/// `local`. Otherwise every registered currency whose symbol or code
/// matches the token is a candidate.
///
/// # Errors
///
/// - `CurrencyError::UnknownCurrency` when nothing matches
/// - `CurrencyError::AmbiguousCurrencySymbol` listing the candidate codes
///   when more than one currency matches
pub fn resolve_currency(
    token: &str,
    local: &Currency,
    registry: &CurrencyRegistry,
) -> Result<Currency, CurrencyError> {
    if token.is_empty() || token == local.symbol() || local.has_code(token) {
        debug!(token = %token, currency = %local, "Resolved to local currency");
        return Ok(local.clone());
    }

    let mut candidates = registry.find_by_symbol_or_code(token);
    // The same code may live in several namespaces; the first one wins.
    let mut seen = Vec::new();
    candidates.retain(|c| {
        let fresh = !seen.contains(&c.code().to_string());
        if fresh {
            seen.push(c.code().to_string());
        }
        fresh
    });

    match candidates.len() {
        0 => Err(CurrencyError::unknown(token)),
        1 => {
            let currency = candidates.remove(0);
            debug!(token = %token, currency = %currency, "Resolved currency token");
            Ok(currency)
        }
        _ => {
            warn!(
                token = %token,
                candidates = candidates.len(),
                "Ambiguous currency symbol"
            );
            Err(CurrencyError::AmbiguousCurrencySymbol {
                symbol: token.to_string(),
                candidates: seen,
            })
        }
    }
}
