//! Money text codec bound to a registry and a locale profile.

use moneta_shared::FormatProfile;
use tracing::debug;

use super::formatter::format_money;
use super::parser::{SplitText, parse_amount, resolve_currency, split_text};
use super::style::MoneyStyle;
use crate::currency::{Currency, CurrencyError, CurrencyRegistry};
use crate::money::Money;

/// Formats and parses money for one locale.
///
/// The profile's `currency_code` names the local currency: the one a bare
/// number or its own symbol resolves to when parsing.
///
/// # Example
///
/// ```
/// use moneta_core::currency::CurrencyRegistry;
/// use moneta_core::format::{MoneyStyle, MoneyTextCodec};
/// use moneta_shared::FormatProfile;
/// use rust_decimal_macros::dec;
///
/// let registry = CurrencyRegistry::new();
/// let codec = MoneyTextCodec::new(&registry, FormatProfile::named("en-US").unwrap()).unwrap();
///
/// let money = codec.parse("$765.43").unwrap();
/// assert_eq!(money.amount(), dec!(765.43));
/// assert_eq!(money.currency().code(), "USD");
/// assert_eq!(codec.format(&money, &MoneyStyle::international()), "USD 765.43");
/// ```
#[derive(Debug, Clone)]
pub struct MoneyTextCodec<'a> {
    registry: &'a CurrencyRegistry,
    profile: FormatProfile,
    local: Currency,
}

impl<'a> MoneyTextCodec<'a> {
    /// Creates a codec whose local currency is the profile's currency code.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if the registry lacks that code.
    pub fn new(registry: &'a CurrencyRegistry, profile: FormatProfile) -> Result<Self, CurrencyError> {
        let local = registry.from_code(&profile.currency_code)?;
        Ok(Self {
            registry,
            profile,
            local,
        })
    }

    /// Creates a codec with an explicit local currency.
    #[must_use]
    pub fn with_local_currency(
        registry: &'a CurrencyRegistry,
        profile: FormatProfile,
        local: Currency,
    ) -> Self {
        Self {
            registry,
            profile,
            local,
        }
    }

    /// Locale conventions in use.
    #[must_use]
    pub fn profile(&self) -> &FormatProfile {
        &self.profile
    }

    /// Currency that bare numbers parse to.
    #[must_use]
    pub fn local_currency(&self) -> &Currency {
        &self.local
    }

    /// Formats `money` in `style`.
    #[must_use]
    pub fn format(&self, money: &Money, style: &MoneyStyle) -> String {
        format_money(money, &self.profile, style)
    }

    /// Formats `money` with a textual specifier such as `"C"` or `"I2"`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidStyle` for an unknown specifier.
    pub fn format_with(&self, money: &Money, specifier: &str) -> Result<String, CurrencyError> {
        let style: MoneyStyle = specifier.parse()?;
        Ok(self.format(money, &style))
    }

    /// Parses text, working out the currency from its symbol or code.
    ///
    /// # Errors
    ///
    /// - `CurrencyError::UnknownCurrency` if the currency text matches nothing
    /// - `CurrencyError::AmbiguousCurrencySymbol` if it matches several currencies
    /// - `CurrencyError::MalformedAmount` if the number is not valid for the profile
    pub fn parse(&self, text: &str) -> Result<Money, CurrencyError> {
        let split = self.split(text, None);
        let currency = resolve_currency(&split.currency, &self.local, self.registry)?;
        let amount = parse_amount(&split.amount, &self.profile)?;

        debug!(text = %text, amount = %amount, currency = %currency, "Parsed money");
        Ok(Money::new(amount, currency))
    }

    /// Parses text in a currency chosen by the caller. Any currency text in
    /// the input is ignored.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::MalformedAmount` if the number is not valid.
    pub fn parse_with_currency(&self, text: &str, currency: &Currency) -> Result<Money, CurrencyError> {
        let split = self.split(text, Some(currency));
        let amount = parse_amount(&split.amount, &self.profile)?;
        Ok(Money::new(amount, currency.clone()))
    }

    /// Splits `text`, moving a decimal separator glued to the currency token
    /// over to the amount unless the token names a currency with it.
    fn split(&self, text: &str, explicit: Option<&Currency>) -> SplitText {
        let split = split_text(text, &self.profile);
        if split.joined_decimal.is_none() {
            return split;
        }
        let token = split.currency.as_str();
        let known = token == self.local.symbol()
            || self.local.has_code(token)
            || explicit.is_some_and(|c| token == c.symbol() || c.has_code(token))
            || !self.registry.find_by_symbol_or_code(token).is_empty();
        if known {
            return split;
        }
        split.detach_decimal(&self.profile).unwrap_or(split)
    }

    /// Like [`Self::parse`], returning `None` on failure.
    #[must_use]
    pub fn try_parse(&self, text: &str) -> Option<Money> {
        self.parse(text).ok()
    }

    /// Like [`Self::parse_with_currency`], returning `None` on failure.
    #[must_use]
    pub fn try_parse_with_currency(&self, text: &str, currency: &Currency) -> Option<Money> {
        self.parse_with_currency(text, currency).ok()
    }

    /// Like [`Self::parse`], returning [`Money::undefined`] on failure.
    #[must_use]
    pub fn parse_or_undefined(&self, text: &str) -> Money {
        self.try_parse(text).unwrap_or_else(Money::undefined)
    }
}
