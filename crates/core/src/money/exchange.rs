//! Exchange rate between two currencies.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::types::Money;
use crate::currency::{Currency, CurrencyError, CurrencyRegistry};

/// Exchange rate: one unit of `base` buys `value` units of `quote`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExchangeRate {
    base: Currency,
    quote: Currency,
    value: Decimal,
    effective_date: Option<NaiveDate>,
}

impl ExchangeRate {
    /// Creates a new exchange rate.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidExchangeRate` if `value` is not
    /// positive or both sides are the same currency.
    pub fn new(base: Currency, quote: Currency, value: Decimal) -> Result<Self, CurrencyError> {
        if value <= Decimal::ZERO {
            return Err(CurrencyError::InvalidExchangeRate(format!(
                "{base}/{quote} rate must be positive, got {value}"
            )));
        }
        if base.code() == quote.code() {
            return Err(CurrencyError::InvalidExchangeRate(format!(
                "{base}/{quote} quotes a currency against itself"
            )));
        }
        Ok(Self {
            base,
            quote,
            value,
            effective_date: None,
        })
    }

    /// Stamps the date this rate is effective.
    #[must_use]
    pub fn with_effective_date(mut self, date: NaiveDate) -> Self {
        self.effective_date = Some(date);
        self
    }

    /// Parses `"EUR/USD 1.2591"`, resolving both codes in `registry`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidExchangeRate` for text that is not of
    /// the form `BASE/QUOTE VALUE`, and `CurrencyError::UnknownCurrency` for
    /// codes the registry does not hold.
    pub fn parse(text: &str, registry: &CurrencyRegistry) -> Result<Self, CurrencyError> {
        let malformed = || CurrencyError::InvalidExchangeRate(text.to_string());

        let mut parts = text.split_whitespace();
        let (Some(pair), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(malformed());
        };
        let (base, quote) = pair.split_once('/').ok_or_else(malformed)?;
        let value = Decimal::from_str(value).map_err(|_| malformed())?;

        Self::new(registry.from_code(base)?, registry.from_code(quote)?, value)
    }

    /// The currency being priced.
    #[must_use]
    pub fn base(&self) -> &Currency {
        &self.base
    }

    /// The currency the price is expressed in.
    #[must_use]
    pub fn quote(&self) -> &Currency {
        &self.quote
    }

    /// Units of quote per unit of base.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.value
    }

    /// Date the rate applies from, if known.
    #[must_use]
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.effective_date
    }

    /// Converts base money to quote (multiply) or quote money to base
    /// (divide). The result is rounded to the target currency.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidCurrencyCombination` if `money` is in
    /// neither currency, or `CurrencyError::ArithmeticOverflow`.
    pub fn convert(&self, money: &Money) -> Result<Money, CurrencyError> {
        let code = money.currency().code();
        if code == self.base.code() {
            let amount = money
                .amount()
                .checked_mul(self.value)
                .ok_or(CurrencyError::ArithmeticOverflow("conversion"))?;
            Ok(Money::new(amount, self.quote.clone()))
        } else if code == self.quote.code() {
            let amount = money
                .amount()
                .checked_div(self.value)
                .ok_or(CurrencyError::ArithmeticOverflow("conversion"))?;
            Ok(Money::new(amount, self.base.clone()))
        } else {
            Err(CurrencyError::InvalidCurrencyCombination {
                left: code.to_string(),
                right: format!("{}/{}", self.base, self.quote),
            })
        }
    }

    /// Returns the inverse rate (`USD/EUR` for `EUR/USD`).
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::ArithmeticOverflow` when the reciprocal is
    /// out of the decimal range.
    pub fn inverse(&self) -> Result<Self, CurrencyError> {
        let value = Decimal::ONE
            .checked_div(self.value)
            .ok_or(CurrencyError::ArithmeticOverflow("inverse rate"))?;
        Ok(Self {
            base: self.quote.clone(),
            quote: self.base.clone(),
            value,
            effective_date: self.effective_date,
        })
    }
}

impl fmt::Display for ExchangeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.base, self.quote, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn eur_usd(registry: &CurrencyRegistry) -> ExchangeRate {
        ExchangeRate::parse("EUR/USD 1.2591", registry).unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        let registry = CurrencyRegistry::new();
        let rate = eur_usd(&registry);
        assert_eq!(rate.base().code(), "EUR");
        assert_eq!(rate.quote().code(), "USD");
        assert_eq!(rate.value(), dec!(1.2591));
        assert_eq!(rate.to_string(), "EUR/USD 1.2591");
    }

    #[test]
    fn test_parse_rejects_malformed_text() {
        let registry = CurrencyRegistry::new();
        for text in ["", "EUR/USD", "EURUSD 1.2", "EUR/USD abc", "EUR/USD 1 2"] {
            assert!(
                matches!(
                    ExchangeRate::parse(text, &registry),
                    Err(CurrencyError::InvalidExchangeRate(_))
                ),
                "{text:?} should be rejected"
            );
        }
        assert!(matches!(
            ExchangeRate::parse("EUR/XYZ 1.1", &registry),
            Err(CurrencyError::UnknownCurrency { .. })
        ));
    }

    #[test]
    fn test_new_validates() {
        let registry = CurrencyRegistry::new();
        let eur = registry.from_code("EUR").unwrap();
        let usd = registry.from_code("USD").unwrap();

        assert!(ExchangeRate::new(eur.clone(), usd.clone(), dec!(0)).is_err());
        assert!(ExchangeRate::new(eur.clone(), usd, dec!(-1.1)).is_err());
        assert!(ExchangeRate::new(eur.clone(), eur, dec!(1)).is_err());
    }

    #[test]
    fn test_convert_both_directions() {
        let registry = CurrencyRegistry::new();
        let rate = eur_usd(&registry);

        let euros = Money::from_code(dec!(100.99), "EUR", &registry).unwrap();
        let dollars = rate.convert(&euros).unwrap();
        assert_eq!(dollars.currency().code(), "USD");
        assert_eq!(dollars.amount(), dec!(127.16));

        let back = rate.convert(&dollars).unwrap();
        assert_eq!(back, euros);
    }

    #[test]
    fn test_convert_rejects_unrelated_currency() {
        let registry = CurrencyRegistry::new();
        let yen = Money::from_code(dec!(100), "JPY", &registry).unwrap();
        let err = eur_usd(&registry).convert(&yen).unwrap_err();
        assert_eq!(
            err,
            CurrencyError::InvalidCurrencyCombination {
                left: "JPY".into(),
                right: "EUR/USD".into(),
            }
        );
    }

    #[test]
    fn test_inverse() {
        let registry = CurrencyRegistry::new();
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let rate = ExchangeRate::parse("USD/JPY 150", &registry)
            .unwrap()
            .with_effective_date(date);

        let inverse = rate.inverse().unwrap();
        assert_eq!(inverse.base().code(), "JPY");
        assert_eq!(inverse.quote().code(), "USD");
        assert_eq!(inverse.effective_date(), Some(date));

        let yen = Money::from_code(dec!(15000), "JPY", &registry).unwrap();
        assert_eq!(inverse.convert(&yen).unwrap().amount(), dec!(100.00));
    }
}
