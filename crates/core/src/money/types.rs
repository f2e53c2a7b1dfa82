//! Money type with decimal precision and currency.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` and are rounded to the currency's
//! minor unit the moment a `Money` is built.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::currency::{
    Currency, CurrencyError, CurrencyRegistry, MidpointRounding, round_amount,
};

/// A monetary amount bound to a currency.
///
/// The amount is always rounded to the currency's minor unit. Equality
/// compares amount and currency code; ordering is only defined between
/// amounts of the same currency.
#[derive(Debug, Clone, Serialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates money, rounding with banker's rounding.
    #[must_use]
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self::with_rounding(amount, currency, MidpointRounding::ToEven)
    }

    /// Creates money, rounding midpoints with `rule`.
    #[must_use]
    pub fn with_rounding(amount: Decimal, currency: Currency, rule: MidpointRounding) -> Self {
        let amount = round_amount(amount, currency.minor_unit(), rule);
        Self { amount, currency }
    }

    /// Creates money in the currency registered under `code`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if no namespace holds `code`.
    pub fn from_code(
        amount: Decimal,
        code: &str,
        registry: &CurrencyRegistry,
    ) -> Result<Self, CurrencyError> {
        Ok(Self::new(amount, registry.from_code(code)?))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Zero in the "no currency" placeholder, returned by failed parses.
    #[must_use]
    pub fn undefined() -> Self {
        Self::zero(Currency::undefined())
    }

    /// Creates money from a decimal (alias of [`Self::new`]).
    #[must_use]
    pub fn from_decimal(amount: Decimal, currency: Currency) -> Self {
        Self::new(amount, currency)
    }

    /// Creates money from a whole number.
    #[must_use]
    pub fn from_i64(amount: i64, currency: Currency) -> Self {
        Self::new(Decimal::from(amount), currency)
    }

    /// Creates money from a float, keeping the float's shortest decimal form.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::MalformedAmount` for NaN, infinities and
    /// values outside the decimal range.
    pub fn from_f64(amount: f64, currency: Currency) -> Result<Self, CurrencyError> {
        let decimal = Decimal::try_from(amount)
            .map_err(|_| CurrencyError::MalformedAmount(amount.to_string()))?;
        Ok(Self::new(decimal, currency))
    }

    /// The rounded amount.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// The currency.
    #[must_use]
    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// The amount as a decimal.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        self.amount
    }

    /// The amount as a float, if representable.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        self.amount.to_f64()
    }

    /// True if this is the "no currency" placeholder.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.currency.has_code("XXX")
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Returns true if the amount is above zero.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// True if both values carry the same currency code.
    #[must_use]
    pub fn same_currency(&self, other: &Self) -> bool {
        self.currency.code() == other.currency.code()
    }

    pub(crate) fn ensure_same_currency(&self, other: &Self) -> Result<(), CurrencyError> {
        if self.same_currency(other) {
            Ok(())
        } else {
            Err(CurrencyError::InvalidCurrencyCombination {
                left: self.currency.code().to_string(),
                right: other.currency.code().to_string(),
            })
        }
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount && self.same_currency(other)
    }
}

impl Eq for Money {}

impl Hash for Money {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.currency.code().hash(state);
        self.amount.normalize().hash(state);
    }
}

impl PartialOrd for Money {
    /// `None` when the currencies differ.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.same_currency(other) {
            Some(self.amount.cmp(&other.amount))
        } else {
            None
        }
    }
}

impl From<Money> for Decimal {
    fn from(money: Money) -> Self {
        money.amount
    }
}

impl fmt::Display for Money {
    /// Culture-neutral form: `765.43 EUR`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.currency.decimal_digits() as usize;
        write!(f, "{:.*} {}", digits, self.amount, self.currency.code())
    }
}
