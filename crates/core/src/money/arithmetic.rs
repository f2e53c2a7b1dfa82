//! Money arithmetic.
//!
//! Binary operations between two `Money` values require the same currency
//! code and fail with `InvalidCurrencyCombination` otherwise. Every result is
//! rounded to the currency's minor unit again. Overflow is reported, never
//! panicked on.

use std::cmp::Ordering;
use std::ops::Neg;

use rust_decimal::Decimal;

use super::types::Money;
use crate::currency::CurrencyError;

impl Money {
    fn rebuild(&self, amount: Decimal) -> Self {
        Self::new(amount, self.currency().clone())
    }

    /// Sums two amounts of the same currency.
    pub fn add(&self, other: &Self) -> Result<Self, CurrencyError> {
        self.ensure_same_currency(other)?;
        let sum = self
            .amount()
            .checked_add(other.amount())
            .ok_or(CurrencyError::ArithmeticOverflow("addition"))?;
        Ok(self.rebuild(sum))
    }

    /// Subtracts `other` from `self`; both must share a currency.
    pub fn subtract(&self, other: &Self) -> Result<Self, CurrencyError> {
        self.ensure_same_currency(other)?;
        let difference = self
            .amount()
            .checked_sub(other.amount())
            .ok_or(CurrencyError::ArithmeticOverflow("subtraction"))?;
        Ok(self.rebuild(difference))
    }

    /// Scales the amount by a dimensionless factor.
    pub fn multiply(&self, factor: Decimal) -> Result<Self, CurrencyError> {
        let product = self
            .amount()
            .checked_mul(factor)
            .ok_or(CurrencyError::ArithmeticOverflow("multiplication"))?;
        Ok(self.rebuild(product))
    }

    /// Divides the amount by a dimensionless divisor.
    pub fn divide(&self, divisor: Decimal) -> Result<Self, CurrencyError> {
        if divisor.is_zero() {
            return Err(CurrencyError::DivisionByZero);
        }
        let quotient = self
            .amount()
            .checked_div(divisor)
            .ok_or(CurrencyError::ArithmeticOverflow("division"))?;
        Ok(self.rebuild(quotient))
    }

    /// Ratio of two amounts of the same currency. The currency cancels out.
    pub fn divide_by(&self, other: &Self) -> Result<Decimal, CurrencyError> {
        self.ensure_same_currency(other)?;
        if other.is_zero() {
            return Err(CurrencyError::DivisionByZero);
        }
        self.amount()
            .checked_div(other.amount())
            .ok_or(CurrencyError::ArithmeticOverflow("division"))
    }

    /// The same amount with the opposite sign.
    #[must_use]
    pub fn negate(&self) -> Self {
        self.rebuild(-self.amount())
    }

    /// Unary plus: an identical copy.
    #[must_use]
    pub fn plus(&self) -> Self {
        self.clone()
    }

    /// The absolute amount.
    #[must_use]
    pub fn abs(&self) -> Self {
        self.rebuild(self.amount().abs())
    }

    /// Adds one minor unit (0.01 for EUR, 1 for JPY, 0.2 for MGA).
    pub fn increment(&self) -> Result<Self, CurrencyError> {
        let next = self
            .amount()
            .checked_add(self.currency().minor_unit_value())
            .ok_or(CurrencyError::ArithmeticOverflow("increment"))?;
        Ok(self.rebuild(next))
    }

    /// Subtracts one minor unit.
    pub fn decrement(&self) -> Result<Self, CurrencyError> {
        let previous = self
            .amount()
            .checked_sub(self.currency().minor_unit_value())
            .ok_or(CurrencyError::ArithmeticOverflow("decrement"))?;
        Ok(self.rebuild(previous))
    }

    /// Orders two amounts of the same currency.
    pub fn compare(&self, other: &Self) -> Result<Ordering, CurrencyError> {
        self.ensure_same_currency(other)?;
        Ok(self.amount().cmp(&other.amount()))
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

impl Neg for &Money {
    type Output = Money;

    fn neg(self) -> Money {
        self.negate()
    }
}
