//! Splitting money into parts without losing minor units.
//!
//! Uses the Largest Remainder Method:
//! 1. Express the amount as a whole number of minor units
//! 2. Give every part its truncated share of those units
//! 3. Hand the leftover units out one at a time
//!
//! The parts always sum to the original amount exactly.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::types::Money;
use crate::currency::CurrencyError;

impl Money {
    /// Splits into `shares` parts as equal as the minor unit allows.
    ///
    /// Leftover minor units go to the earliest parts, one each.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::DivisionByZero` when `shares` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use moneta_core::currency::CurrencyRegistry;
    /// use moneta_core::money::Money;
    ///
    /// let registry = CurrencyRegistry::new();
    /// let total = Money::from_code(dec!(100), "EUR", &registry).unwrap();
    /// let parts = total.safe_divide(3).unwrap();
    ///
    /// let amounts: Vec<_> = parts.iter().map(Money::amount).collect();
    /// assert_eq!(amounts, vec![dec!(33.34), dec!(33.33), dec!(33.33)]);
    /// ```
    pub fn safe_divide(&self, shares: usize) -> Result<Vec<Self>, CurrencyError> {
        if shares == 0 {
            return Err(CurrencyError::DivisionByZero);
        }

        let units = self.minor_units();
        let count = Decimal::from(shares);
        let base = (units / count).trunc();
        let leftover = to_count(units - base * count)?;

        Ok((0..shares)
            .map(|i| {
                let share = if i < leftover { base + Decimal::ONE } else { base };
                self.with_minor_units(share)
            })
            .collect())
    }

    /// Splits proportionally to `ratios`.
    ///
    /// Leftover minor units go to the parts with the largest fractional
    /// share; ties favour the earlier part.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::DivisionByZero` when `ratios` is empty or sums
    /// to zero, and `CurrencyError::ArithmeticOverflow` if the weighted
    /// shares exceed the decimal range.
    pub fn safe_divide_by_ratios(&self, ratios: &[u32]) -> Result<Vec<Self>, CurrencyError> {
        let total_ratio: u64 = ratios.iter().map(|&r| u64::from(r)).sum();
        if total_ratio == 0 {
            return Err(CurrencyError::DivisionByZero);
        }

        let units = self.minor_units();
        let total_ratio = Decimal::from(total_ratio);

        let exact = ratios
            .iter()
            .map(|&ratio| {
                units
                    .checked_mul(Decimal::from(ratio))
                    .and_then(|weighted| weighted.checked_div(total_ratio))
                    .ok_or(CurrencyError::ArithmeticOverflow("allocation"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut shares: Vec<Decimal> = exact.iter().map(|share| share.trunc()).collect();
        let allocated: Decimal = shares.iter().copied().sum();
        let leftover = to_count(units - allocated)?;

        if leftover > 0 {
            let mut by_remainder: Vec<(usize, Decimal)> = exact
                .iter()
                .zip(&shares)
                .map(|(exact, share)| *exact - *share)
                .enumerate()
                .collect();
            // Stable sort keeps earlier parts first among equal remainders.
            by_remainder.sort_by(|a, b| b.1.cmp(&a.1));

            for (index, _) in by_remainder.into_iter().take(leftover) {
                shares[index] += Decimal::ONE;
            }
        }

        Ok(shares
            .into_iter()
            .map(|share| self.with_minor_units(share))
            .collect())
    }

    /// Absolute amount expressed as a whole number of minor units.
    fn minor_units(&self) -> Decimal {
        (self.amount().abs() / self.currency().minor_unit_value()).trunc()
    }

    fn with_minor_units(&self, units: Decimal) -> Self {
        let magnitude = units * self.currency().minor_unit_value();
        let amount = if self.is_negative() { -magnitude } else { magnitude };
        Self::new(amount, self.currency().clone())
    }
}

fn to_count(units: Decimal) -> Result<usize, CurrencyError> {
    units
        .to_usize()
        .ok_or(CurrencyError::ArithmeticOverflow("allocation"))
}
