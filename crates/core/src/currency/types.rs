//! Currency descriptor types.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize, Serializer};

use super::catalog::{self, CatalogEntry};
use super::error::CurrencyError;
use super::registry::CurrencyRegistry;

/// Generic currency sign used when a currency has no symbol of its own.
pub const GENERIC_CURRENCY_SIGN: &str = "¤";

/// Namespace of the built-in catalog.
pub const ISO_4217: &str = "ISO-4217";

/// Largest supported count of fractional digits.
pub const MAX_DECIMAL_DIGITS: u8 = 4;

/// Granularity of a currency's smallest denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinorUnit {
    /// Power-of-ten minor unit with this many fractional digits (0–4).
    Digits(u8),
    /// No minor unit; amounts are whole numbers (precious metals, funds codes).
    NotApplicable,
    /// Smallest coin is one fifth of the major unit.
    FiveSubunit,
}

impl MinorUnit {
    /// Number of fractional digits used to display amounts.
    #[must_use]
    pub const fn decimal_digits(self) -> u32 {
        match self {
            Self::Digits(digits) => digits as u32,
            Self::NotApplicable => 0,
            Self::FiveSubunit => 1,
        }
    }

    /// The smallest representable amount: `10^-d`, `1` or `0.2`.
    #[must_use]
    pub fn smallest_amount(self) -> Decimal {
        match self {
            Self::Digits(digits) => Decimal::new(1, u32::from(digits)),
            Self::NotApplicable => Decimal::ONE,
            Self::FiveSubunit => Decimal::new(2, 1),
        }
    }

    /// Checks the digit count is within range.
    pub fn validate(self) -> Result<(), CurrencyError> {
        match self {
            Self::Digits(digits) if digits > MAX_DECIMAL_DIGITS => {
                Err(CurrencyError::InvalidDescriptor(format!(
                    "minor unit of {digits} digits exceeds the maximum of {MAX_DECIMAL_DIGITS}"
                )))
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize)]
pub(crate) struct CurrencyData {
    pub(crate) code: String,
    pub(crate) numeric_code: String,
    pub(crate) minor_unit: MinorUnit,
    pub(crate) english_name: String,
    pub(crate) symbol: String,
    pub(crate) is_obsolete: bool,
    pub(crate) valid_from: Option<NaiveDate>,
    pub(crate) valid_to: Option<NaiveDate>,
    pub(crate) namespace: String,
}

/// Immutable currency descriptor.
///
/// Cloning is cheap: the descriptor data is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency(Arc<CurrencyData>);

impl Currency {
    pub(crate) fn from_data(data: CurrencyData) -> Result<Self, CurrencyError> {
        if data.code.trim().is_empty() {
            return Err(CurrencyError::InvalidDescriptor(
                "currency code must not be empty".to_string(),
            ));
        }
        data.minor_unit.validate()?;
        Ok(Self(Arc::new(data)))
    }

    /// Builds a descriptor from a catalog entry under the ISO namespace.
    #[must_use]
    pub fn from_entry(entry: &CatalogEntry) -> Self {
        Self(Arc::new(CurrencyData {
            code: entry.code.to_string(),
            numeric_code: entry.numeric_code.to_string(),
            minor_unit: entry.minor_unit,
            english_name: entry.english_name.to_string(),
            symbol: entry.symbol.to_string(),
            is_obsolete: entry.is_obsolete,
            valid_from: entry.valid_from(),
            valid_to: entry.valid_to(),
            namespace: ISO_4217.to_string(),
        }))
    }

    /// The "no currency" placeholder (`XXX`).
    #[must_use]
    pub fn undefined() -> Self {
        Self::from_entry(&catalog::NO_CURRENCY)
    }

    /// Resolves a code against the registry, searching every namespace.
    pub fn from_code(code: &str, registry: &CurrencyRegistry) -> Result<Self, CurrencyError> {
        registry.from_code(code)
    }

    /// Resolves a code within one namespace.
    pub fn from_code_in(
        code: &str,
        namespace: &str,
        registry: &CurrencyRegistry,
    ) -> Result<Self, CurrencyError> {
        registry.from_code_in(code, namespace)
    }

    /// Alphabetic code, uppercase.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0.code
    }

    /// Numeric code; empty when the currency has none.
    #[must_use]
    pub fn numeric_code(&self) -> &str {
        &self.0.numeric_code
    }

    /// Minor unit granularity.
    #[must_use]
    pub fn minor_unit(&self) -> MinorUnit {
        self.0.minor_unit
    }

    /// Fractional digits used for display.
    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        self.0.minor_unit.decimal_digits()
    }

    /// The smallest representable amount of this currency.
    #[must_use]
    pub fn minor_unit_value(&self) -> Decimal {
        self.0.minor_unit.smallest_amount()
    }

    /// One whole unit of this currency.
    #[must_use]
    pub fn major_unit_value(&self) -> Decimal {
        Decimal::ONE
    }

    /// English display name.
    #[must_use]
    pub fn english_name(&self) -> &str {
        &self.0.english_name
    }

    /// Local display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.0.symbol
    }

    /// True if the currency has been withdrawn.
    #[must_use]
    pub fn is_obsolete(&self) -> bool {
        self.0.is_obsolete
    }

    /// First day the currency was legal tender, if known.
    #[must_use]
    pub fn valid_from(&self) -> Option<NaiveDate> {
        self.0.valid_from
    }

    /// Last day the currency was legal tender, if it has been withdrawn.
    #[must_use]
    pub fn valid_to(&self) -> Option<NaiveDate> {
        self.0.valid_to
    }

    /// Namespace the descriptor was defined in.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.0.namespace
    }

    /// True if `date` falls inside the validity window.
    #[must_use]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.0.valid_from.is_none_or(|from| date >= from)
            && self.0.valid_to.is_none_or(|to| date <= to)
    }

    /// True if `code` names this currency (case-insensitive).
    #[must_use]
    pub fn has_code(&self, code: &str) -> bool {
        self.0.code.eq_ignore_ascii_case(code.trim())
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.code)
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::builder::CurrencyBuilder;
    use rust_decimal_macros::dec;

    fn iso(code: &str) -> Currency {
        Currency::from_entry(catalog::lookup(code).unwrap())
    }

    #[test]
    fn test_minor_unit_digits() {
        assert_eq!(MinorUnit::Digits(2).decimal_digits(), 2);
        assert_eq!(MinorUnit::NotApplicable.decimal_digits(), 0);
        assert_eq!(MinorUnit::FiveSubunit.decimal_digits(), 1);
    }

    #[test]
    fn test_smallest_amount() {
        assert_eq!(MinorUnit::Digits(0).smallest_amount(), dec!(1));
        assert_eq!(MinorUnit::Digits(2).smallest_amount(), dec!(0.01));
        assert_eq!(MinorUnit::Digits(4).smallest_amount(), dec!(0.0001));
        assert_eq!(MinorUnit::NotApplicable.smallest_amount(), dec!(1));
        assert_eq!(MinorUnit::FiveSubunit.smallest_amount(), dec!(0.2));
    }

    #[test]
    fn test_validate_rejects_five_digits() {
        assert!(MinorUnit::Digits(4).validate().is_ok());
        assert!(matches!(
            MinorUnit::Digits(5).validate(),
            Err(CurrencyError::InvalidDescriptor(_))
        ));
    }

    #[test]
    fn test_catalog_descriptor_fields() {
        let eur = iso("EUR");
        assert_eq!(eur.code(), "EUR");
        assert_eq!(eur.numeric_code(), "978");
        assert_eq!(eur.symbol(), "€");
        assert_eq!(eur.english_name(), "Euro");
        assert_eq!(eur.decimal_digits(), 2);
        assert_eq!(eur.minor_unit_value(), dec!(0.01));
        assert_eq!(eur.major_unit_value(), dec!(1));
        assert_eq!(eur.namespace(), ISO_4217);
        assert!(!eur.is_obsolete());
        assert_eq!(eur.to_string(), "EUR");
    }

    #[test]
    fn test_undefined_currency() {
        let none = Currency::undefined();
        assert_eq!(none.code(), "XXX");
        assert_eq!(none.symbol(), GENERIC_CURRENCY_SIGN);
        assert_eq!(none.minor_unit(), MinorUnit::NotApplicable);
    }

    #[test]
    fn test_validity_window() {
        let dem = iso("DEM");
        assert!(dem.is_obsolete());
        assert!(dem.is_active_on(NaiveDate::from_ymd_opt(1995, 6, 1).unwrap()));
        assert!(!dem.is_active_on(NaiveDate::from_ymd_opt(2002, 1, 1).unwrap()));

        let usd = iso("USD");
        assert!(usd.is_active_on(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()));
    }

    #[test]
    fn test_has_code_is_case_insensitive() {
        let usd = iso("USD");
        assert!(usd.has_code("usd"));
        assert!(usd.has_code(" USD "));
        assert!(!usd.has_code("USN"));
    }

    #[test]
    fn test_empty_code_rejected() {
        let result = CurrencyBuilder::new("  ", "CUSTOM").build();
        assert!(matches!(result, Err(CurrencyError::InvalidDescriptor(_))));
    }

    #[test]
    fn test_clone_shares_data() {
        let eur = iso("EUR");
        let copy = eur.clone();
        assert_eq!(eur, copy);
        assert!(Arc::ptr_eq(&eur.0, &copy.0));
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(iso("MGA")).unwrap();
        assert_eq!(json["code"], "MGA");
        assert_eq!(json["minor_unit"], "five_subunit");
        assert_eq!(json["namespace"], ISO_4217);
    }
}
