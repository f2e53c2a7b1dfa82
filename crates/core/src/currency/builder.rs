//! Builder for custom currency descriptors.
//!
//! Used to define currencies the catalog does not know about (loyalty
//! points, crypto assets, in-house units) or to derive a variant of an
//! existing descriptor, and to put the result into a registry.

use chrono::NaiveDate;

use super::error::CurrencyError;
use super::registry::CurrencyRegistry;
use super::types::{Currency, CurrencyData, GENERIC_CURRENCY_SIGN, MinorUnit};

/// Builder for [`Currency`] descriptors.
///
/// # Example
///
/// ```
/// use moneta_core::currency::{CurrencyBuilder, CurrencyRegistry, MinorUnit};
///
/// let registry = CurrencyRegistry::new();
/// let points = CurrencyBuilder::new("PTS", "LOYALTY")
///     .english_name("Loyalty points")
///     .minor_unit(MinorUnit::Digits(0))
///     .register(&registry)
///     .unwrap();
///
/// assert_eq!(registry.try_get("pts"), Some(points));
/// ```
#[derive(Debug, Clone)]
pub struct CurrencyBuilder {
    code: String,
    namespace: String,
    numeric_code: String,
    minor_unit: MinorUnit,
    english_name: String,
    symbol: Option<String>,
    is_obsolete: bool,
    valid_from: Option<NaiveDate>,
    valid_to: Option<NaiveDate>,
}

impl CurrencyBuilder {
    /// Starts a descriptor for `code` in `namespace`.
    ///
    /// Defaults: two decimal digits, no numeric code, generic symbol.
    #[must_use]
    pub fn new(code: &str, namespace: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
            namespace: namespace.to_string(),
            numeric_code: String::new(),
            minor_unit: MinorUnit::Digits(2),
            english_name: String::new(),
            symbol: None,
            is_obsolete: false,
            valid_from: None,
            valid_to: None,
        }
    }

    /// Starts from a copy of an existing descriptor.
    #[must_use]
    pub fn from_currency(currency: &Currency) -> Self {
        Self {
            code: currency.code().to_string(),
            namespace: currency.namespace().to_string(),
            numeric_code: currency.numeric_code().to_string(),
            minor_unit: currency.minor_unit(),
            english_name: currency.english_name().to_string(),
            symbol: Some(currency.symbol().to_string()),
            is_obsolete: currency.is_obsolete(),
            valid_from: currency.valid_from(),
            valid_to: currency.valid_to(),
        }
    }

    /// Moves the descriptor to another namespace.
    #[must_use]
    pub fn namespace(mut self, namespace: &str) -> Self {
        self.namespace = namespace.to_string();
        self
    }

    /// Sets the numeric code.
    #[must_use]
    pub fn numeric_code(mut self, numeric_code: &str) -> Self {
        self.numeric_code = numeric_code.to_string();
        self
    }

    /// Sets the minor unit.
    #[must_use]
    pub fn minor_unit(mut self, minor_unit: MinorUnit) -> Self {
        self.minor_unit = minor_unit;
        self
    }

    /// Sets the English name.
    #[must_use]
    pub fn english_name(mut self, name: &str) -> Self {
        self.english_name = name.to_string();
        self
    }

    /// Sets the display symbol.
    #[must_use]
    pub fn symbol(mut self, symbol: &str) -> Self {
        self.symbol = Some(symbol.to_string());
        self
    }

    /// Marks the currency withdrawn as of `valid_to`.
    #[must_use]
    pub fn obsolete(mut self, valid_to: NaiveDate) -> Self {
        self.is_obsolete = true;
        self.valid_to = Some(valid_to);
        self
    }

    /// Sets the first day of validity.
    #[must_use]
    pub fn valid_from(mut self, valid_from: NaiveDate) -> Self {
        self.valid_from = Some(valid_from);
        self
    }

    /// Builds the descriptor.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::InvalidDescriptor` for an empty code, an
    /// out-of-range minor unit, or a validity window that ends before it
    /// starts.
    pub fn build(self) -> Result<Currency, CurrencyError> {
        if let (Some(from), Some(to)) = (self.valid_from, self.valid_to)
            && to < from
        {
            return Err(CurrencyError::InvalidDescriptor(format!(
                "{} is valid to {to}, before it is valid from {from}",
                self.code
            )));
        }

        let symbol = match self.symbol {
            Some(symbol) if !symbol.is_empty() => symbol,
            _ => GENERIC_CURRENCY_SIGN.to_string(),
        };
        let english_name = if self.english_name.is_empty() {
            self.code.clone()
        } else {
            self.english_name
        };

        Currency::from_data(CurrencyData {
            code: self.code,
            numeric_code: self.numeric_code,
            minor_unit: self.minor_unit,
            english_name,
            symbol,
            is_obsolete: self.is_obsolete,
            valid_from: self.valid_from,
            valid_to: self.valid_to,
            namespace: self.namespace,
        })
    }

    /// Builds the descriptor and adds it to `registry`.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::build`], or with `CurrencyError::DuplicateCurrency`
    /// if the code is already registered in the namespace.
    pub fn register(self, registry: &CurrencyRegistry) -> Result<Currency, CurrencyError> {
        let currency = self.build()?;
        registry.add(currency.clone())?;
        Ok(currency)
    }

    /// Builds the descriptor and stores it in `registry`, overwriting any
    /// existing entry. Returns the displaced descriptor.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::build`].
    pub fn replace(self, registry: &CurrencyRegistry) -> Result<Option<Currency>, CurrencyError> {
        let currency = self.build()?;
        Ok(registry.replace(currency))
    }

    /// Removes `(namespace, code)` from `registry`.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnknownCurrency` if nothing was registered there.
    pub fn unregister(
        code: &str,
        namespace: &str,
        registry: &CurrencyRegistry,
    ) -> Result<Currency, CurrencyError> {
        registry
            .try_remove(code, namespace)
            .ok_or_else(|| CurrencyError::unknown_in(&code.trim().to_uppercase(), namespace))
    }
}
