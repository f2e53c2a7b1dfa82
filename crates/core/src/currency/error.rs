//! Error types for currency, money and text codec operations.

use moneta_shared::AppError;
use thiserror::Error;

/// Errors that can occur while resolving currencies or working with money.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    // ========== Lookup Errors ==========
    /// No currency with this code is registered.
    #[error("Unknown currency: {code}{}", in_namespace(.namespace.as_deref()))]
    UnknownCurrency {
        /// Code that was looked up.
        code: String,
        /// Namespace searched, if the lookup was scoped.
        namespace: Option<String>,
    },

    /// The code is already registered in the namespace.
    #[error("Currency {code} is already registered in namespace {namespace}")]
    DuplicateCurrency {
        /// Conflicting code.
        code: String,
        /// Namespace holding the existing entry.
        namespace: String,
    },

    /// A currency symbol matched more than one registered currency.
    #[error("Currency symbol '{symbol}' is ambiguous: matches {}", .candidates.join(", "))]
    AmbiguousCurrencySymbol {
        /// Symbol as found in the input.
        symbol: String,
        /// Codes of every matching currency.
        candidates: Vec<String>,
    },

    /// The descriptor violates a structural rule.
    #[error("Invalid currency descriptor: {0}")]
    InvalidDescriptor(String),

    // ========== Arithmetic Errors ==========
    /// Two money values in different currencies were combined.
    #[error("Cannot combine {left} with {right}: currencies differ")]
    InvalidCurrencyCombination {
        /// Currency code of the left operand.
        left: String,
        /// Currency code of the right operand.
        right: String,
    },

    /// The result does not fit in a 96-bit decimal.
    #[error("Arithmetic overflow during {0}")]
    ArithmeticOverflow(&'static str),

    /// Division by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// Exchange rate must be positive and between two different currencies.
    #[error("Invalid exchange rate: {0}")]
    InvalidExchangeRate(String),

    // ========== Text Errors ==========
    /// The numeric part of the text is not a number under the active profile.
    #[error("Malformed amount: '{0}'")]
    MalformedAmount(String),

    /// Unrecognised format specifier.
    #[error("Invalid format specifier: '{0}'")]
    InvalidStyle(String),
}

fn in_namespace(namespace: Option<&str>) -> String {
    namespace.map_or_else(String::new, |ns| format!(" in namespace {ns}"))
}

impl CurrencyError {
    pub(crate) fn unknown(code: &str) -> Self {
        Self::UnknownCurrency {
            code: code.to_string(),
            namespace: None,
        }
    }

    pub(crate) fn unknown_in(code: &str, namespace: &str) -> Self {
        Self::UnknownCurrency {
            code: code.to_string(),
            namespace: Some(namespace.to_string()),
        }
    }
}

impl From<CurrencyError> for AppError {
    fn from(err: CurrencyError) -> Self {
        let message = err.to_string();
        match err {
            CurrencyError::UnknownCurrency { .. } => Self::NotFound(message),
            CurrencyError::DuplicateCurrency { .. } => Self::Conflict(message),
            CurrencyError::ArithmeticOverflow(_)
            | CurrencyError::DivisionByZero
            | CurrencyError::InvalidExchangeRate(_) => Self::BusinessRule(message),
            CurrencyError::AmbiguousCurrencySymbol { .. }
            | CurrencyError::InvalidDescriptor(_)
            | CurrencyError::InvalidCurrencyCombination { .. }
            | CurrencyError::MalformedAmount(_)
            | CurrencyError::InvalidStyle(_) => Self::Validation(message),
        }
    }
}
