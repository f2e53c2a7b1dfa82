//! Style specifiers for money text.
//!
//! A specifier is one letter, optionally followed by a digit count:
//!
//! | Specifier | Currency text   | Example        |
//! |-----------|-----------------|----------------|
//! | `C[n]`    | local symbol    | `€765.43`      |
//! | `I[n]`    | ISO code        | `EUR 765.43`   |
//! | `L[n]`    | English name    | `765.43 Euro`  |
//! | `K[n]`    | symbol, compact | `$1.2K`        |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::currency::CurrencyError;

/// Largest digit count a specifier may request.
pub const MAX_PRECISION: u32 = 28;

/// Default digit count of the compact style.
pub const COMPACT_DEFAULT_PRECISION: u32 = 1;

/// Which currency text to render and how to scale the number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleKind {
    /// Local currency symbol, placed by the profile's pattern.
    #[default]
    Symbol,
    /// ISO code, always separated from the number by a space.
    International,
    /// English name after the number.
    Name,
    /// Symbol with a magnitude suffix (K, M, B, T).
    Compact,
}

impl StyleKind {
    const fn letter(self) -> char {
        match self {
            Self::Symbol => 'C',
            Self::International => 'I',
            Self::Name => 'L',
            Self::Compact => 'K',
        }
    }
}

/// A parsed style specifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoneyStyle {
    /// How the currency is shown.
    pub kind: StyleKind,
    /// Explicit fractional digit count; `None` uses the currency's digits
    /// (or one digit for the compact style).
    pub precision: Option<u32>,
}

impl MoneyStyle {
    /// Local-symbol style with the currency's own digits.
    #[must_use]
    pub const fn symbol() -> Self {
        Self {
            kind: StyleKind::Symbol,
            precision: None,
        }
    }

    /// ISO code style, e.g. `USD 765.43`.
    #[must_use]
    pub const fn international() -> Self {
        Self {
            kind: StyleKind::International,
            precision: None,
        }
    }

    /// English name style, e.g. `765.43 Euro`.
    #[must_use]
    pub const fn name() -> Self {
        Self {
            kind: StyleKind::Name,
            precision: None,
        }
    }

    /// Abbreviated large amounts, e.g. `$1.2K`.
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            kind: StyleKind::Compact,
            precision: None,
        }
    }

    /// Overrides the fractional digit count.
    #[must_use]
    pub const fn with_precision(mut self, digits: u32) -> Self {
        self.precision = Some(digits);
        self
    }
}

impl FromStr for MoneyStyle {
    type Err = CurrencyError;

    /// Parses `C`, `I2`, `l`, `K0` and so on. The empty string is `C`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CurrencyError::InvalidStyle(s.to_string());

        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let kind = match chars.next().map(|c| c.to_ascii_uppercase()) {
            None | Some('C') => StyleKind::Symbol,
            Some('I') => StyleKind::International,
            Some('L') => StyleKind::Name,
            Some('K') => StyleKind::Compact,
            Some(_) => return Err(invalid()),
        };

        let digits = chars.as_str();
        let precision = if digits.is_empty() {
            None
        } else {
            if !digits.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            let value: u32 = digits.parse().map_err(|_| invalid())?;
            if value > MAX_PRECISION {
                return Err(invalid());
            }
            Some(value)
        };

        Ok(Self { kind, precision })
    }
}

impl fmt::Display for MoneyStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())?;
        if let Some(precision) = self.precision {
            write!(f, "{precision}")?;
        }
        Ok(())
    }
}
