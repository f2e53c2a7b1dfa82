//! Money text formatting and parsing.
//!
//! - `style`: style specifiers (`C`, `I`, `L`, `K` with optional digits)
//! - `formatter`: pure `Money` to text rendering
//! - `parser`: splitting, currency resolution and amount reading
//! - `codec`: both directions bound to a registry and a locale profile

pub mod codec;
pub mod formatter;
pub mod parser;
pub mod style;

#[cfg(test)]
mod props;

pub use codec::MoneyTextCodec;
pub use formatter::format_money;
pub use parser::{SplitText, parse_amount, resolve_currency, split_text};
pub use style::{MoneyStyle, StyleKind};
