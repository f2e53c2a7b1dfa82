//! Money amounts bound to a currency.
//!
//! Provides:
//! - `Money` construction with per-currency rounding
//! - Named arithmetic that refuses to mix currencies
//! - Loss-free splitting into parts
//! - Conversion through an `ExchangeRate`

pub mod allocation;
pub mod arithmetic;
pub mod exchange;
pub mod types;

#[cfg(test)]
mod props;

pub use exchange::ExchangeRate;
pub use types::Money;
