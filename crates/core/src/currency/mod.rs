//! Currency descriptors, the built-in catalog, the registry and rounding.

pub mod builder;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod rounding;
pub mod types;

#[cfg(test)]
mod props;

pub use builder::CurrencyBuilder;
pub use catalog::{CATALOG, CatalogEntry};
pub use error::CurrencyError;
pub use registry::CurrencyRegistry;
pub use rounding::{MidpointRounding, round_amount, round_to_even};
pub use types::{Currency, GENERIC_CURRENCY_SIGN, ISO_4217, MinorUnit};
