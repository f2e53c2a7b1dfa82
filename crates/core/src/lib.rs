//! Core money logic for Moneta.
//!
//! This crate contains pure domain logic with ZERO I/O dependencies.
//! Currencies, rounding, arithmetic and text handling all live here.
//!
//! # Modules
//!
//! - `currency` - Catalog, descriptors, registry and per-currency rounding
//! - `money` - Money values, arithmetic, allocation and exchange rates
//! - `format` - Locale-aware formatting and parsing of money text

pub mod currency;
pub mod format;
pub mod money;

pub use currency::{Currency, CurrencyError, CurrencyRegistry, MidpointRounding, MinorUnit};
pub use format::{MoneyStyle, MoneyTextCodec};
pub use money::{ExchangeRate, Money};
