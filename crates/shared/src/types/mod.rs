//! Common types used across the workspace.

pub mod locale;

pub use locale::{FormatProfile, NegativePattern, PositivePattern};
