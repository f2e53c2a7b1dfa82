//! Application configuration management.

use serde::Deserialize;

use crate::error::AppError;
use crate::types::FormatProfile;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Locale configuration.
    #[serde(default)]
    pub locale: LocaleConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Locale configuration.
///
/// Names a built-in profile and optionally overrides parts of it.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// Built-in profile name.
    #[serde(default = "default_profile")]
    pub profile: String,
    /// Local currency code; defaults to the profile's own.
    #[serde(default)]
    pub currency: Option<String>,
    /// Decimal separator override (a single character).
    #[serde(default)]
    pub decimal_separator: Option<String>,
    /// Group separator override (a single character).
    #[serde(default)]
    pub group_separator: Option<String>,
}

fn default_profile() -> String {
    "en-US".to_string()
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            currency: None,
            decimal_separator: None,
            group_separator: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "moneta=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

impl LocaleConfig {
    /// Resolves the named profile and applies the configured overrides.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` for an unknown profile name or a
    /// separator override that is not exactly one character.
    pub fn resolve_profile(&self) -> Result<FormatProfile, AppError> {
        let mut profile = FormatProfile::named(&self.profile).ok_or_else(|| {
            AppError::Configuration(format!(
                "unknown locale profile '{}' (known: {})",
                self.profile,
                FormatProfile::BUILT_IN.join(", ")
            ))
        })?;

        if let Some(code) = &self.currency {
            profile = profile.with_currency(code);
        }
        if let Some(sep) = &self.decimal_separator {
            profile.decimal_separator = single_char("decimal_separator", sep)?;
        }
        if let Some(sep) = &self.group_separator {
            profile.group_separator = single_char("group_separator", sep)?;
        }
        if profile.decimal_separator == profile.group_separator {
            return Err(AppError::Configuration(format!(
                "decimal and group separator are both '{}'",
                profile.decimal_separator
            )));
        }

        Ok(profile)
    }
}

fn single_char(field: &str, value: &str) -> Result<char, AppError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(AppError::Configuration(format!(
            "{field} must be a single character, got '{value}'"
        ))),
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("MONETA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
