//! # Scaler Configuration Module
//!
//! Engine constants and the runtime configuration of the `dizzydish` binary.

use std::env;

/// Deltas at or below this magnitude are not annotated
pub const DELTA_THRESHOLD: f64 = 0.01;
/// Scaled servings never drop below this
pub const MIN_SERVINGS: u32 = 1;

pub const DEFAULT_LOCALE: &str = "en";
pub const LOCALE_ENV: &str = "DIZZYDISH_LOCALE";
pub const LOG_FORMAT_ENV: &str = "DIZZYDISH_LOG_FORMAT";

/// Output format of the log subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything other than "json" is plain text
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Plain
        }
    }
}

/// Runtime configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Language of user-facing labels (e.g., "en", "fr")
    pub locale: String,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            log_format: LogFormat::Plain,
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables
    ///
    /// Call `dotenv::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let locale = lookup(LOCALE_ENV)
            .map(|locale| locale.trim().to_lowercase())
            .filter(|locale| !locale.is_empty())
            .unwrap_or(defaults.locale);
        let log_format = lookup(LOG_FORMAT_ENV)
            .map(|name| LogFormat::from_name(&name))
            .unwrap_or(defaults.log_format);

        Self { locale, log_format }
    }

    /// Override the locale, e.g. from a command-line flag
    pub fn with_locale(mut self, locale: Option<&str>) -> Self {
        if let Some(locale) = locale.map(str::trim).filter(|l| !l.is_empty()) {
            self.locale = locale.to_lowercase();
        }
        self
    }
}
