//! Bot configuration.
//!
//! All settings are read once at startup into a [`BotConfig`] that is passed
//! to the handlers explicitly. Secrets and overrides usually live in
//! `~/.pickcourse/.env.local`, which the binary loads before calling
//! [`BotConfig::from_env`].
//!
//! # Environment Variables
//!
//! - `PICKCOURSE_API_URL`: Base URL of the review API (default: `http://localhost:7070`)
//! - `PICKCOURSE_API_TIMEOUT_SECS`: Request timeout in seconds (default: 5)
//! - `PICKCOURSE_REVIEW_CHANNEL`: Channel receiving review announcements (default: `avis`)
//! - `PICKCOURSE_WELCOME_CHANNEL`: Channel receiving welcome messages (default: `bienvenue`)
//! - `PICKCOURSE_PROFANITY_FILE`: Extra word list for the comment filter
//! - `PICKCOURSE_CONFIG_DIR`: Override the config directory

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable for the review API base URL.
pub const API_URL_ENV: &str = "PICKCOURSE_API_URL";

/// Environment variable for the request timeout.
pub const API_TIMEOUT_ENV: &str = "PICKCOURSE_API_TIMEOUT_SECS";

/// Environment variable for the announcement channel name.
pub const REVIEW_CHANNEL_ENV: &str = "PICKCOURSE_REVIEW_CHANNEL";

/// Environment variable for the welcome channel name.
pub const WELCOME_CHANNEL_ENV: &str = "PICKCOURSE_WELCOME_CHANNEL";

/// Environment variable for an additional profanity word list.
pub const PROFANITY_FILE_ENV: &str = "PICKCOURSE_PROFANITY_FILE";

/// Environment variable for a custom config directory.
pub const CONFIG_DIR_ENV: &str = "PICKCOURSE_CONFIG_DIR";

/// Default review API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:7070";

/// Default outbound request budget.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default announcement channel.
pub const DEFAULT_REVIEW_CHANNEL: &str = "avis";

/// Default welcome channel.
pub const DEFAULT_WELCOME_CHANNEL: &str = "bienvenue";

/// Default config directory name under home.
const DEFAULT_CONFIG_DIR: &str = ".pickcourse";

/// Path of the review submission route, relative to the API base.
const REVIEW_ROUTE: &str = "avis";

/// Errors raised while building the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The API base URL could not be parsed.
    #[error("Invalid review API URL '{value}': {reason}")]
    InvalidUrl { value: String, reason: String },

    /// The timeout is not a positive number of seconds.
    #[error("Invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Runtime configuration shared by every interaction.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Base URL of the review collection API.
    pub api_base_url: Url,
    /// Budget for the single outbound request.
    pub request_timeout: Duration,
    /// Name of the channel where accepted reviews are announced.
    pub review_channel: String,
    /// Name of the channel where new members are greeted.
    pub welcome_channel: String,
    /// Optional word list merged into the built-in profanity filter.
    pub profanity_file: Option<PathBuf>,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            api_base_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            request_timeout: DEFAULT_TIMEOUT,
            review_channel: DEFAULT_REVIEW_CHANNEL.to_string(),
            welcome_channel: DEFAULT_WELCOME_CHANNEL.to_string(),
            profanity_file: None,
        }
    }
}

impl BotConfig {
    /// Build the configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(url) = get(API_URL_ENV) {
            config = config.with_api_url(&url)?;
        }
        if let Some(secs) = get(API_TIMEOUT_ENV) {
            config.request_timeout = parse_timeout(&secs)?;
        }
        if let Some(name) = get(REVIEW_CHANNEL_ENV) {
            config.review_channel = name;
        }
        if let Some(name) = get(WELCOME_CHANNEL_ENV) {
            config.welcome_channel = name;
        }
        config.profanity_file = get(PROFANITY_FILE_ENV).map(PathBuf::from);

        Ok(config)
    }

    /// Replace the API base URL.
    pub fn with_api_url(mut self, value: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
            value: value.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                value: value.to_string(),
                reason: "expected an http(s) base URL".to_string(),
            });
        }
        self.api_base_url = url;
        Ok(self)
    }

    /// Replace the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full URL of the review submission endpoint.
    pub fn review_endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.as_str().trim_end_matches('/'),
            REVIEW_ROUTE
        )
    }
}

/// Parse a timeout given in whole or fractional seconds.
pub fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|secs| secs.is_finite() && *secs > 0.0)
        .map(Duration::from_secs_f64)
        .ok_or_else(|| ConfigError::InvalidTimeout(value.to_string()))
}

/// Get the PickCourse config directory.
///
/// The directory is determined by:
/// 1. `PICKCOURSE_CONFIG_DIR` environment variable if set
/// 2. `~/.pickcourse` if home directory is available
/// 3. `.pickcourse` in current directory as fallback
pub fn config_dir() -> PathBuf {
    std::env::var(CONFIG_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .map(|h| h.join(DEFAULT_CONFIG_DIR))
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR))
        })
}

/// Get the .env.local file path.
///
/// Environment file for secrets (bot token, API URL).
pub fn env_file() -> PathBuf {
    config_dir().join(".env.local")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BotConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.review_endpoint(), "http://localhost:7070/avis");
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.review_channel, "avis");
        assert_eq!(config.welcome_channel, "bienvenue");
        assert!(config.profanity_file.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = BotConfig::from_lookup(lookup(&[
            (API_URL_ENV, "https://reviews.example.org/api/"),
            (API_TIMEOUT_ENV, "2.5"),
            (REVIEW_CHANNEL_ENV, "reviews"),
            (WELCOME_CHANNEL_ENV, "  "),
            (PROFANITY_FILE_ENV, "/etc/pickcourse/words.txt"),
        ]))
        .unwrap();

        assert_eq!(config.review_endpoint(), "https://reviews.example.org/api/avis");
        assert_eq!(config.request_timeout, Duration::from_millis(2500));
        assert_eq!(config.review_channel, "reviews");
        assert_eq!(config.welcome_channel, "bienvenue");
        assert_eq!(
            config.profanity_file,
            Some(PathBuf::from("/etc/pickcourse/words.txt"))
        );
    }

    #[test]
    fn test_invalid_url() {
        let err = BotConfig::from_lookup(lookup(&[(API_URL_ENV, "not a url")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));

        let err = BotConfig::default().with_api_url("mailto:bot@example.org").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_invalid_timeout() {
        for value in ["0", "-1", "soon", "NaN"] {
            let err = parse_timeout(value).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTimeout(_)), "{value}");
        }
    }
}
