//! Environment-backed configuration.
//!
//! Every setting has a default, so an empty environment yields a working
//! configuration pointed at the public service. Empty values count as unset;
//! anything else that fails validation is an error rather than a silent
//! fallback.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Base URL of the public dog-breed image service.
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo/api/";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment keys read by [`ApiConfig::from_env`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEnv {
    /// Base URL override.
    BaseUrl,
    /// Request timeout in milliseconds (positive integer).
    TimeoutMs,
    /// User-Agent override.
    UserAgent,
}

impl ApiEnv {
    /// Returns the environment variable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BaseUrl => "DOG_API_BASE_URL",
            Self::TimeoutMs => "DOG_API_TIMEOUT_MS",
            Self::UserAgent => "DOG_API_USER_AGENT",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The base URL is not an absolute http(s) URL.
    #[error("{key} must be an absolute http(s) URL, got {value:?}: {reason}")]
    InvalidBaseUrl {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The timeout is not a positive integer.
    #[error("{key} must be a positive integer number of milliseconds, got {value:?}")]
    InvalidTimeout {
        /// Variable name.
        key: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Settings for talking to the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL endpoints are resolved against.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Creates a default configuration targeting `base_url`.
    #[must_use]
    pub fn for_base_url(base_url: Url) -> Self {
        Self {
            base_url,
            ..Self::default()
        }
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error when a set value fails validation.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns an error when a set value fails validation.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |env: ApiEnv| {
            lookup(env.as_str())
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(value) = read(ApiEnv::BaseUrl) {
            config.base_url = parse_base_url(&value)?;
        }
        if let Some(value) = read(ApiEnv::TimeoutMs) {
            config.timeout = parse_timeout(&value)?;
        }
        if let Some(value) = read(ApiEnv::UserAgent) {
            config.user_agent = value;
        }
        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("breedcheck/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        key: ApiEnv::BaseUrl.as_str(),
        value: value.to_string(),
        reason,
    };
    let url = Url::parse(value).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(invalid(format!("unsupported scheme {other}"))),
    }
}

fn parse_timeout(value: &str) -> Result<Duration, ConfigError> {
    match value.parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidTimeout {
            key: ApiEnv::TimeoutMs.as_str(),
            value: value.to_string(),
        }),
    }
}
