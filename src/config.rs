//! Client configuration
//!
//! A small, explicit configuration object replaces any process-wide
//! singleton: whoever builds the tool surface constructs a config, builds a
//! client from it, and passes the client down.

use std::time::Duration;

/// Default search API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.syllabus.zen.ac.jp";

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "ZEN_SYLLABUS_BASE_URL";

/// Environment variable overriding the request timeout (seconds)
pub const ENV_TIMEOUT_SECS: &str = "ZEN_SYLLABUS_TIMEOUT_SECS";

/// Configuration for the syllabus client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyllabusConfig {
    /// Base URL of the syllabus API
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for SyllabusConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("zen-syllabus-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl SyllabusConfig {
    /// Create a config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base_url) = std::env::var(ENV_BASE_URL) {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }
        if let Ok(secs) = std::env::var(ENV_TIMEOUT_SECS) {
            if let Ok(secs) = secs.parse::<u64>() {
                config.timeout = Duration::from_secs(secs);
            }
        }
        config
    }

    /// Override the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
