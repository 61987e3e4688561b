use std::{env, time::Duration};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Occurrences returned when the query omits `count` (default: 5)
    pub default_occurrences: usize,
    /// Upper bound on a single occurrence expansion (default: 500)
    pub max_occurrences: usize,
    /// Per-request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DEFAULT_OCCURRENCES` - Default occurrence count (default: 5)
    /// - `MAX_OCCURRENCES` - Maximum occurrence count (default: 500)
    /// - `REQUEST_TIMEOUT_SECONDS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self {
            default_occurrences: env::var("DEFAULT_OCCURRENCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            max_occurrences: env::var("MAX_OCCURRENCES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            request_timeout_seconds: env::var("REQUEST_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
