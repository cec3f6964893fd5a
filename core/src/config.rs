//! Connection settings owned by a `SessionClient`.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::retry::RetryPolicy;

pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Where and how the client connects.
///
/// `secondary_url` locates the metrics data store. It is carried for the
/// presentation layer but no client operation reads it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub primary_url: String,
    #[serde(default)]
    pub secondary_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub retry: RetryPolicy,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl ConnectionConfig {
    pub fn new(primary_url: impl Into<String>, secondary_url: impl Into<String>) -> Self {
        Self {
            primary_url: primary_url.into(),
            secondary_url: secondary_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Check the settings and parse the primary URL.
    pub fn validate(&self) -> Result<Url, ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        let invalid = |reason: String| ConfigError::InvalidUrl {
            url: self.primary_url.clone(),
            reason,
        };
        let url = Url::parse(&self.primary_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(invalid(format!("unsupported scheme {other:?}"))),
        }
    }
}
