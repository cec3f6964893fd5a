//! Error types for the session client.
//!
//! # Design
//! Status codes never show up here: every HTTP status is mapped to an outcome
//! variant. `TransportError` covers the round trips that produced no status at
//! all and `ConfigError` covers clients that cannot be constructed.

/// A request that never produced an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// DNS lookup failed, the connection was refused, or the host was unreachable.
    #[error("connection failed: {0}")]
    Connect(String),

    /// The transport rejected the target URL.
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    /// Reading or writing the connection failed mid-exchange.
    #[error("i/o error: {0}")]
    Io(String),

    #[error("transport error: {0}")]
    Other(String),
}

/// Invalid `ConnectionConfig`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid primary url {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("timeout must be greater than zero")]
    ZeroTimeout,

    #[error("retry policy must allow at least one attempt")]
    ZeroAttempts,
}
