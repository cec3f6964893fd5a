//! Blocking session client for the Lentil dashboard backend.
//!
//! # Overview
//! `SessionClient` performs the login handshake (`start_session`) and the
//! profile lookup (`fetch_profile`) against a configured endpoint, mapping
//! each HTTP status to a closed outcome enum. Transport failures are outcomes
//! too, so no call panics or propagates an error past the client.
//!
//! # Design
//! - `SessionClient` holds only its `ConnectionConfig` and a `Transport`.
//! - Requests are built as plain `HttpRequest` data; `Transport` is the sole
//!   I/O seam (`UreqTransport` in production, closures in tests).
//! - `RetryPolicy` bounds retries of transient outcomes; the default makes a
//!   single attempt.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod outcome;
pub mod retry;
pub mod transport;
pub mod types;

pub use client::SessionClient;
pub use config::ConnectionConfig;
pub use error::{ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use outcome::{MessageOutcome, ProfileOutcome, SessionOutcome};
pub use retry::RetryPolicy;
pub use transport::{Transport, UreqTransport};
pub use types::Credentials;
