//! Session handshake and profile lookup against the dashboard backend.
//!
//! # Design
//! `SessionClient` holds an immutable `ConnectionConfig` and a `Transport`.
//! Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and an outcome mapping that consumes the `HttpResponse`; the
//! executing method runs the round trip in between, under the configured
//! retry policy. Nothing is cached between calls.

use tracing::{debug, info, warn};
use url::Url;

use crate::config::ConnectionConfig;
use crate::error::{ConfigError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::outcome::{MessageOutcome, ProfileOutcome, SessionOutcome};
use crate::transport::{Transport, UreqTransport};
use crate::types::Credentials;

/// Blocking, stateless client for the session API.
pub struct SessionClient<T = UreqTransport> {
    config: ConnectionConfig,
    primary_url: Url,
    transport: T,
}

impl SessionClient<UreqTransport> {
    /// Build a client that talks HTTP through `ureq`, bounded by the
    /// configured timeout.
    pub fn connect(config: ConnectionConfig) -> Result<Self, ConfigError> {
        let transport = UreqTransport::new(config.timeout());
        Self::new(config, transport)
    }
}

impl<T: Transport> SessionClient<T> {
    pub fn new(config: ConnectionConfig, transport: T) -> Result<Self, ConfigError> {
        let primary_url = config.validate()?;
        Ok(Self {
            config,
            primary_url,
            transport,
        })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Data-store locator. Held for collaborators; no operation here uses it.
    pub fn secondary_url(&self) -> &str {
        &self.config.secondary_url
    }

    pub fn build_start_session(&self, credentials: &Credentials) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: self.config.primary_url.clone(),
            headers: json_headers(),
            body: Some(credentials_body(credentials)),
        }
    }

    /// The credentials travel as a GET body, which is what the backend reads.
    pub fn build_fetch_profile(&self, credentials: &Credentials, profile_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.profile_url(profile_id),
            headers: json_headers(),
            body: Some(credentials_body(credentials)),
        }
    }

    /// Primary URL with `profile_id` appended as one percent-encoded path
    /// segment. An empty id addresses the primary URL itself.
    pub fn profile_url(&self, profile_id: &str) -> String {
        if profile_id.is_empty() {
            return self.config.primary_url.clone();
        }
        let mut url = self.primary_url.clone();
        // http(s) URLs always have a path, so this never skips.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(profile_id);
        }
        url.into()
    }

    pub fn parse_start_session(&self, response: HttpResponse) -> SessionOutcome {
        SessionOutcome::from_response(response)
    }

    pub fn parse_fetch_profile(&self, response: HttpResponse) -> ProfileOutcome {
        ProfileOutcome::from_response(response)
    }

    /// POST `credentials` to the primary URL.
    pub fn start_session(&self, credentials: &Credentials) -> SessionOutcome {
        let request = self.build_start_session(credentials);
        debug!(url = %request.url, username = %credentials.username, "starting session");

        let outcome: SessionOutcome = self
            .config
            .retry
            .run("start_session", || self.transport.execute(&request).into());
        log_outcome("start_session", outcome.kind(), outcome.transport_error());
        outcome
    }

    /// GET the profile for `profile_id`, sending `credentials` as the body.
    pub fn fetch_profile(&self, credentials: &Credentials, profile_id: &str) -> ProfileOutcome {
        let request = self.build_fetch_profile(credentials, profile_id);
        debug!(url = %request.url, profile_id, "fetching profile");

        let outcome: ProfileOutcome = self
            .config
            .retry
            .run("fetch_profile", || self.transport.execute(&request).into());
        log_outcome("fetch_profile", outcome.kind(), outcome.transport_error());
        outcome
    }

    /// Message delivery has no backend endpoint. Reports that and sends nothing.
    pub fn send_message(&self, message: &str) -> MessageOutcome {
        warn!(len = message.len(), "send_message is not implemented; message dropped");
        MessageOutcome::NotImplemented
    }
}

fn json_headers() -> Vec<(String, String)> {
    vec![("content-type".to_string(), "application/json".to_string())]
}

fn credentials_body(credentials: &Credentials) -> String {
    serde_json::json!({
        "username": credentials.username,
        "password": credentials.password,
    })
    .to_string()
}

fn log_outcome(operation: &str, kind: &str, transport_error: Option<&TransportError>) {
    match transport_error {
        Some(error) => warn!(operation, %error, "transport failure"),
        None => info!(operation, outcome = kind, "request finished"),
    }
}
