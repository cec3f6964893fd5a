//! Executes `HttpRequest` values over the network.
//!
//! # Design
//! `Transport` is the only seam that performs I/O. `UreqTransport` is the
//! blocking implementation used in production; any closure with the right
//! signature also implements the trait, which keeps tests free of servers.
//!
//! A transport reports every received status as an `HttpResponse`. Only
//! exchanges that produced no status at all become a `TransportError`.

use std::io;
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Largest response body kept. Longer bodies are dropped, the status is kept.
pub const MAX_BODY_BYTES: u64 = 10 * 1024 * 1024;

/// Performs one HTTP round trip.
pub trait Transport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<F> Transport for F
where
    F: Fn(&HttpRequest) -> Result<HttpResponse, TransportError>,
{
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        self(request)
    }
}

/// Blocking transport backed by a `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Build an agent that returns 4xx/5xx as data and gives up after
    /// `timeout` for the whole exchange.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, TransportError> {
        debug!(method = %request.method, url = %request.url, "sending request");

        let result = match (request.method, request.body.as_deref()) {
            (HttpMethod::Get, None) => {
                let mut builder = self.agent.get(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.call()
            }
            (HttpMethod::Get, Some(body)) => {
                let mut builder = self.agent.get(&request.url).force_send_body();
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                builder.send(body.as_bytes())
            }
            (HttpMethod::Post, body) => {
                let mut builder = self.agent.post(&request.url);
                for (name, value) in &request.headers {
                    builder = builder.header(name.as_str(), value.as_str());
                }
                match body {
                    Some(body) => builder.send(body.as_bytes()),
                    None => builder.send_empty(),
                }
            }
        };

        let mut response = result.map_err(map_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();
        let body = body_text(
            status,
            response
                .body_mut()
                .with_config()
                .limit(MAX_BODY_BYTES)
                .read_to_vec(),
        );

        debug!(status, "received response");
        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

/// Once a status has arrived the exchange is a response, whatever the body
/// holds: invalid UTF-8 is decoded lossily and an unreadable body is empty.
fn body_text(status: u16, read: Result<Vec<u8>, ureq::Error>) -> String {
    match read {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(error) => {
            warn!(status, %error, "response body unreadable, keeping status");
            String::new()
        }
    }
}

fn map_error(error: ureq::Error) -> TransportError {
    match error {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::HostNotFound => TransportError::Connect("host not found".to_string()),
        ureq::Error::ConnectionFailed => TransportError::Connect("connection failed".to_string()),
        ureq::Error::BadUri(uri) => TransportError::InvalidUrl(uri),
        ureq::Error::Io(e) => map_io_error(e),
        other => TransportError::Other(other.to_string()),
    }
}

fn map_io_error(error: io::Error) -> TransportError {
    match error.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TransportError::Timeout,
        io::ErrorKind::ConnectionRefused
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted
        | io::ErrorKind::NotConnected
        | io::ErrorKind::AddrNotAvailable => TransportError::Connect(error.to_string()),
        _ => TransportError::Io(error.to_string()),
    }
}
