//! Closed result sets returned by `SessionClient` operations.
//!
//! Every call yields exactly one variant. Failures are values, not `Err`s:
//! callers match on the outcome rather than propagating.

use crate::error::TransportError;
use crate::http::HttpResponse;

/// Result of `SessionClient::start_session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// 200 or 202. Carries the raw response.
    Authenticated(HttpResponse),
    /// 400.
    BadRequest,
    /// 500.
    ServerError,
    /// Any other status.
    UnknownFailure { status: u16 },
    /// No status was received.
    TransportFailure(TransportError),
}

impl SessionOutcome {
    /// Map a response status. 500 is special-cased here but not for profiles.
    pub fn from_response(response: HttpResponse) -> Self {
        match response.status {
            200 | 202 => SessionOutcome::Authenticated(response),
            400 => SessionOutcome::BadRequest,
            500 => SessionOutcome::ServerError,
            status => SessionOutcome::UnknownFailure { status },
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionOutcome::Authenticated(_))
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            SessionOutcome::TransportFailure(e) => Some(e),
            _ => None,
        }
    }

    /// Short variant name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SessionOutcome::Authenticated(_) => "authenticated",
            SessionOutcome::BadRequest => "bad_request",
            SessionOutcome::ServerError => "server_error",
            SessionOutcome::UnknownFailure { .. } => "unknown_failure",
            SessionOutcome::TransportFailure(_) => "transport_failure",
        }
    }
}

impl From<Result<HttpResponse, TransportError>> for SessionOutcome {
    fn from(result: Result<HttpResponse, TransportError>) -> Self {
        match result {
            Ok(response) => SessionOutcome::from_response(response),
            Err(e) => SessionOutcome::TransportFailure(e),
        }
    }
}

/// Result of `SessionClient::fetch_profile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// 200 or 202. Carries the raw response.
    Fetched(HttpResponse),
    /// 400.
    BadRequest,
    /// Any other status, 500 included.
    UnknownFailure { status: u16 },
    TransportFailure(TransportError),
}

impl ProfileOutcome {
    pub fn from_response(response: HttpResponse) -> Self {
        match response.status {
            200 | 202 => ProfileOutcome::Fetched(response),
            400 => ProfileOutcome::BadRequest,
            status => ProfileOutcome::UnknownFailure { status },
        }
    }

    pub fn is_fetched(&self) -> bool {
        matches!(self, ProfileOutcome::Fetched(_))
    }

    pub fn transport_error(&self) -> Option<&TransportError> {
        match self {
            ProfileOutcome::TransportFailure(e) => Some(e),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ProfileOutcome::Fetched(_) => "fetched",
            ProfileOutcome::BadRequest => "bad_request",
            ProfileOutcome::UnknownFailure { .. } => "unknown_failure",
            ProfileOutcome::TransportFailure(_) => "transport_failure",
        }
    }
}

impl From<Result<HttpResponse, TransportError>> for ProfileOutcome {
    fn from(result: Result<HttpResponse, TransportError>) -> Self {
        match result {
            Ok(response) => ProfileOutcome::from_response(response),
            Err(e) => ProfileOutcome::TransportFailure(e),
        }
    }
}

/// Result of `SessionClient::send_message`.
///
/// Message delivery has no backend contract yet, so the only variant reports
/// that explicitly instead of pretending the message went out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    NotImplemented,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    #[test]
    fn session_500_is_server_error_but_profile_500_is_unknown() {
        assert_eq!(
            SessionOutcome::from_response(response(500)),
            SessionOutcome::ServerError
        );
        assert_eq!(
            ProfileOutcome::from_response(response(500)),
            ProfileOutcome::UnknownFailure { status: 500 }
        );
    }

    #[test]
    fn success_keeps_raw_response() {
        let mut ok = response(202);
        ok.body = "welcome".to_string();
        match SessionOutcome::from_response(ok.clone()) {
            SessionOutcome::Authenticated(r) => assert_eq!(r, ok),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[test]
    fn transport_error_becomes_transport_failure() {
        let outcome: ProfileOutcome = Err(TransportError::Timeout).into();
        assert_eq!(outcome, ProfileOutcome::TransportFailure(TransportError::Timeout));
        assert_eq!(outcome.kind(), "transport_failure");
        assert_eq!(outcome.transport_error(), Some(&TransportError::Timeout));
    }

    #[test]
    fn status_outcomes_have_no_transport_error() {
        assert_eq!(SessionOutcome::from_response(response(500)).transport_error(), None);
        assert_eq!(ProfileOutcome::from_response(response(200)).transport_error(), None);
        let failed = SessionOutcome::TransportFailure(TransportError::Connect("refused".into()));
        assert!(matches!(failed.transport_error(), Some(TransportError::Connect(_))));
    }
}
