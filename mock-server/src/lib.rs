use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};
use uuid::Uuid;

pub use axum::http::StatusCode;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionToken {
    pub token: Uuid,
    pub username: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub username: String,
    pub display_name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        warn!("rejected request body: {}", message);
        ErrorResponse { message }
    }
}

/// JSON extractor that answers malformed bodies with 400 instead of axum's 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ErrorResponse))]
pub struct ApiJson<T>(pub T);

/// Fixed status codes to answer with instead of the normal handlers' result.
#[derive(Clone, Copy, Debug, Default)]
pub struct StatusOverrides {
    pub session: Option<StatusCode>,
    pub profile: Option<StatusCode>,
}

impl StatusOverrides {
    pub fn session(status: StatusCode) -> Self {
        Self {
            session: Some(status),
            ..Self::default()
        }
    }

    pub fn profile(status: StatusCode) -> Self {
        Self {
            profile: Some(status),
            ..Self::default()
        }
    }
}

type Overrides = Arc<StatusOverrides>;

pub fn app() -> Router {
    app_with(StatusOverrides::default())
}

pub fn app_with(overrides: StatusOverrides) -> Router {
    Router::new()
        .route("/api", get(get_own_profile).post(start_session))
        .route("/api/{profile_id}", get(get_profile))
        .route("/messages", post(send_message))
        .with_state(Arc::new(overrides))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(
    listener: TcpListener,
    overrides: StatusOverrides,
) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(overrides)).await
}

fn forced(status: StatusCode) -> Response {
    (status, Json(serde_json::json!({ "status": status.as_u16() }))).into_response()
}

async fn start_session(
    State(overrides): State<Overrides>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Response {
    if let Some(status) = overrides.session {
        return forced(status);
    }
    info!(username = %credentials.username, "session started");
    let token = SessionToken {
        token: Uuid::new_v4(),
        username: credentials.username,
    };
    (StatusCode::OK, Json(token)).into_response()
}

async fn get_profile(
    State(overrides): State<Overrides>,
    Path(profile_id): Path<String>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Response {
    profile_response(&overrides, profile_id, credentials)
}

async fn get_own_profile(
    State(overrides): State<Overrides>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> Response {
    profile_response(&overrides, String::new(), credentials)
}

fn profile_response(overrides: &StatusOverrides, id: String, credentials: Credentials) -> Response {
    if let Some(status) = overrides.profile {
        return forced(status);
    }
    let display_name = if credentials.username.is_empty() {
        "anonymous".to_string()
    } else {
        credentials.username.clone()
    };
    info!(profile_id = %id, "profile served");
    let profile = Profile {
        id,
        username: credentials.username,
        display_name,
    };
    (StatusCode::OK, Json(profile)).into_response()
}

async fn send_message() -> StatusCode {
    StatusCode::NOT_IMPLEMENTED
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_default_missing_fields_to_empty() {
        let creds: Credentials = serde_json::from_str("{}").unwrap();
        assert_eq!(creds.username, "");
        assert_eq!(creds.password, "");
    }

    #[test]
    fn credentials_reject_wrong_types() {
        let result: Result<Credentials, _> = serde_json::from_str(r#"{"username":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn session_token_serializes_to_json() {
        let token = SessionToken {
            token: Uuid::nil(),
            username: "ops".to_string(),
        };
        let json = serde_json::to_value(&token).unwrap();
        assert_eq!(json["token"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["username"], "ops");
    }

    #[test]
    fn empty_username_gets_anonymous_display_name() {
        let response =
            profile_response(&StatusOverrides::default(), "7".to_string(), Credentials::default());
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn overrides_force_status() {
        let response = profile_response(
            &StatusOverrides::profile(StatusCode::NOT_FOUND),
            "7".to_string(),
            Credentials::default(),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
