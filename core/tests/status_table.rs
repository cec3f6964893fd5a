//! Verify the status-to-outcome table against `test-vectors/status_table.json`.
//!
//! Each case names a status and the outcome kind both operations must report.
//! Responses come from a closure transport, so no server is involved.

use lentil_core::{
    ConnectionConfig, Credentials, HttpRequest, HttpResponse, ProfileOutcome, SessionClient,
    SessionOutcome, TransportError,
};

const BASE_URL: &str = "http://localhost:3000/api";

fn client_answering(
    status: u16,
) -> SessionClient<impl Fn(&HttpRequest) -> Result<HttpResponse, TransportError>> {
    let transport = move |_: &HttpRequest| -> Result<HttpResponse, TransportError> {
        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: format!("status {status}"),
        })
    };
    SessionClient::new(ConnectionConfig::new(BASE_URL, ""), transport).unwrap()
}

#[test]
fn status_table_vectors() {
    let raw = include_str!("../../test-vectors/status_table.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let status = case["status"].as_u64().unwrap() as u16;
        let client = client_answering(status);

        let session = client.start_session(&Credentials::default());
        assert_eq!(session.kind(), case["start_session"].as_str().unwrap(), "{name}: start_session");

        let profile = client.fetch_profile(&Credentials::default(), "");
        assert_eq!(profile.kind(), case["fetch_profile"].as_str().unwrap(), "{name}: fetch_profile");
    }
}

#[test]
fn unknown_failure_keeps_status() {
    let client = client_answering(418);
    assert_eq!(
        client.start_session(&Credentials::default()),
        SessionOutcome::UnknownFailure { status: 418 }
    );
    assert_eq!(
        client.fetch_profile(&Credentials::default(), "x"),
        ProfileOutcome::UnknownFailure { status: 418 }
    );
}

#[test]
fn success_variants_carry_the_response_body() {
    let client = client_answering(202);
    match client.start_session(&Credentials::default()) {
        SessionOutcome::Authenticated(response) => assert_eq!(response.body, "status 202"),
        other => panic!("unexpected outcome: {other:?}"),
    }
    match client.fetch_profile(&Credentials::default(), "1") {
        ProfileOutcome::Fetched(response) => assert_eq!(response.body, "status 202"),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
