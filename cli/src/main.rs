mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use lentil_core::{ProfileOutcome, SessionClient, SessionOutcome};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use settings::Settings;

fn settings_path() -> PathBuf {
    std::env::args()
        .nth(1)
        .or_else(|| std::env::var("LENTIL_CONFIG").ok())
        .unwrap_or_else(|| settings::DEFAULT_PATH.to_string())
        .into()
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let path = settings_path();
    let settings = Settings::load(&path)?;
    let client = SessionClient::connect(settings.connection)?;
    info!(config = %path.display(), secondary_url = client.secondary_url(), "client ready");

    match client.start_session(&settings.credentials) {
        SessionOutcome::Authenticated(response) => {
            info!(status = response.status, body = %response.body, "session started");
        }
        other => {
            error!(outcome = other.kind(), "session not started");
            return Ok(ExitCode::FAILURE);
        }
    }

    match client.fetch_profile(&settings.credentials, &settings.profile.id) {
        ProfileOutcome::Fetched(response) => {
            info!(status = response.status, body = %response.body, "profile fetched");
        }
        other => error!(outcome = other.kind(), "profile unavailable"),
    }

    Ok(ExitCode::SUCCESS)
}
