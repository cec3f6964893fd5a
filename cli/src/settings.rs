//! `lentil.toml` settings file.

use std::path::Path;

use anyhow::Context;
use lentil_core::{ConnectionConfig, Credentials};
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "lentil.toml";

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub credentials: Credentials,
    #[serde(default)]
    pub profile: ProfileSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileSettings {
    #[serde(default)]
    pub id: String,
}

impl Settings {
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        toml::from_str(raw).context("invalid settings")
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("in {}", path.display()))
    }
}
