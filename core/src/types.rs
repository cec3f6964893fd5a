//! Wire payloads for the session API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login credentials sent as the JSON body of both the session handshake and
/// the profile lookup.
///
/// `Credentials::default()` is the empty pair, which is what the dashboard
/// has always sent.
#[derive(Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keep passwords out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_credentials_serialize_to_empty_pair() {
        let json = serde_json::to_value(Credentials::default()).unwrap();
        assert_eq!(json, serde_json::json!({"username": "", "password": ""}));
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("ops", "hunter2");
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("ops"));
        assert!(!rendered.contains("hunter2"));
    }
}
