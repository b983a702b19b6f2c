//! Backend credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    #[serde(default)]
    pub username: String,

    #[serde(default)]
    pub password: String,
}

impl AuthConfig {
    /// Check if both username and password are present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("username", &self.username)
            .field("password", &if self.password.is_empty() { "" } else { "***" })
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        assert!(!AuthConfig::default().is_configured());
    }

    #[test]
    fn not_configured_when_missing_password() {
        let config = AuthConfig {
            username: "admin".into(),
            ..Default::default()
        };
        assert!(!config.is_configured());
    }

    #[test]
    fn debug_redacts_password() {
        let config = AuthConfig {
            username: "admin".into(),
            password: "admin123".into(),
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("admin123"));
    }
}
