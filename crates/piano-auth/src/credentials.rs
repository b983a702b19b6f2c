use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::AuthError;

/// Username/password pair for HTTP Basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if `username` is empty or
    /// contains a `:` (which would corrupt the Basic pair).
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Result<Self, AuthError> {
        let username = username.into();
        if username.is_empty() {
            return Err(AuthError::InvalidCredentials("username is empty".into()));
        }
        if username.contains(':') {
            return Err(AuthError::InvalidCredentials(
                "username must not contain ':'".into(),
            ));
        }
        Ok(Self {
            username,
            password: password.into(),
        })
    }

    /// `Authorization` header value for these credentials.
    #[must_use]
    pub fn header_value(&self) -> String {
        basic_auth_header(&self.username, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// `"Basic " + base64("{username}:{password}")`.
#[must_use]
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
