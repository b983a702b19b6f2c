//! Per-session state.
//!
//! Built once by the composition root and handed by reference to each API
//! call; logout clears it. There is no ambient global.

use std::fmt;

use crate::credentials::Credentials;
use crate::error::AuthError;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Clone)]
pub struct SessionContext {
    auth_header: Option<String>,
    current_user: Option<String>,
    language: String,
}

impl SessionContext {
    /// An unauthenticated session speaking `language`.
    #[must_use]
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            auth_header: None,
            current_user: None,
            language: language.into(),
        }
    }

    /// An authenticated session.
    #[must_use]
    pub fn with_credentials(credentials: &Credentials, language: impl Into<String>) -> Self {
        let mut session = Self::new(language);
        session.apply(credentials);
        session
    }

    /// Replace the auth header and current user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if `username` is empty or
    /// malformed; the session is left unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let credentials = Credentials::new(username, password)?;
        self.apply(&credentials);
        tracing::debug!(user = username, "session logged in");
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            tracing::debug!(%user, "session logged out");
        }
        self.auth_header = None;
    }

    fn apply(&mut self, credentials: &Credentials) {
        self.auth_header = Some(credentials.header_value());
        self.current_user = Some(credentials.username.clone());
    }

    #[must_use]
    pub fn auth_header(&self) -> Option<&str> {
        self.auth_header.as_deref()
    }

    /// Like [`auth_header`](Self::auth_header) but an error when logged out.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NotAuthenticated` if no credentials are set.
    pub fn require_auth_header(&self) -> Result<&str, AuthError> {
        self.auth_header().ok_or(AuthError::NotAuthenticated)
    }

    #[must_use]
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.auth_header.is_some()
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE)
    }
}

impl fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionContext")
            .field("auth_header", &self.auth_header.as_ref().map(|_| "***"))
            .field("current_user", &self.current_user)
            .field("language", &self.language)
            .finish()
    }
}
