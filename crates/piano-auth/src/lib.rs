//! # piano-auth
//!
//! HTTP Basic credentials and the [`SessionContext`] that carries the
//! authorization header, current user, and active language through every
//! backend call. Nothing here is written to disk.

pub mod credentials;
pub mod error;
pub mod session;

pub use credentials::{Credentials, basic_auth_header};
pub use error::AuthError;
pub use session::SessionContext;
