use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("not authenticated; set auth.username and auth.password or PIANO_AUTH__USERNAME/PIANO_AUTH__PASSWORD")]
    NotAuthenticated,

    #[error("invalid credentials: {0}")]
    InvalidCredentials(String),
}
