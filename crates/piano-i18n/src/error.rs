use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error("failed to parse message bundle: {0}")]
    Parse(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported language '{language}' (supported: {})", supported.join(", "))]
    UnsupportedLanguage {
        language: String,
        supported: Vec<String>,
    },

    #[error("language preference store error: {0}")]
    PreferenceStore(String),
}
