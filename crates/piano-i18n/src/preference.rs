//! Durable language preference.
//!
//! The preference is a single line in a small file, by default
//! `<config dir>/piano-teacher/language`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::I18nError;

const APP_DIR: &str = "piano-teacher";
const PREFERENCE_FILE_NAME: &str = "language";

/// File-backed storage for the preferred language.
#[derive(Debug, Clone)]
pub struct LanguageStore {
    path: PathBuf,
}

impl LanguageStore {
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store under the user config directory.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::PreferenceStore`] if the platform has no config
    /// directory.
    pub fn default_location() -> Result<Self, I18nError> {
        dirs::config_dir()
            .map(|dir| Self::new(dir.join(APP_DIR).join(PREFERENCE_FILE_NAME)))
            .ok_or_else(|| {
                I18nError::PreferenceStore(
                    "config directory not found; cannot persist language".into(),
                )
            })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The saved language, if any. Unreadable or blank files count as unset.
    #[must_use]
    pub fn load(&self) -> Option<String> {
        fs::read_to_string(&self.path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Persist `language`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::PreferenceStore`] if the file cannot be written.
    pub fn store(&self, language: &str) -> Result<(), I18nError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                I18nError::PreferenceStore(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        fs::write(&self.path, format!("{language}\n")).map_err(|e| {
            I18nError::PreferenceStore(format!("write {}: {e}", self.path.display()))
        })?;
        tracing::debug!(language, path = %self.path.display(), "saved language preference");
        Ok(())
    }

    /// Forget the saved language.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::PreferenceStore`] if the file exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), I18nError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                I18nError::PreferenceStore(format!("delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}
