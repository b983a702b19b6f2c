//! Language settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_language() -> String {
    "en".to_string()
}

fn default_supported() -> Vec<String> {
    vec!["en".to_string(), "zh".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Language used when no preference has been saved.
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default = "default_supported")]
    pub supported_languages: Vec<String>,

    /// External resource bundle replacing the built-in one. Empty = built-in.
    #[serde(default)]
    pub bundle_path: String,

    /// Where the language preference is persisted. Empty = user config dir.
    #[serde(default)]
    pub preference_path: String,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
            supported_languages: default_supported(),
            bundle_path: String::new(),
            preference_path: String::new(),
        }
    }
}

impl I18nConfig {
    #[must_use]
    pub fn is_supported(&self, language: &str) -> bool {
        self.supported_languages.iter().any(|l| l == language)
    }

    #[must_use]
    pub fn bundle_path(&self) -> Option<PathBuf> {
        non_empty_path(&self.bundle_path)
    }

    #[must_use]
    pub fn preference_path(&self) -> Option<PathBuf> {
        non_empty_path(&self.preference_path)
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
}
