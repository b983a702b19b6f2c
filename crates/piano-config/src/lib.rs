//! # piano-config
//!
//! Layered configuration loading for the piano teacher client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PIANO_*` prefix, `__` as separator)
//! 2. Project-level `.piano/config.toml`
//! 3. User-level `~/.config/piano-teacher/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PIANO_API__BASE_URL` -> `api.base_url`, `PIANO_CACHE__TTL_MS` -> `cache.ttl_ms`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use piano_config::PianoConfig;
//!
//! let config = PianoConfig::load_with_dotenv().expect("config");
//! println!("API: {}", config.api.base_url);
//! ```

mod api;
mod auth;
mod cache;
mod error;
mod general;
mod i18n;

pub use api::ApiConfig;
pub use auth::AuthConfig;
pub use cache::CacheConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use i18n::I18nConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every setting.
pub const ENV_PREFIX: &str = "PIANO_";

/// Directory name under the user config dir.
pub const APP_DIR: &str = "piano-teacher";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PianoConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub i18n: I18nConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PianoConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is out
    /// of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".piano/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Cross-field checks that serde defaults cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.cache.enabled && self.cache.ttl_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "cache.ttl_ms".into(),
                reason: "must be greater than 0 while the cache is enabled".into(),
            });
        }
        if !self.i18n.is_supported(&self.i18n.default_language) {
            return Err(ConfigError::InvalidValue {
                field: "i18n.default_language".into(),
                reason: format!(
                    "'{}' is not one of {:?}",
                    self.i18n.default_language, self.i18n.supported_languages
                ),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    #[must_use]
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(APP_DIR).join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available), else tries the current
    /// dir. Silently does nothing if no `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // crate -> crates/ -> workspace root
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PianoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert!(config.cache.enabled);
        assert!(!config.auth.is_configured());
    }

    #[test]
    fn figment_builds_without_files() {
        let config = PianoConfig::from_figment(&PianoConfig::figment())
            .expect("should extract defaults");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.cache.ttl_ms, 300_000);
    }

    #[test]
    fn zero_ttl_rejected_only_when_enabled() {
        let mut config = PianoConfig::default();
        config.cache.ttl_ms = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { ref field, .. }) if field == "cache.ttl_ms"
        ));

        config.cache.enabled = false;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unsupported_default_language_rejected() {
        let mut config = PianoConfig::default();
        config.i18n.default_language = "fr".into();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("i18n.default_language"));
    }
}
