//! # piano-i18n
//!
//! Client-side internationalization:
//! - [`Bundle`]: messages keyed by language and dotted message key, loaded
//!   from TOML. A built-in bundle (English, Chinese) is embedded.
//! - [`Translator`]: the active language plus a bundle. A missing
//!   translation renders as the key itself.
//! - [`LanguageStore`]: durable language preference that survives across runs.

mod bundle;
mod error;
mod preference;
mod translator;

pub use bundle::Bundle;
pub use error::I18nError;
pub use preference::LanguageStore;
pub use translator::Translator;

/// Pick the language to start with.
///
/// A saved preference wins when it is still supported; otherwise the
/// configured default is used.
#[must_use]
pub fn initial_language(saved: Option<String>, default: &str, supported: &[String]) -> String {
    match saved {
        Some(language) if supported.iter().any(|s| *s == language) => language,
        Some(language) => {
            tracing::warn!(%language, "saved language preference is not supported; using default");
            default.to_string()
        }
        None => default.to_string(),
    }
}
