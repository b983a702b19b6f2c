//! Message bundles.
//!
//! TOML layout: one top-level table per language, nested tables flatten to
//! dotted keys.
//!
//! ```toml
//! [en.students]
//! add = "Add Student"      # en / students.add
//!
//! [zh.students]
//! add = "添加学生"          # zh / students.add
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::error::I18nError;

const BUILTIN: &str = include_str!("../locales/bundle.toml");

/// Messages keyed by language, then by dotted message key.
#[derive(Debug, Clone, Default)]
pub struct Bundle {
    languages: BTreeMap<String, HashMap<String, String>>,
}

impl Bundle {
    /// The embedded English/Chinese bundle.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_toml_str(BUILTIN).unwrap_or_else(|error| {
            tracing::error!(%error, "built-in message bundle is invalid; translations disabled");
            Self::default()
        })
    }

    /// Parse a bundle from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Parse`] if the text is not TOML, a top-level entry
    /// is not a table, or a leaf value is not a string.
    pub fn from_toml_str(text: &str) -> Result<Self, I18nError> {
        let root: toml::Table = text
            .parse()
            .map_err(|e: toml::de::Error| I18nError::Parse(e.to_string()))?;

        let mut languages = BTreeMap::new();
        for (language, value) in root {
            let toml::Value::Table(table) = value else {
                return Err(I18nError::Parse(format!(
                    "top-level entry '{language}' must be a table of messages"
                )));
            };
            let mut messages = HashMap::new();
            flatten(&language, "", table, &mut messages)?;
            languages.insert(language, messages);
        }
        Ok(Self { languages })
    }

    /// Load a bundle from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::Io`] if the file cannot be read, or
    /// [`I18nError::Parse`] if its content is invalid.
    pub fn load(path: &Path) -> Result<Self, I18nError> {
        let text = std::fs::read_to_string(path).map_err(|source| I18nError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Translation of `key` in `language`, or `key` itself when either is
    /// unknown.
    #[must_use]
    pub fn lookup<'a>(&'a self, language: &str, key: &'a str) -> &'a str {
        self.languages
            .get(language)
            .and_then(|messages| messages.get(key))
            .map_or(key, String::as_str)
    }

    #[must_use]
    pub fn has_language(&self, language: &str) -> bool {
        self.languages.contains_key(language)
    }

    /// Languages present in the bundle, sorted.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Number of messages defined for `language`.
    #[must_use]
    pub fn message_count(&self, language: &str) -> usize {
        self.languages.get(language).map_or(0, HashMap::len)
    }
}

fn flatten(
    language: &str,
    prefix: &str,
    table: toml::Table,
    out: &mut HashMap<String, String>,
) -> Result<(), I18nError> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}.{name}")
        };
        match value {
            toml::Value::String(text) => {
                out.insert(key, text);
            }
            toml::Value::Table(nested) => flatten(language, &key, nested, out)?,
            other => {
                return Err(I18nError::Parse(format!(
                    "{language}/{key}: expected a string, found {}",
                    other.type_str()
                )));
            }
        }
    }
    Ok(())
}
