use std::sync::Arc;

use crate::bundle::Bundle;
use crate::error::I18nError;

/// Active language plus the bundle it reads from.
#[derive(Debug, Clone)]
pub struct Translator {
    bundle: Arc<Bundle>,
    language: String,
    supported: Vec<String>,
}

impl Translator {
    /// Build a translator starting in `language`.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLanguage`] if `language` is not in
    /// `supported`.
    pub fn new(
        bundle: Arc<Bundle>,
        language: &str,
        supported: Vec<String>,
    ) -> Result<Self, I18nError> {
        let mut translator = Self {
            bundle,
            language: String::new(),
            supported,
        };
        translator.set_language(language)?;
        Ok(translator)
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn supported(&self) -> &[String] {
        &self.supported
    }

    /// Switch languages.
    ///
    /// # Errors
    ///
    /// Returns [`I18nError::UnsupportedLanguage`] and leaves the current
    /// language untouched if `language` is not supported.
    pub fn set_language(&mut self, language: &str) -> Result<(), I18nError> {
        if !self.supported.iter().any(|s| s == language) {
            return Err(I18nError::UnsupportedLanguage {
                language: language.to_string(),
                supported: self.supported.clone(),
            });
        }
        if !self.bundle.has_language(language) {
            tracing::warn!(language, "no messages bundled for language; keys will show untranslated");
        }
        self.language = language.to_string();
        Ok(())
    }

    /// Translate `key`, or return it unchanged if no translation exists.
    #[must_use]
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        self.bundle.lookup(&self.language, key)
    }

    /// Translate `key` and substitute `{name}` placeholders from `args`.
    #[must_use]
    pub fn t_with(&self, key: &str, args: &[(&str, &str)]) -> String {
        substitute(self.t(key), args)
    }
}

/// Replace each `{name}` in `template` with its value in one left-to-right
/// pass. Substituted text is never rescanned; unknown placeholders are kept.
fn substitute(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let name = &after[..close];
            args.iter()
                .find(|(candidate, _)| *candidate == name)
                .map(|(_, value)| (*value, close))
        });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
