use std::sync::Arc;

use anyhow::Context;
use piano_api::ApiClient;
use piano_auth::{Credentials, SessionContext};
use piano_config::PianoConfig;
use piano_i18n::{Bundle, LanguageStore, Translator};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::Prompter;

/// Where the active language came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageSource {
    Flag,
    Saved,
    Default,
}

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: PianoConfig,
    pub api: Arc<ApiClient>,
    pub session: SessionContext,
    pub translator: Translator,
    pub language_store: Option<LanguageStore>,
    pub language_source: LanguageSource,
    pub prompter: Prompter,
}

impl AppContext {
    /// Build the client, session, and translator from configuration.
    pub fn init(config: PianoConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let bundle = match config.i18n.bundle_path() {
            Some(path) => Bundle::load(&path)
                .with_context(|| format!("failed to load message bundle {}", path.display()))?,
            None => Bundle::builtin(),
        };

        let language_store = match config.i18n.preference_path() {
            Some(path) => Some(LanguageStore::new(path)),
            None => LanguageStore::default_location()
                .map_err(|error| {
                    tracing::warn!(%error, "language preference will not be saved");
                })
                .ok(),
        };

        let (language, language_source) =
            resolve_language(flags.lang.as_deref(), language_store.as_ref(), &config);

        let translator = Translator::new(
            Arc::new(bundle),
            &language,
            config.i18n.supported_languages.clone(),
        )?;

        let session = if config.auth.is_configured() {
            let credentials = Credentials::new(&config.auth.username, &config.auth.password)
                .context("invalid auth.username")?;
            SessionContext::with_credentials(&credentials, translator.language())
        } else {
            tracing::warn!(
                "no credentials configured; set PIANO_AUTH__USERNAME and PIANO_AUTH__PASSWORD"
            );
            SessionContext::new(translator.language())
        };

        let api = Arc::new(
            ApiClient::new(&config.api, &config.cache)
                .context("failed to initialize API client")?,
        );

        let prompter = if flags.yes {
            Prompter::AssumeYes
        } else {
            Prompter::Stdin {
                hint: translator.t("confirm.yesNo").to_string(),
            }
        };

        Ok(Self {
            config,
            api,
            session,
            translator,
            language_store,
            language_source,
            prompter,
        })
    }

    /// Switch the active language for the rest of this run.
    pub fn set_language(&mut self, code: &str) -> anyhow::Result<()> {
        self.translator.set_language(code)?;
        self.session.set_language(code);
        Ok(())
    }
}

fn resolve_language(
    flag: Option<&str>,
    store: Option<&LanguageStore>,
    config: &PianoConfig,
) -> (String, LanguageSource) {
    if let Some(code) = flag {
        return (code.to_string(), LanguageSource::Flag);
    }
    let saved = store.and_then(LanguageStore::load);
    let source = match &saved {
        Some(code) if config.i18n.is_supported(code) => LanguageSource::Saved,
        _ => LanguageSource::Default,
    };
    let language = piano_i18n::initial_language(
        saved,
        &config.i18n.default_language,
        &config.i18n.supported_languages,
    );
    (language, source)
}
