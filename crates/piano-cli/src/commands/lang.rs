use anyhow::Context;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LangCommands;
use crate::context::{AppContext, LanguageSource};
use crate::output::output;

#[derive(Debug, Serialize)]
struct LanguageStatus {
    language: String,
    source: LanguageSource,
    supported: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    saved_to: Option<String>,
}

/// Handle `piano lang`.
pub fn handle(
    action: &LangCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LangCommands::Show => output(&status(ctx, None), flags.format),
        LangCommands::List => output(&ctx.translator.supported(), flags.format),
        LangCommands::Set { code } => set(code, ctx, flags),
    }
}

fn set(code: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.set_language(code)?;

    let saved_to = match &ctx.language_store {
        Some(store) => {
            store
                .store(code)
                .with_context(|| format!("failed to save language preference '{code}'"))?;
            tracing::info!(language = code, path = %store.path().display(), "language preference saved");
            Some(store.path().display().to_string())
        }
        None => {
            tracing::warn!(language = code, "no preference location; language applies to this run only");
            None
        }
    };

    // Without a store the switch only lasts for this run.
    ctx.language_source = if saved_to.is_some() {
        LanguageSource::Saved
    } else {
        LanguageSource::Flag
    };

    output(&status(ctx, saved_to), flags.format)
}

fn status(ctx: &AppContext, saved_to: Option<String>) -> LanguageStatus {
    LanguageStatus {
        language: ctx.translator.language().to_string(),
        source: ctx.language_source,
        supported: ctx.translator.supported().to_vec(),
        saved_to,
    }
}
