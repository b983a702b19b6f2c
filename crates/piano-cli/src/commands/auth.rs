use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuthStatus {
    authenticated: bool,
    user: Option<String>,
    language: String,
    base_url: String,
}

/// Handle `piano auth`.
pub fn handle(action: &AuthCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        AuthCommands::Status => output(
            &AuthStatus {
                authenticated: ctx.session.is_authenticated(),
                user: ctx.session.current_user().map(ToString::to_string),
                language: ctx.session.language().to_string(),
                base_url: ctx.api.base_url().to_string(),
            },
            flags.format,
        ),
    }
}
