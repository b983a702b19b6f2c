use std::future::Future;

use piano_api::{ApiError, DeleteOutcome, confirm_delete};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct DeleteResponse {
    id: String,
    deleted: bool,
    message: String,
}

/// Ask `prompt` and run `delete` on yes; print what happened either way.
pub async fn confirm_and_delete<F, Fut>(
    id: &str,
    prompt: &str,
    ctx: &AppContext,
    flags: &GlobalFlags,
    delete: F,
) -> anyhow::Result<()>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    let outcome = confirm_delete(&ctx.prompter, prompt, delete).await?;
    let (deleted, key) = match outcome {
        DeleteOutcome::Deleted => (true, "common.deleted"),
        DeleteOutcome::Declined => (false, "common.cancelled"),
    };
    output(
        &DeleteResponse {
            id: id.to_string(),
            deleted,
            message: ctx.translator.t(key).to_string(),
        },
        flags.format,
    )
}
