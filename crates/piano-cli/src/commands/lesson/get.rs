use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lesson = ctx.api.get_lesson(&parse_id(id), &ctx.session).await?;
    output(&lesson, flags.format)
}
