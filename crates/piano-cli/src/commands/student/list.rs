use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut students = match search {
        Some(term) => ctx.api.search_students(term, &ctx.session).await?,
        None => ctx.api.list_students(&ctx.session).await?,
    };
    truncate(&mut students, limit);

    output(&students, flags.format)
}
