use std::cmp::Reverse;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    recent: bool,
    student: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut lessons = if recent {
        ctx.api.recent_lessons(&ctx.session).await?
    } else if let Some(student) = student {
        ctx.api
            .lessons_for_student(&parse_id(student), &ctx.session)
            .await?
    } else {
        ctx.api.list_lessons(&ctx.session).await?
    };
    // Newest first, undated last.
    lessons.sort_by_key(|lesson| Reverse(lesson.date));
    truncate(&mut lessons, limit);

    output(&lessons, flags.format)
}
