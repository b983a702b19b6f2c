use piano_core::entities::SuggestionQuery;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student: &str,
    from: &str,
    to: &str,
    duration: u32,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let query = SuggestionQuery {
        student_id: parse_id(student),
        start_date: parse_date(from, "from")?,
        end_date: parse_date(to, "to")?,
        duration,
    };
    if query.end_date < query.start_date {
        anyhow::bail!("--to {to} is before --from {from}");
    }

    let mut suggestions = ctx.api.scheduling_suggestions(&query, &ctx.session).await?;
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    output(&suggestions, flags.format)
}
