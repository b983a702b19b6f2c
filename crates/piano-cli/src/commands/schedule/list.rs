use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_date;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    date: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);

    let mut entries = match date {
        Some(raw) => {
            let day = parse_date(raw, "date")?;
            ctx.api.list_schedules_on(day, &ctx.session).await?
        }
        None => ctx.api.list_schedules(&ctx.session).await?,
    };
    entries.sort_by_key(|entry| entry.start_time);
    truncate(&mut entries, limit);

    output(&entries, flags.format)
}

pub async fn today(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut entries = ctx.api.today_schedule(&ctx.session).await?;
    entries.sort_by_key(|entry| entry.start_time);
    output(&entries, flags.format)
}
