use piano_core::enums::HomeworkStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let status = status
        .map(|raw| parse_enum::<HomeworkStatus>(raw, "status"))
        .transpose()?;

    let mut homework = match student {
        Some(student) => {
            ctx.api
                .homework_for_student(&parse_id(student), &ctx.session)
                .await?
        }
        None => ctx.api.list_homework(&ctx.session).await?,
    };
    if let Some(status) = status {
        homework.retain(|item| item.status == status);
    }
    truncate(&mut homework, limit);

    output(&homework, flags.format)
}
