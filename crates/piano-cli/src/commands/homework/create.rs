use piano_core::entities::Homework;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(
    student: &str,
    title: &str,
    description: Option<String>,
    due: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let homework = Homework {
        student_id: Some(parse_id(student)),
        title: title.to_string(),
        description,
        due_date: due.map(|raw| parse_date(raw, "due")).transpose()?,
        ..Homework::default()
    };

    let created = ctx.api.create_homework(&homework, &ctx.session).await?;
    output(&created, flags.format)
}
