use piano_core::entities::Lesson;
use piano_core::enums::Difficulty;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub student: String,
    pub date: String,
    pub duration: u32,
    pub difficulty: String,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub completed: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lesson = Lesson {
        id: None,
        student_id: Some(parse_id(&params.student)),
        date: Some(parse_date(&params.date, "date")?),
        duration: params.duration,
        difficulty: parse_enum::<Difficulty>(&params.difficulty, "difficulty")?,
        title: params.title,
        notes: params.notes,
        completed: params.completed,
    };

    let created = ctx.api.create_lesson(&lesson, &ctx.session).await?;
    output(&created, flags.format)
}
