use piano_core::entities::Lesson;
use piano_core::enums::Difficulty;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub student: Option<String>,
    pub date: Option<String>,
    pub duration: Option<u32>,
    pub difficulty: Option<String>,
    pub title: Option<String>,
    pub notes: Option<String>,
    pub completed: Option<bool>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let id = parse_id(&params.id);

    let mut lesson = ctx.api.get_lesson(&id, &ctx.session).await?;
    apply(&mut lesson, params)?;

    let saved = ctx.api.update_lesson(&id, &lesson, &ctx.session).await?;
    output(&saved, flags.format)
}

fn apply(lesson: &mut Lesson, params: Params) -> anyhow::Result<()> {
    if let Some(student) = params.student {
        lesson.student_id = Some(parse_id(&student));
    }
    if let Some(date) = params.date {
        lesson.date = Some(parse_date(&date, "date")?);
    }
    if let Some(duration) = params.duration {
        lesson.duration = duration;
    }
    if let Some(difficulty) = params.difficulty {
        lesson.difficulty = parse_enum::<Difficulty>(&difficulty, "difficulty")?;
    }
    if params.title.is_some() {
        lesson.title = params.title;
    }
    if params.notes.is_some() {
        lesson.notes = params.notes;
    }
    if let Some(completed) = params.completed {
        lesson.completed = completed;
    }
    Ok(())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.student.is_none()
        && params.date.is_none()
        && params.duration.is_none()
        && params.difficulty.is_none()
        && params.title.is_none()
        && params.notes.is_none()
        && params.completed.is_none()
    {
        anyhow::bail!(
            "At least one of --student, --date, --duration, --difficulty, --title, --notes, or --completed must be provided"
        );
    }
    Ok(())
}
