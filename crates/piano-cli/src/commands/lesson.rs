mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LessonCommands;
use crate::context::AppContext;

/// Handle `piano lesson`.
pub async fn handle(
    action: &LessonCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LessonCommands::List {
            recent,
            student,
            limit,
        } => list::run(*recent, student.as_deref(), *limit, ctx, flags).await,
        LessonCommands::Get { id } => get::run(id, ctx, flags).await,
        LessonCommands::Create {
            student,
            date,
            duration,
            difficulty,
            title,
            notes,
            completed,
        } => {
            let params = create::Params {
                student: student.clone(),
                date: date.clone(),
                duration: *duration,
                difficulty: difficulty.clone(),
                title: title.clone(),
                notes: notes.clone(),
                completed: *completed,
            };
            create::run(params, ctx, flags).await
        }
        LessonCommands::Update {
            id,
            student,
            date,
            duration,
            difficulty,
            title,
            notes,
            completed,
        } => {
            let params = update::Params {
                id: id.clone(),
                student: student.clone(),
                date: date.clone(),
                duration: *duration,
                difficulty: difficulty.clone(),
                title: title.clone(),
                notes: notes.clone(),
                completed: *completed,
            };
            update::run(params, ctx, flags).await
        }
        LessonCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
