mod create;
mod delete;
mod list;
mod suggest;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ScheduleCommands;
use crate::context::AppContext;

/// Handle `piano schedule`.
pub async fn handle(
    action: &ScheduleCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ScheduleCommands::List { date, limit } => {
            list::run(date.as_deref(), *limit, ctx, flags).await
        }
        ScheduleCommands::Today => list::today(ctx, flags).await,
        ScheduleCommands::Create {
            student,
            start,
            end,
            location,
            notes,
            recurring,
        } => {
            let params = create::Params {
                student: student.clone(),
                start: start.clone(),
                end: end.clone(),
                location: location.clone(),
                notes: notes.clone(),
                recurring: *recurring,
            };
            create::run(params, ctx, flags).await
        }
        ScheduleCommands::Update {
            id,
            student,
            start,
            end,
            location,
            notes,
            recurring,
        } => {
            let params = update::Params {
                id: id.clone(),
                student: student.clone(),
                start: start.clone(),
                end: end.clone(),
                location: location.clone(),
                notes: notes.clone(),
                recurring: *recurring,
            };
            update::run(params, ctx, flags).await
        }
        ScheduleCommands::Delete { id } => delete::run(id, ctx, flags).await,
        ScheduleCommands::Suggest {
            student,
            from,
            to,
            duration,
        } => suggest::run(student, from, to, *duration, ctx, flags).await,
    }
}
