mod create;
mod delete;
mod get;
mod list;
mod toggle;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::HomeworkCommands;
use crate::context::AppContext;

/// Handle `piano homework`.
pub async fn handle(
    action: &HomeworkCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HomeworkCommands::List {
            student,
            status,
            limit,
        } => list::run(student.as_deref(), status.as_deref(), *limit, ctx, flags).await,
        HomeworkCommands::Get { id } => get::run(id, ctx, flags).await,
        HomeworkCommands::Create {
            student,
            title,
            description,
            due,
        } => {
            create::run(
                student,
                title,
                description.clone(),
                due.as_deref(),
                ctx,
                flags,
            )
            .await
        }
        HomeworkCommands::Update {
            id,
            student,
            title,
            description,
            due,
            status,
        } => {
            let params = update::Params {
                id: id.clone(),
                student: student.clone(),
                title: title.clone(),
                description: description.clone(),
                due: due.clone(),
                status: status.clone(),
            };
            update::run(params, ctx, flags).await
        }
        HomeworkCommands::Toggle { id } => toggle::run(id, ctx, flags).await,
        HomeworkCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
