mod create;
mod delete;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StudentCommands;
use crate::context::AppContext;

/// Handle `piano student`.
pub async fn handle(
    action: &StudentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StudentCommands::List { search, limit } => {
            list::run(search.as_deref(), *limit, ctx, flags).await
        }
        StudentCommands::Get { id } => get::run(id, ctx, flags).await,
        StudentCommands::Create {
            name,
            age,
            grade,
            email,
            phone,
            notes,
            rate,
            lesson_duration,
            payment_terms,
        } => {
            let params = create::Params {
                name: name.clone(),
                age: *age,
                grade: grade.clone(),
                email: email.clone(),
                phone: phone.clone(),
                notes: notes.clone(),
                rate: *rate,
                lesson_duration: *lesson_duration,
                payment_terms: payment_terms.clone(),
            };
            create::run(params, ctx, flags).await
        }
        StudentCommands::Update {
            id,
            name,
            age,
            grade,
            email,
            phone,
            notes,
        } => {
            let params = update::Params {
                id: id.clone(),
                name: name.clone(),
                age: *age,
                grade: grade.clone(),
                email: email.clone(),
                phone: phone.clone(),
                notes: notes.clone(),
            };
            update::run(params, ctx, flags).await
        }
        StudentCommands::Delete { id } => delete::run(id, ctx, flags).await,
    }
}
