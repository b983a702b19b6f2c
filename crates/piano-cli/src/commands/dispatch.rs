use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Student { action } => commands::student::handle(&action, ctx, flags).await,
        Commands::Schedule { action } => commands::schedule::handle(&action, ctx, flags).await,
        Commands::Lesson { action } => commands::lesson::handle(&action, ctx, flags).await,
        Commands::Homework { action } => commands::homework::handle(&action, ctx, flags).await,
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Lang { action } => commands::lang::handle(&action, ctx, flags),
        Commands::Translate(args) => commands::translate::handle(&args, ctx, flags),
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags),
        Commands::Schema(_) => unreachable!("schema is pre-dispatched in main"),
    }
}
