use crate::cli::GlobalFlags;
use crate::commands::shared::delete::confirm_and_delete;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry_id = parse_id(id);
    let prompt = ctx.translator.t("confirm.deleteSchedule");

    confirm_and_delete(id, prompt, ctx, flags, || {
        ctx.api.delete_schedule(&entry_id, &ctx.session)
    })
    .await
}
