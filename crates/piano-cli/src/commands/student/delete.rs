use crate::cli::GlobalFlags;
use crate::commands::shared::delete::confirm_and_delete;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;

pub async fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let student_id = parse_id(id);
    // Fetch first so the prompt can name the student.
    let student = ctx.api.get_student(&student_id, &ctx.session).await?;
    let prompt = ctx
        .translator
        .t_with("confirm.deleteStudent", &[("name", &student.name)]);

    confirm_and_delete(id, &prompt, ctx, flags, || {
        ctx.api.delete_student(&student_id, &ctx.session)
    })
    .await
}
