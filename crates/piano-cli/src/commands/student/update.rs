use piano_core::entities::Student;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_id;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub name: Option<String>,
    pub age: Option<u32>,
    pub grade: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let id = parse_id(&params.id);

    let mut student = ctx.api.get_student(&id, &ctx.session).await?;
    apply(&mut student, params);

    let saved = ctx.api.update_student(&id, &student, &ctx.session).await?;
    output(&saved, flags.format)
}

fn apply(student: &mut Student, params: Params) {
    if let Some(name) = params.name {
        student.name = name;
    }
    if params.age.is_some() {
        student.age = params.age;
    }
    if params.grade.is_some() {
        student.grade = params.grade;
    }
    if params.email.is_some() {
        student.email = params.email;
    }
    if params.phone.is_some() {
        student.phone = params.phone;
    }
    if params.notes.is_some() {
        student.notes = params.notes;
    }
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.name.is_none()
        && params.age.is_none()
        && params.grade.is_none()
        && params.email.is_none()
        && params.phone.is_none()
        && params.notes.is_none()
    {
        anyhow::bail!(
            "At least one of --name, --age, --grade, --email, --phone, or --notes must be provided"
        );
    }
    Ok(())
}
