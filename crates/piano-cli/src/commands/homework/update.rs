use piano_core::entities::Homework;
use piano_core::enums::HomeworkStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub student: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub status: Option<String>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let id = parse_id(&params.id);

    let mut homework = ctx.api.get_homework(&id, &ctx.session).await?;
    apply(&mut homework, params)?;

    let saved = ctx.api.update_homework(&id, &homework, &ctx.session).await?;
    output(&saved, flags.format)
}

fn apply(homework: &mut Homework, params: Params) -> anyhow::Result<()> {
    if let Some(student) = params.student {
        homework.student_id = Some(parse_id(&student));
    }
    if let Some(title) = params.title {
        homework.title = title;
    }
    if params.description.is_some() {
        homework.description = params.description;
    }
    if let Some(due) = params.due {
        homework.due_date = Some(parse_date(&due, "due")?);
    }
    if let Some(status) = params.status {
        homework.status = parse_enum::<HomeworkStatus>(&status, "status")?;
    }
    Ok(())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.student.is_none()
        && params.title.is_none()
        && params.description.is_none()
        && params.due.is_none()
        && params.status.is_none()
    {
        anyhow::bail!(
            "At least one of --student, --title, --description, --due, or --status must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            id: "5".into(),
            student: None,
            title: None,
            description: None,
            due: None,
            status: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&params()).is_err());
    }

    #[test]
    fn accepts_update_with_any_field() {
        let p = Params {
            status: Some("completed".into()),
            ..params()
        };
        assert!(validate_update_params(&p).is_ok());
    }

    #[test]
    fn apply_sets_status_and_due_date() {
        let mut homework = Homework::default();
        apply(
            &mut homework,
            Params {
                status: Some("completed".into()),
                due: Some("2024-06-01".into()),
                ..params()
            },
        )
        .unwrap();
        assert_eq!(homework.status, HomeworkStatus::Completed);
        assert!(homework.due_date.is_some());
    }
}
