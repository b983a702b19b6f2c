use piano_core::entities::ScheduleEntry;

use crate::cli::GlobalFlags;
use crate::commands::schedule::create::ensure_ordered;
use crate::commands::shared::parse::{parse_datetime, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub student: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub recurring: Option<bool>,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    validate_update_params(&params)?;
    let id = parse_id(&params.id);

    let mut entry = ctx.api.find_schedule(&id, &ctx.session).await?;
    apply(&mut entry, params)?;
    ensure_ordered(&entry)?;

    let saved = ctx.api.update_schedule(&id, &entry, &ctx.session).await?;
    output(&saved, flags.format)
}

fn apply(entry: &mut ScheduleEntry, params: Params) -> anyhow::Result<()> {
    if let Some(student) = params.student {
        entry.student_id = Some(parse_id(&student));
    }
    if let Some(start) = params.start {
        entry.start_time = Some(parse_datetime(&start, "start")?);
    }
    if let Some(end) = params.end {
        entry.end_time = Some(parse_datetime(&end, "end")?);
    }
    if params.location.is_some() {
        entry.location = params.location;
    }
    if params.notes.is_some() {
        entry.notes = params.notes;
    }
    if let Some(recurring) = params.recurring {
        entry.recurring = recurring;
    }
    Ok(())
}

fn validate_update_params(params: &Params) -> anyhow::Result<()> {
    if params.student.is_none()
        && params.start.is_none()
        && params.end.is_none()
        && params.location.is_none()
        && params.notes.is_none()
        && params.recurring.is_none()
    {
        anyhow::bail!(
            "At least one of --student, --start, --end, --location, --notes, or --recurring must be provided"
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use piano_core::ids::EntityId;

    use super::*;

    fn params() -> Params {
        Params {
            id: "1".into(),
            student: None,
            start: None,
            end: None,
            location: None,
            notes: None,
            recurring: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        assert!(validate_update_params(&params()).is_err());
    }

    #[test]
    fn apply_parses_times_and_ids() {
        let mut entry = ScheduleEntry::default();
        apply(
            &mut entry,
            Params {
                student: Some("7".into()),
                start: Some("2024-05-01T15:00:00".into()),
                recurring: Some(true),
                ..params()
            },
        )
        .unwrap();
        assert_eq!(entry.student_id, Some(EntityId::from(7)));
        assert!(entry.start_time.is_some());
        assert!(entry.recurring);
    }

    #[test]
    fn apply_rejects_bad_time() {
        let mut entry = ScheduleEntry::default();
        let result = apply(
            &mut entry,
            Params {
                end: Some("tomorrow".into()),
                ..params()
            },
        );
        assert!(result.is_err());
    }
}
