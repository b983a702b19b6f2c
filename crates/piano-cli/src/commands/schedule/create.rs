use piano_core::entities::ScheduleEntry;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::{parse_datetime, parse_id};
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub student: String,
    pub start: String,
    pub end: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub recurring: bool,
}

pub async fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let entry = ScheduleEntry {
        id: None,
        student_id: Some(parse_id(&params.student)),
        start_time: Some(parse_datetime(&params.start, "start")?),
        end_time: params
            .end
            .as_deref()
            .map(|raw| parse_datetime(raw, "end"))
            .transpose()?,
        location: params.location,
        notes: params.notes,
        recurring: params.recurring,
    };
    ensure_ordered(&entry)?;

    let created = ctx.api.create_schedule(&entry, &ctx.session).await?;
    output(&created, flags.format)
}

/// An entry may not end before it starts.
pub fn ensure_ordered(entry: &ScheduleEntry) -> anyhow::Result<()> {
    if let (Some(start), Some(end)) = (entry.start_time, entry.end_time)
        && end < start
    {
        anyhow::bail!("end time {end} is before start time {start}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::shared::parse::parse_datetime;

    #[test]
    fn end_before_start_is_rejected() {
        let entry = ScheduleEntry {
            start_time: Some(parse_datetime("2024-05-01T16:00", "start").unwrap()),
            end_time: Some(parse_datetime("2024-05-01T15:00", "end").unwrap()),
            ..ScheduleEntry::default()
        };
        assert!(ensure_ordered(&entry).is_err());
    }

    #[test]
    fn open_ended_entry_is_fine() {
        let entry = ScheduleEntry {
            start_time: Some(parse_datetime("2024-05-01T16:00", "start").unwrap()),
            ..ScheduleEntry::default()
        };
        assert!(ensure_ordered(&entry).is_ok());
    }
}
