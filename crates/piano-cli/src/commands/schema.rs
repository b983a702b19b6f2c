use piano_core::entities::{Homework, Lesson, ScheduleEntry, Student, TimeSlotSuggestion};
use piano_core::responses::DashboardStats;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &[&str] = &[
    "student",
    "schedule",
    "lesson",
    "homework",
    "suggestion",
    "dashboard",
];

/// Handle `piano schema`. Needs no configuration or network.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.trim().to_lowercase().as_str() {
        "student" => schema_for!(Student),
        "schedule" => schema_for!(ScheduleEntry),
        "lesson" => schema_for!(Lesson),
        "homework" => schema_for!(Homework),
        "suggestion" => schema_for!(TimeSlotSuggestion),
        "dashboard" => schema_for!(DashboardStats),
        other => anyhow::bail!(
            "unknown schema type '{other}' (expected one of: {})",
            TYPE_NAMES.join(", ")
        ),
    };
    output(&schema, flags.format)
}
