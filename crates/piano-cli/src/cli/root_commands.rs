use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    AuthCommands, HomeworkCommands, LangCommands, LessonCommands, ScheduleCommands,
    StudentCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Students.
    Student {
        #[command(subcommand)]
        action: StudentCommands,
    },
    /// Schedule entries and scheduling suggestions.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
    /// Lessons.
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },
    /// Homework assignments.
    Homework {
        #[command(subcommand)]
        action: HomeworkCommands,
    },
    /// Totals for today: students, schedule, recent lessons, pending homework.
    Dashboard(DashboardArgs),
    /// Interface language.
    Lang {
        #[command(subcommand)]
        action: LangCommands,
    },
    /// Print the translation of a message key in the active language.
    Translate(TranslateArgs),
    /// Authentication.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Print the JSON schema of a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Refresh every N seconds until interrupted.
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,
}

#[derive(Clone, Debug, Args)]
pub struct TranslateArgs {
    /// Dotted message key, e.g. `students.add`.
    pub key: String,
    /// Placeholder values as `name=value`.
    #[arg(long = "arg", value_name = "NAME=VALUE")]
    pub args: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type: student, schedule, lesson, homework, suggestion, dashboard.
    pub type_name: String,
}
