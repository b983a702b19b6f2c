use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `piano` binary.
#[derive(Debug, Parser)]
#[command(
    name = "piano",
    version,
    about = "Piano teacher client - students, schedule, lessons, homework"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Max rows to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Language for this run (overrides the saved preference)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Answer yes to delete confirmations
    #[arg(short, long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            lang: self.lang.clone(),
            yes: self.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{HomeworkCommands, LessonCommands, StudentCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "piano",
            "--format",
            "json",
            "--limit",
            "10",
            "--verbose",
            "dashboard",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from([
            "piano", "student", "list", "--format", "raw", "--quiet", "--lang", "zh",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert_eq!(cli.lang.as_deref(), Some("zh"));
        assert!(matches!(
            cli.command,
            Commands::Student {
                action: StudentCommands::List { .. }
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["piano", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn yes_flag_reaches_global_flags() {
        let cli = Cli::try_parse_from(["piano", "student", "delete", "3", "-y"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert!(flags.yes);
    }

    #[test]
    fn lesson_list_filters_conflict() {
        let parsed = Cli::try_parse_from([
            "piano", "lesson", "list", "--recent", "--student", "4",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn lesson_create_defaults_match_form() {
        let cli = Cli::try_parse_from([
            "piano", "lesson", "create", "--student", "4", "--date", "2024-05-01",
        ])
        .expect("cli should parse");
        let Commands::Lesson {
            action: LessonCommands::Create { duration, difficulty, .. },
        } = cli.command
        else {
            panic!("expected lesson create");
        };
        assert_eq!(duration, 60);
        assert_eq!(difficulty, "beginner");
    }

    #[test]
    fn homework_toggle_takes_id() {
        let cli = Cli::try_parse_from(["piano", "homework", "toggle", "12"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Homework {
                action: HomeworkCommands::Toggle { ref id }
            } if id == "12"
        ));
    }
}
