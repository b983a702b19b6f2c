use clap::Subcommand;

/// Language commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LangCommands {
    /// Show the active language and where it came from.
    Show,
    /// List supported languages.
    List,
    /// Switch language and save it as the preference.
    Set { code: String },
}
