use clap::Subcommand;

/// Homework commands.
#[derive(Clone, Debug, Subcommand)]
pub enum HomeworkCommands {
    /// List homework.
    List {
        /// Only homework for this student ID.
        #[arg(long)]
        student: Option<String>,
        /// pending or completed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an assignment by ID.
    Get { id: String },
    /// Assign homework.
    Create {
        #[arg(long)]
        student: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// `YYYY-MM-DD`
        #[arg(long)]
        due: Option<String>,
    },
    /// Update an assignment.
    Update {
        id: String,
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Flip between pending and completed.
    Toggle { id: String },
    /// Delete an assignment.
    Delete { id: String },
}
