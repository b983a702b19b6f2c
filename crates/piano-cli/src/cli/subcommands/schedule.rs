use clap::Subcommand;

/// Schedule commands. Times are `YYYY-MM-DDTHH:MM:SS`.
#[derive(Clone, Debug, Subcommand)]
pub enum ScheduleCommands {
    /// List schedule entries.
    List {
        /// Only entries on this day (`YYYY-MM-DD`).
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Entries for today.
    Today,
    /// Create a schedule entry.
    Create {
        #[arg(long)]
        student: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        recurring: bool,
    },
    /// Update a schedule entry.
    Update {
        id: String,
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        start: Option<String>,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        recurring: Option<bool>,
    },
    /// Delete a schedule entry.
    Delete { id: String },
    /// Ask the backend for free time slots.
    Suggest {
        #[arg(long)]
        student: String,
        /// First day to consider (`YYYY-MM-DD`).
        #[arg(long)]
        from: String,
        /// Last day to consider (`YYYY-MM-DD`).
        #[arg(long)]
        to: String,
        /// Slot length in minutes.
        #[arg(long, default_value_t = 60)]
        duration: u32,
    },
}
