use clap::Subcommand;

/// Lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LessonCommands {
    /// List lessons.
    List {
        /// Only recent lessons.
        #[arg(long, conflicts_with = "student")]
        recent: bool,
        /// Only lessons for this student ID.
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a lesson by ID.
    Get { id: String },
    /// Record a lesson.
    Create {
        #[arg(long)]
        student: String,
        /// `YYYY-MM-DD`
        #[arg(long)]
        date: String,
        /// Minutes.
        #[arg(long, default_value_t = 60)]
        duration: u32,
        /// beginner, intermediate, advanced
        #[arg(long, default_value = "beginner")]
        difficulty: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        completed: bool,
    },
    /// Update a lesson.
    Update {
        id: String,
        #[arg(long)]
        student: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        duration: Option<u32>,
        #[arg(long)]
        difficulty: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        completed: Option<bool>,
    },
    /// Delete a lesson.
    Delete { id: String },
}
