use clap::Subcommand;

/// Student commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StudentCommands {
    /// List students.
    List {
        /// Case-insensitive match on name or email.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a student by ID.
    Get { id: String },
    /// Create a student.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        /// Hourly rate; enables pricing.
        #[arg(long)]
        rate: Option<f64>,
        /// Lesson length in minutes for pricing.
        #[arg(long, requires = "rate", default_value_t = 60)]
        lesson_duration: u32,
        #[arg(long, requires = "rate")]
        payment_terms: Option<String>,
    },
    /// Update a student.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        grade: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a student.
    Delete { id: String },
}
