mod app_context;
mod config_warnings;
mod prompt;

pub use app_context::{AppContext, LanguageSource};
pub use config_warnings::warn_unconfigured;
pub use prompt::Prompter;
