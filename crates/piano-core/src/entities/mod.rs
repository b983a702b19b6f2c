//! Entity records manipulated by the client.
//!
//! The backend owns every record; the client only holds transient copies.
//! Wire names are camelCase. All structs derive `Serialize`, `Deserialize`,
//! and `JsonSchema`.

mod homework;
mod lesson;
mod schedule;
mod student;
mod suggestion;

pub use homework::Homework;
pub use lesson::Lesson;
pub use schedule::ScheduleEntry;
pub use student::{Pricing, Student};
pub use suggestion::{SuggestionQuery, TimeSlotSuggestion};
