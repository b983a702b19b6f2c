mod auth;
mod homework;
mod lang;
mod lesson;
mod schedule;
mod student;

pub use auth::AuthCommands;
pub use homework::HomeworkCommands;
pub use lang::LangCommands;
pub use lesson::LessonCommands;
pub use schedule::ScheduleCommands;
pub use student::StudentCommands;
