pub mod auth;
pub mod dashboard;
pub mod dispatch;
pub mod homework;
pub mod lang;
pub mod lesson;
pub mod schedule;
pub mod schema;
pub mod shared;
pub mod student;
pub mod translate;
