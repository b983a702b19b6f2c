pub mod delete;
pub mod limit;
pub mod parse;
