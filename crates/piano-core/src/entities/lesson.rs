use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Difficulty;
use crate::ids::EntityId;

const fn default_duration() -> u32 {
    60
}

/// A lesson taught (or to be taught) to a student.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Length in minutes.
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

impl Default for Lesson {
    fn default() -> Self {
        Self {
            id: None,
            student_id: None,
            date: None,
            duration: default_duration(),
            difficulty: Difficulty::default(),
            title: None,
            notes: None,
            completed: false,
        }
    }
}
