use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::HomeworkStatus;
use crate::ids::EntityId;

/// A homework assignment for a student.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EntityId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student_id: Option<EntityId>,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: HomeworkStatus,
}

impl Homework {
    /// Flip the status between pending and completed.
    pub const fn toggle_status(&mut self) {
        self.status = self.status.toggled();
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == HomeworkStatus::Pending
    }
}
