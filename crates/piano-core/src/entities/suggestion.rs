use chrono::{NaiveDate, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::EntityId;

/// A candidate lesson slot proposed by the backend scheduler.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotSuggestion {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// 0.0 to 1.0, higher is more confident.
    pub confidence: f64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub duration: Option<u32>,
}

/// Parameters for `GET /schedules/suggestions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionQuery {
    pub student_id: EntityId,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Desired lesson length in minutes.
    pub duration: u32,
}
