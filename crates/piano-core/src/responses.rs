//! Aggregated response types rendered by the `piano` binary.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Counters shown on the dashboard.
///
/// A counter whose source request failed is reported as 0.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_students: usize,
    pub today_schedule: usize,
    pub recent_lessons: usize,
    pub pending_homework: usize,
}
