//! Required-field checks run before a save is attempted.
//!
//! These mirror what the entry forms demanded: a record missing any of its
//! required fields is never sent to the backend.

use crate::entities::{Homework, Lesson, ScheduleEntry, Student};
use crate::errors::CoreError;

/// A record that must carry certain fields before it can be saved.
pub trait RequiredFields {
    /// Entity name used in error messages.
    const ENTITY: &'static str;

    /// Names (wire spelling) of the required fields that are absent or blank.
    fn missing_fields(&self) -> Vec<&'static str>;

    /// Fail with [`CoreError::MissingFields`] unless every required field is set.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] listing every absent field.
    fn ensure_complete(&self) -> Result<(), CoreError> {
        let fields = self.missing_fields();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::MissingFields {
                entity_type: Self::ENTITY,
                fields,
            })
        }
    }
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

impl RequiredFields for Student {
    const ENTITY: &'static str = "student";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if blank(&self.name) {
            missing.push("name");
        }
        missing
    }
}

impl RequiredFields for ScheduleEntry {
    const ENTITY: &'static str = "schedule";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.student_id.is_none() {
            missing.push("studentId");
        }
        if self.start_time.is_none() {
            missing.push("startTime");
        }
        missing
    }
}

impl RequiredFields for Lesson {
    const ENTITY: &'static str = "lesson";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.student_id.is_none() {
            missing.push("studentId");
        }
        if self.date.is_none() {
            missing.push("date");
        }
        missing
    }
}

impl RequiredFields for Homework {
    const ENTITY: &'static str = "homework";

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.student_id.is_none() {
            missing.push("studentId");
        }
        if blank(&self.title) {
            missing.push("title");
        }
        missing
    }
}
