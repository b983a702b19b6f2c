//! Schedule entries and scheduling suggestions: `/schedules`.

use chrono::{NaiveDate, Utc};
use piano_auth::SessionContext;
use piano_core::entities::{ScheduleEntry, SuggestionQuery, TimeSlotSuggestion};
use piano_core::ids::EntityId;
use reqwest::Method;

use crate::{ApiClient, error::ApiError, id_segment};

const SCHEDULES: &str = "schedules";

fn on_date_endpoint(date: NaiveDate) -> String {
    format!("{SCHEDULES}?date={}", date.format("%Y-%m-%d"))
}

fn suggestions_endpoint(query: &SuggestionQuery) -> String {
    format!(
        "{SCHEDULES}/suggestions?studentId={}&startDate={}&endDate={}&duration={}",
        urlencoding::encode(&query.student_id.to_string()),
        query.start_date.format("%Y-%m-%d"),
        query.end_date.format("%Y-%m-%d"),
        query.duration,
    )
}

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_schedules(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.get_json(SCHEDULES, session).await
    }

    /// Entries on a single day.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_schedules_on(
        &self,
        date: NaiveDate,
        session: &SessionContext,
    ) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.get_json(&on_date_endpoint(date), session).await
    }

    /// Entries for today (UTC date).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn today_schedule(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<ScheduleEntry>, ApiError> {
        self.list_schedules_on(Utc::now().date_naive(), session)
            .await
    }

    /// Look up one entry by scanning the (cached) full list; the schedules
    /// collection is only read as a whole or by date.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if no entry has `id`.
    pub async fn find_schedule(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<ScheduleEntry, ApiError> {
        self.list_schedules(session)
            .await?
            .into_iter()
            .find(|entry| entry.id.as_ref() == Some(id))
            .ok_or_else(|| ApiError::NotFound {
                resource: "schedule",
                id: id.to_string(),
            })
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the entry
    /// lacks `studentId` or `startTime`.
    pub async fn create_schedule(
        &self,
        entry: &ScheduleEntry,
        session: &SessionContext,
    ) -> Result<ScheduleEntry, ApiError> {
        self.save(Method::POST, SCHEDULES, entry, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the entry
    /// lacks `studentId` or `startTime`.
    pub async fn update_schedule(
        &self,
        id: &EntityId,
        entry: &ScheduleEntry,
        session: &SessionContext,
    ) -> Result<ScheduleEntry, ApiError> {
        let endpoint = format!("{SCHEDULES}/{}", id_segment(id));
        self.save(Method::PUT, &endpoint, entry, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_schedule(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.delete(&format!("{SCHEDULES}/{}", id_segment(id)), session)
            .await
    }

    /// Candidate time slots for a student within a date range.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn scheduling_suggestions(
        &self,
        query: &SuggestionQuery,
        session: &SessionContext,
    ) -> Result<Vec<TimeSlotSuggestion>, ApiError> {
        self.get_json(&suggestions_endpoint(query), session).await
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn date_endpoint_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(on_date_endpoint(date), "schedules?date=2024-05-01");
    }

    #[test]
    fn suggestion_query_string() {
        let query = SuggestionQuery {
            student_id: EntityId::from(3),
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 5, 7).unwrap(),
            duration: 45,
        };
        assert_eq!(
            suggestions_endpoint(&query),
            "schedules/suggestions?studentId=3&startDate=2024-05-01&endDate=2024-05-07&duration=45"
        );
    }
}
