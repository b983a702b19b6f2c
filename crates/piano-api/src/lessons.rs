//! Lesson records: `/lessons`.

use piano_auth::SessionContext;
use piano_core::entities::Lesson;
use piano_core::ids::EntityId;
use reqwest::Method;

use crate::{ApiClient, error::ApiError, id_segment};

const LESSONS: &str = "lessons";

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_lessons(&self, session: &SessionContext) -> Result<Vec<Lesson>, ApiError> {
        self.get_json(LESSONS, session).await
    }

    /// Lessons the backend considers recent.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn recent_lessons(&self, session: &SessionContext) -> Result<Vec<Lesson>, ApiError> {
        self.get_json(&format!("{LESSONS}?recent=true"), session)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn lessons_for_student(
        &self,
        student_id: &EntityId,
        session: &SessionContext,
    ) -> Result<Vec<Lesson>, ApiError> {
        self.get_json(
            &format!("{LESSONS}?studentId={}", id_segment(student_id)),
            session,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn get_lesson(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<Lesson, ApiError> {
        self.get_json(&format!("{LESSONS}/{}", id_segment(id)), session)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// lesson lacks `studentId` or `date`.
    pub async fn create_lesson(
        &self,
        lesson: &Lesson,
        session: &SessionContext,
    ) -> Result<Lesson, ApiError> {
        self.save(Method::POST, LESSONS, lesson, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// lesson lacks `studentId` or `date`.
    pub async fn update_lesson(
        &self,
        id: &EntityId,
        lesson: &Lesson,
        session: &SessionContext,
    ) -> Result<Lesson, ApiError> {
        let endpoint = format!("{LESSONS}/{}", id_segment(id));
        self.save(Method::PUT, &endpoint, lesson, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_lesson(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.delete(&format!("{LESSONS}/{}", id_segment(id)), session)
            .await
    }
}
