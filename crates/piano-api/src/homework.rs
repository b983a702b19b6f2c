//! Homework assignments: `/homework`.

use piano_auth::SessionContext;
use piano_core::entities::Homework;
use piano_core::ids::EntityId;
use reqwest::Method;

use crate::{ApiClient, error::ApiError, id_segment};

const HOMEWORK: &str = "homework";

impl ApiClient {
    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn list_homework(&self, session: &SessionContext) -> Result<Vec<Homework>, ApiError> {
        self.get_json(HOMEWORK, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn homework_for_student(
        &self,
        student_id: &EntityId,
        session: &SessionContext,
    ) -> Result<Vec<Homework>, ApiError> {
        self.get_json(
            &format!("{HOMEWORK}?studentId={}", id_segment(student_id)),
            session,
        )
        .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] on transport, status, or parse failure.
    pub async fn get_homework(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<Homework, ApiError> {
        self.get_json(&format!("{HOMEWORK}/{}", id_segment(id)), session)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// assignment lacks `studentId` or `title`.
    pub async fn create_homework(
        &self,
        homework: &Homework,
        session: &SessionContext,
    ) -> Result<Homework, ApiError> {
        self.save(Method::POST, HOMEWORK, homework, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// assignment lacks `studentId` or `title`.
    pub async fn update_homework(
        &self,
        id: &EntityId,
        homework: &Homework,
        session: &SessionContext,
    ) -> Result<Homework, ApiError> {
        let endpoint = format!("{HOMEWORK}/{}", id_segment(id));
        self.save(Method::PUT, &endpoint, homework, session).await
    }

    /// Flip pending/completed on the stored assignment and save it.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the fetch or the update fails.
    pub async fn toggle_homework_status(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<Homework, ApiError> {
        let mut homework = self.get_homework(id, session).await?;
        homework.toggle_status();
        tracing::debug!(%id, status = %homework.status, "toggling homework status");
        let endpoint = format!("{HOMEWORK}/{}", id_segment(id));
        self.put_value(&endpoint, &homework, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_homework(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.delete(&format!("{HOMEWORK}/{}", id_segment(id)), session)
            .await
    }
}
