//! Student records: `/students`.

use piano_auth::SessionContext;
use piano_core::entities::Student;
use piano_core::ids::EntityId;
use reqwest::Method;

use crate::{ApiClient, error::ApiError, id_segment};

const STUDENTS: &str = "students";

impl ApiClient {
    /// Fetch every student.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn list_students(&self, session: &SessionContext) -> Result<Vec<Student>, ApiError> {
        self.get_json(STUDENTS, session).await
    }

    /// Students whose name or email contains `term`, ignoring case.
    ///
    /// Filtering happens client-side over the (cached) full list.
    ///
    /// # Errors
    ///
    /// Same as [`list_students`](Self::list_students).
    pub async fn search_students(
        &self,
        term: &str,
        session: &SessionContext,
    ) -> Result<Vec<Student>, ApiError> {
        let mut students = self.list_students(session).await?;
        students.retain(|s| s.matches(term));
        Ok(students)
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with status 404 if the student does not
    /// exist, or any other [`ApiError`] on transport or parse failure.
    pub async fn get_student(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<Student, ApiError> {
        self.get_json(&format!("{STUDENTS}/{}", id_segment(id)), session)
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// student has no name.
    pub async fn create_student(
        &self,
        student: &Student,
        session: &SessionContext,
    ) -> Result<Student, ApiError> {
        self.save(Method::POST, STUDENTS, student, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError::Validation`] without sending anything if the
    /// student has no name.
    pub async fn update_student(
        &self,
        id: &EntityId,
        student: &Student,
        session: &SessionContext,
    ) -> Result<Student, ApiError> {
        let endpoint = format!("{STUDENTS}/{}", id_segment(id));
        self.save(Method::PUT, &endpoint, student, session).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend refuses.
    pub async fn delete_student(
        &self,
        id: &EntityId,
        session: &SessionContext,
    ) -> Result<(), ApiError> {
        self.delete(&format!("{STUDENTS}/{}", id_segment(id)), session)
            .await
    }
}
