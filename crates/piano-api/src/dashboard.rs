//! Dashboard counters.

use piano_auth::SessionContext;
use piano_core::responses::DashboardStats;

use crate::{ApiClient, error::ApiError};

const DASHBOARD_SOURCES: [&str; 4] = ["students", "schedules", "lessons", "homework"];

fn count_or_log<T>(result: Result<Vec<T>, ApiError>, source: &str) -> usize {
    result.map_or_else(
        |e| {
            tracing::warn!(source, %e, "dashboard fetch failed; counting as 0");
            0
        },
        |items| items.len(),
    )
}

impl ApiClient {
    /// Fetch the four dashboard sources concurrently and count them.
    ///
    /// A failing source is logged and counted as zero; the others still
    /// contribute.
    pub async fn dashboard_stats(&self, session: &SessionContext) -> DashboardStats {
        let (students, schedule, lessons, homework) = tokio::join!(
            self.list_students(session),
            self.today_schedule(session),
            self.recent_lessons(session),
            self.list_homework(session),
        );

        let pending_homework = match homework {
            Ok(items) => items.iter().filter(|h| h.is_pending()).count(),
            Err(e) => {
                tracing::warn!(source = "homework", %e, "dashboard fetch failed; counting as 0");
                0
            }
        };

        DashboardStats {
            total_students: count_or_log(students, "students"),
            today_schedule: count_or_log(schedule, "schedule"),
            recent_lessons: count_or_log(lessons, "lessons"),
            pending_homework,
        }
    }

    /// Like [`dashboard_stats`](Self::dashboard_stats), but drops the cached
    /// reads of the four source collections first so every counter is
    /// fetched from the backend.
    pub async fn refresh_dashboard_stats(&self, session: &SessionContext) -> DashboardStats {
        for collection in DASHBOARD_SOURCES {
            self.invalidate(collection);
        }
        self.dashboard_stats(session).await
    }
}
