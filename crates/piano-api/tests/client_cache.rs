//! Cached reads against an in-process backend.

mod common;

use std::time::Duration;

use piano_auth::{Credentials, SessionContext};
use piano_config::CacheConfig;
use piano_core::entities::Student;
use piano_core::ids::EntityId;
use pretty_assertions::assert_eq;

use common::{MockBackend, STUDENTS_JSON};

fn session() -> SessionContext {
    let creds = Credentials::new("admin", "admin123").unwrap();
    SessionContext::with_credentials(&creds, "en")
}

#[tokio::test]
async fn second_identical_get_is_served_from_cache() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    let client = backend.client();
    let session = session();

    let first = client.list_students(&session).await.unwrap();
    let second = client.list_students(&session).await.unwrap();

    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
    assert_eq!(backend.hits("GET", "students"), 1);
    assert_eq!(client.cached_responses(), 1);
}

#[tokio::test]
async fn disabled_cache_always_hits_the_network() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    let client = backend.client_with_cache(&CacheConfig {
        enabled: false,
        ..CacheConfig::default()
    });
    let session = session();

    client.list_students(&session).await.unwrap();
    client.list_students(&session).await.unwrap();
    assert_eq!(backend.hits("GET", "students"), 2);
}

#[tokio::test]
async fn expired_entry_is_refetched() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    let client = backend.client_with_cache(&CacheConfig {
        ttl_ms: 20,
        ..CacheConfig::default()
    });
    let session = session();

    client.list_students(&session).await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    client.list_students(&session).await.unwrap();
    assert_eq!(backend.hits("GET", "students"), 2);
}

#[tokio::test]
async fn failed_reads_are_not_cached() {
    let backend = MockBackend::start();
    backend.route("GET", "lessons", 500, "down");
    let client = backend.client();
    let session = session();

    assert!(client.list_lessons(&session).await.is_err());
    assert!(client.list_lessons(&session).await.is_err());
    assert_eq!(backend.hits("GET", "lessons"), 2);
    assert_eq!(client.cached_responses(), 0);
}

#[tokio::test]
async fn write_invalidates_collection_reads() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    backend.route("GET", "lessons", 200, "[]");
    backend.route(
        "POST",
        "students",
        201,
        r#"{"id": 4, "name": "Dan Zhou"}"#,
    );
    let client = backend.client();
    let session = session();

    client.list_students(&session).await.unwrap();
    client.list_lessons(&session).await.unwrap();

    let created = client
        .create_student(
            &Student {
                name: "Dan Zhou".into(),
                ..Student::default()
            },
            &session,
        )
        .await
        .unwrap();
    assert_eq!(created.id, Some(EntityId::from(4)));

    client.list_students(&session).await.unwrap();
    client.list_lessons(&session).await.unwrap();
    assert_eq!(backend.hits("GET", "students"), 2);
    assert_eq!(backend.hits("GET", "lessons"), 1);
}

#[tokio::test]
async fn delete_invalidates_collection_reads() {
    let backend = MockBackend::start();
    backend.route("GET", "homework", 200, "[]");
    backend.route("DELETE", "homework/5", 204, "");
    let client = backend.client();
    let session = session();

    client.list_homework(&session).await.unwrap();
    client
        .delete_homework(&EntityId::from(5), &session)
        .await
        .unwrap();
    client.list_homework(&session).await.unwrap();
    assert_eq!(backend.hits("GET", "homework"), 2);
}

#[tokio::test]
async fn search_filters_cached_list() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    let client = backend.client();
    let session = session();

    let hits = client.search_students("BOB", &session).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Bob Li");

    let all = client.search_students("", &session).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(backend.hits("GET", "students"), 1);
}

#[tokio::test]
async fn sweeper_evicts_expired_entries() {
    let backend = MockBackend::start();
    backend.route("GET", "students", 200, STUDENTS_JSON);
    let client = backend.client_with_cache(&CacheConfig {
        ttl_ms: 10,
        ..CacheConfig::default()
    });
    let session = session();

    client.list_students(&session).await.unwrap();
    assert_eq!(client.cached_responses(), 1);

    let sweeper = client
        .spawn_cache_sweeper(Duration::from_millis(15))
        .expect("cache enabled");
    tokio::time::sleep(Duration::from_millis(80)).await;
    sweeper.abort();
    assert_eq!(client.cached_responses(), 0);
}

#[tokio::test]
async fn dashboard_refresh_bypasses_cached_counts() {
    let backend = MockBackend::start();
    let today = chrono::Utc::now().date_naive().format("%Y-%m-%d");
    let schedule_path = format!("schedules?date={today}");
    backend.route("GET", "students", 200, STUDENTS_JSON);
    backend.route("GET", &schedule_path, 200, "[]");
    backend.route("GET", "lessons?recent=true", 200, "[]");
    backend.route("GET", "homework", 200, "[]");
    let client = backend.client();
    let session = session();

    client.dashboard_stats(&session).await;
    client.dashboard_stats(&session).await;
    assert_eq!(backend.hits("GET", "students"), 1);

    let stats = client.refresh_dashboard_stats(&session).await;
    assert_eq!(stats.total_students, 3);
    for path in ["students", schedule_path.as_str(), "lessons?recent=true", "homework"] {
        assert_eq!(backend.hits("GET", path), 2, "{path} should be refetched");
    }
}
