//! Backend payload fixtures parsed into entities and checked against the
//! schemars-generated schema of each type.

use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;
use schemars::schema_for;
use serde::de::DeserializeOwned;
use piano_core::entities::*;
use piano_core::enums::{Difficulty, HomeworkStatus};
use piano_core::ids::EntityId;
use piano_core::responses::DashboardStats;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

fn parse_and_validate<T>(payload: &str) -> T
where
    T: DeserializeOwned + serde::Serialize + schemars::JsonSchema,
{
    let value: T = serde_json::from_str(payload).expect("fixture should parse");
    let schema = serde_json::to_value(schema_for!(T)).unwrap();
    let instance = serde_json::to_value(&value).unwrap();
    let errors = validate_against_schema(&schema, &instance);
    assert!(errors.is_empty(), "schema validation failed: {errors:?}");
    value
}

#[test]
fn student_with_pricing() {
    let student: Student = parse_and_validate(
        r#"{
            "id": 7,
            "name": "Alice Chen",
            "age": 11,
            "grade": "Grade 3",
            "email": "alice@example.com",
            "phone": "555-0101",
            "notes": "Prefers Chopin",
            "pricing": {"id": 2, "hourlyRate": 45.5, "lessonDuration": 45, "paymentTerms": "monthly"},
            "createdAt": "2024-01-15T09:30:00",
            "updatedAt": "2024-02-01T18:00:00"
        }"#,
    );
    assert_eq!(student.id, Some(EntityId::Numeric(7)));
    let pricing = student.pricing.expect("pricing");
    assert_eq!(pricing.lesson_duration, 45);
    assert!((pricing.hourly_rate - 45.5).abs() < f64::EPSILON);
    assert_eq!(
        student.created_at,
        NaiveDateTime::parse_from_str("2024-01-15T09:30:00", "%Y-%m-%dT%H:%M:%S").ok()
    );
}

#[test]
fn schedule_entry() {
    let entry: ScheduleEntry = parse_and_validate(
        r#"{
            "id": 12,
            "studentId": 7,
            "startTime": "2024-05-01T15:00:00",
            "endTime": "2024-05-01T16:00:00",
            "location": "Studio A"
        }"#,
    );
    assert_eq!(entry.student_id, Some(EntityId::Numeric(7)));
    assert_eq!(entry.location.as_deref(), Some("Studio A"));
    assert!(!entry.recurring);
}

#[test]
fn lesson() {
    let lesson: Lesson = parse_and_validate(
        r#"{
            "id": 3,
            "studentId": 7,
            "date": "2024-05-01",
            "duration": 45,
            "difficulty": "advanced",
            "title": "Scales in B minor",
            "completed": true
        }"#,
    );
    assert_eq!(lesson.difficulty, Difficulty::Advanced);
    assert_eq!(lesson.date, NaiveDate::from_ymd_opt(2024, 5, 1));
    assert!(lesson.completed);
}

#[test]
fn homework() {
    let homework: Homework = parse_and_validate(
        r#"{
            "id": "hw-1",
            "studentId": 7,
            "title": "Hanon exercise 1",
            "dueDate": "2024-05-08",
            "status": "pending"
        }"#,
    );
    assert_eq!(homework.id, Some(EntityId::Text("hw-1".into())));
    assert_eq!(homework.status, HomeworkStatus::Pending);
    assert!(homework.is_pending());
}

#[test]
fn time_slot_suggestion() {
    let suggestion: TimeSlotSuggestion = parse_and_validate(
        r#"{
            "startTime": "2024-05-02T16:00:00",
            "endTime": "2024-05-02T17:00:00",
            "confidence": 0.85,
            "reason": "Matches the student's usual weekday slot",
            "studentName": "Alice Chen",
            "duration": 60
        }"#,
    );
    assert_eq!(suggestion.duration, Some(60));
    assert!(suggestion.confidence > 0.8);
}

#[test]
fn dashboard_stats_are_camel_case() {
    let stats = DashboardStats {
        total_students: 3,
        today_schedule: 1,
        recent_lessons: 2,
        pending_homework: 4,
    };
    let json = serde_json::to_value(stats).unwrap();
    assert_eq!(json["totalStudents"], 3);
    assert_eq!(json["pendingHomework"], 4);
}
