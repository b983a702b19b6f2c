use chrono::{NaiveDate, NaiveDateTime};
use piano_core::ids::EntityId;
use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_lowercase().replace('-', "_");
    let json = format!("\"{normalized}\"");
    serde_json::from_str(&json).map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

pub fn parse_id(raw: &str) -> EntityId {
    let Ok(id) = raw.parse::<EntityId>();
    id
}

/// `YYYY-MM-DD`.
pub fn parse_date(raw: &str, field: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DD): {error}"))
}

/// `YYYY-MM-DDTHH:MM:SS`, seconds optional.
pub fn parse_datetime(raw: &str, field: &str) -> anyhow::Result<NaiveDateTime> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M"))
        .map_err(|error| {
            anyhow::anyhow!("invalid {field} '{raw}' (expected YYYY-MM-DDTHH:MM:SS): {error}")
        })
}
