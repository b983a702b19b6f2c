//! Opaque entity identifiers.
//!
//! The backend owns identity. Ids arrive as JSON integers today, but nothing in
//! the client depends on that: an id is only ever echoed back in a path or a
//! reference field, so both integer and string forms are accepted and
//! preserved as received.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identifier of a backend-owned record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EntityId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl FromStr for EntityId {
    type Err = std::convert::Infallible;

    /// Parse a command-line id. Digit-only input becomes [`EntityId::Numeric`]
    /// so it serializes the way the backend emitted it.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        Ok(trimmed
            .parse::<i64>()
            .map_or_else(|_| Self::Text(trimmed.to_string()), Self::Numeric))
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self::Numeric(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numeric_ids_stay_numeric_on_the_wire() {
        let id: EntityId = serde_json::from_str("42").unwrap();
        assert_eq!(id, EntityId::Numeric(42));
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");
    }

    #[test]
    fn string_ids_are_preserved() {
        let id: EntityId = serde_json::from_str("\"stu-9f2a\"").unwrap();
        assert_eq!(id, EntityId::Text("stu-9f2a".into()));
        assert_eq!(id.to_string(), "stu-9f2a");
    }

    #[test]
    fn from_str_prefers_numeric() {
        assert_eq!("17".parse::<EntityId>().unwrap(), EntityId::Numeric(17));
        assert_eq!(" 17 ".parse::<EntityId>().unwrap(), EntityId::Numeric(17));
        assert_eq!(
            "abc".parse::<EntityId>().unwrap(),
            EntityId::Text("abc".into())
        );
    }
}
