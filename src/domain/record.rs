//! Schema-less stored records and the closed set of entity kinds.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{
    COLLECTION_BOOKINGS, COLLECTION_DOCUMENTS, COLLECTION_USERS, COLLECTION_VEHICLES,
};
use crate::errors::AppResult;

/// The fixed categories partitioning the storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Vehicle,
    Booking,
    Document,
    User,
}

impl EntityKind {
    /// Collection name under which records of this kind are stored.
    pub fn collection(&self) -> &'static str {
        match self {
            EntityKind::Vehicle => COLLECTION_VEHICLES,
            EntityKind::Booking => COLLECTION_BOOKINGS,
            EntityKind::Document => COLLECTION_DOCUMENTS,
            EntityKind::User => COLLECTION_USERS,
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.collection())
    }
}

/// A stored record: a JSON object carrying a string `id`, a `created_date`
/// stamp, an `updated_date` stamp after the first modification, and whatever
/// other fields callers chose to persist.
///
/// The store enforces no shape beyond this; typed views live in the rest of
/// the domain layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Record id, if the stored object still carries one.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Raw field access, including `id` and the timestamp fields.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Creation timestamp, when present and well-formed.
    pub fn created_date(&self) -> Option<DateTime<Utc>> {
        self.timestamp("created_date")
    }

    /// Last-update timestamp, set by the store on `update`.
    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.timestamp("updated_date")
    }

    fn timestamp(&self, key: &str) -> Option<DateTime<Utc>> {
        self.get(key)
            .and_then(Value::as_str)
            .and_then(|raw| raw.parse().ok())
    }

    /// Deserialize the record into a typed view.
    pub fn parse<T: DeserializeOwned>(&self) -> AppResult<T> {
        serde_json::from_value(Value::Object(self.0.clone())).map_err(Into::into)
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume the record, yielding its field map.
    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        match value {
            Value::Object(map) => Record::from(map),
            _ => panic!("record fixtures must be objects"),
        }
    }

    #[test]
    fn accessors_read_stored_fields() {
        let rec = record(json!({
            "id": "r-1",
            "created_date": "2025-03-01T10:00:00.000Z",
            "name": "Civic",
        }));

        assert_eq!(rec.id(), Some("r-1"));
        assert_eq!(rec.get("name"), Some(&json!("Civic")));
        assert!(rec.created_date().is_some());
        assert!(rec.updated_date().is_none());
    }

    #[test]
    fn malformed_timestamps_read_as_none() {
        let rec = record(json!({ "id": "r-2", "created_date": "yesterday" }));
        assert!(rec.created_date().is_none());
    }

    #[test]
    fn serde_is_transparent() {
        let rec = record(json!({ "id": "r-3", "seats": 5 }));
        let raw = serde_json::to_string(&rec).unwrap();
        let back: Record = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, rec);
    }
}
