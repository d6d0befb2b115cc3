//! The entity store - durable, namespaced CRUD over homogeneous record
//! collections.
//!
//! Each [`EntityKind`] maps to one JSON array stored under one namespaced
//! key of the storage port. Every mutating call is a full read-modify-write
//! of that collection: last write wins, nothing is transactional.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::{
    DEFAULT_STORAGE_NAMESPACE, ROLE_ADMIN, SEED_ADMIN_EMAIL, SEED_ADMIN_ID, SEED_ADMIN_NAME,
};
use crate::domain::{EntityKind, Record};
use crate::errors::AppResult;
use crate::infra::{IdGenerator, StoragePort, UuidGenerator};
use crate::types::sort::order_records;
use crate::types::SortSpec;

/// Store over an injected storage port and id generator.
#[derive(Clone)]
pub struct EntityStore {
    storage: Arc<dyn StoragePort>,
    ids: Arc<dyn IdGenerator>,
    namespace: String,
}

impl EntityStore {
    /// Create a store with the default namespace and UUID v4 ids.
    pub fn new(storage: Arc<dyn StoragePort>) -> Self {
        Self {
            storage,
            ids: Arc::new(UuidGenerator),
            namespace: DEFAULT_STORAGE_NAMESPACE.to_string(),
        }
    }

    /// Replace the key namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    /// Replace the id generator.
    pub fn with_ids(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Handle bound to one entity kind.
    pub fn client(&self, kind: EntityKind) -> EntityClient {
        EntityClient {
            store: self.clone(),
            kind,
        }
    }

    fn storage_key(&self, kind: EntityKind) -> String {
        format!("{}{}", self.namespace, kind.collection())
    }

    /// Read the full collection for a kind.
    ///
    /// A key that has never been written yields an empty collection, except
    /// for the User kind, which is seeded with the synthetic admin account
    /// before first read. A stored document that fails to parse is treated
    /// as empty.
    async fn read_collection(&self, kind: EntityKind) -> AppResult<Vec<Map<String, Value>>> {
        let key = self.storage_key(kind);
        let raw = match self.storage.read(&key).await? {
            Some(raw) => raw,
            None => {
                if kind == EntityKind::User {
                    let seeded = vec![seed_admin_record()];
                    self.write_collection(kind, &seeded).await?;
                    debug!(key = %key, "seeded admin account");
                    return Ok(seeded);
                }
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(key = %key, %err, "malformed collection, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn write_collection(
        &self,
        kind: EntityKind,
        items: &[Map<String, Value>],
    ) -> AppResult<()> {
        let key = self.storage_key(kind);
        let raw = serde_json::to_string(items)?;
        self.storage.write(&key, &raw).await
    }
}

/// CRUD handle bound to one entity kind.
#[derive(Clone)]
pub struct EntityClient {
    store: EntityStore,
    kind: EntityKind,
}

impl EntityClient {
    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// All records of the kind, optionally sorted (`-` prefix = descending,
    /// missing values last) and truncated to `limit`.
    pub async fn list(&self, sort: Option<&str>, limit: Option<usize>) -> AppResult<Vec<Record>> {
        let mut items = self.store.read_collection(self.kind).await?;
        if let Some(raw) = sort {
            order_records(&mut items, &SortSpec::parse(raw));
        }
        if let Some(limit) = limit {
            items.truncate(limit);
        }
        Ok(items.into_iter().map(Record::from).collect())
    }

    /// Records whose fields strictly equal every entry of `criteria`.
    /// Empty criteria matches everything; a missing field never matches.
    pub async fn filter(&self, criteria: impl Serialize) -> AppResult<Vec<Record>> {
        let criteria = to_object(&criteria)?;
        let items = self.store.read_collection(self.kind).await?;
        Ok(items
            .into_iter()
            .filter(|item| criteria.iter().all(|(key, value)| item.get(key) == Some(value)))
            .map(Record::from)
            .collect())
    }

    /// Persist a new record: generated id and creation stamp first, then the
    /// payload fields on top (a caller-supplied `id` wins). The record is
    /// prepended so collections stay newest-first.
    pub async fn create(&self, data: impl Serialize) -> AppResult<Record> {
        let data = to_object(&data)?;
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(self.store.ids.generate()));
        record.insert("created_date".to_string(), Value::String(now_iso()));
        record.extend(data);

        let mut items = self.store.read_collection(self.kind).await?;
        items.insert(0, record.clone());
        self.store.write_collection(self.kind, &items).await?;
        Ok(Record::from(record))
    }

    /// Shallow-merge `data` over the record with the given id and stamp
    /// `updated_date`. Returns `None` without failing when the id is
    /// unknown.
    pub async fn update(&self, id: &str, data: impl Serialize) -> AppResult<Option<Record>> {
        let data = to_object(&data)?;
        let mut items = self.store.read_collection(self.kind).await?;

        let mut updated = None;
        for item in items.iter_mut() {
            if item.get("id").and_then(Value::as_str) != Some(id) {
                continue;
            }
            item.extend(data.clone());
            item.insert("updated_date".to_string(), Value::String(now_iso()));
            updated = Some(item.clone());
        }

        self.store.write_collection(self.kind, &items).await?;
        Ok(updated.map(Record::from))
    }

    /// Remove the record with the given id. Succeeds whether or not the id
    /// existed.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let mut items = self.store.read_collection(self.kind).await?;
        items.retain(|item| item.get("id").and_then(Value::as_str) != Some(id));
        self.store.write_collection(self.kind, &items).await
    }
}

fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Serialize a payload into a JSON object. Non-object payloads contribute no
/// fields.
fn to_object(data: &impl Serialize) -> AppResult<Map<String, Value>> {
    match serde_json::to_value(data)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

fn seed_admin_record() -> Map<String, Value> {
    let mut record = Map::new();
    record.insert("id".to_string(), Value::String(SEED_ADMIN_ID.to_string()));
    record.insert(
        "full_name".to_string(),
        Value::String(SEED_ADMIN_NAME.to_string()),
    );
    record.insert(
        "email".to_string(),
        Value::String(SEED_ADMIN_EMAIL.to_string()),
    );
    record.insert("role".to_string(), Value::String(ROLE_ADMIN.to_string()));
    record.insert("created_date".to_string(), Value::String(now_iso()));
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::infra::MockStoragePort;
    use serde_json::json;

    #[test]
    fn to_object_passes_objects_through() {
        let map = to_object(&json!({ "name": "Civic" })).unwrap();
        assert_eq!(map.get("name"), Some(&json!("Civic")));
    }

    #[test]
    fn to_object_swallows_non_object_payloads() {
        assert!(to_object(&json!("just a string")).unwrap().is_empty());
        assert!(to_object(&json!(7)).unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_write_failures_surface() {
        let mut storage = MockStoragePort::new();
        storage.expect_read().returning(|_| Ok(None));
        storage
            .expect_write()
            .returning(|_, _| Err(AppError::storage("disk full")));

        let store = EntityStore::new(Arc::new(storage));
        let result = store
            .client(EntityKind::Vehicle)
            .create(json!({ "name": "Civic" }))
            .await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }

    #[tokio::test]
    async fn storage_read_failures_surface() {
        let mut storage = MockStoragePort::new();
        storage
            .expect_read()
            .returning(|_| Err(AppError::storage("backend offline")));

        let store = EntityStore::new(Arc::new(storage));
        let result = store.client(EntityKind::Booking).list(None, None).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
    }
}
