//! Entity store integration tests.
//!
//! Exercises the CRUD contract over the in-memory storage port.

use std::sync::Arc;

use serde_json::json;

use hamro_rental_data::domain::EntityKind;
use hamro_rental_data::infra::MemoryStorage;
use hamro_rental_data::services::{EntityClient, EntityStore};
use hamro_rental_data::StoragePort;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("hamro_rental_data=debug")
        .try_init();
}

fn store() -> EntityStore {
    EntityStore::new(Arc::new(MemoryStorage::new()))
}

fn vehicles(store: &EntityStore) -> EntityClient {
    store.client(EntityKind::Vehicle)
}

#[tokio::test]
async fn create_then_list_returns_the_record() {
    let client = vehicles(&store());

    let created = client
        .create(json!({ "name": "Civic", "price_per_day": 20 }))
        .await
        .unwrap();

    assert!(created.id().is_some_and(|id| !id.is_empty()));
    assert!(created.created_date().is_some());
    assert_eq!(created.get("name"), Some(&json!("Civic")));
    assert_eq!(created.get("price_per_day"), Some(&json!(20)));

    let all = client.list(None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[tokio::test]
async fn collections_are_newest_first() {
    let client = vehicles(&store());
    client.create(json!({ "name": "older" })).await.unwrap();
    client.create(json!({ "name": "newer" })).await.unwrap();

    let all = client.list(None, None).await.unwrap();
    assert_eq!(all[0].get("name"), Some(&json!("newer")));
    assert_eq!(all[1].get("name"), Some(&json!("older")));
}

#[tokio::test]
async fn update_merges_fields_and_stamps_updated_date() {
    let client = vehicles(&store());
    let created = client
        .create(json!({ "name": "Civic", "status": "available" }))
        .await
        .unwrap();
    let id = created.id().unwrap().to_string();

    let updated = client
        .update(&id, json!({ "status": "maintenance" }))
        .await
        .unwrap()
        .expect("record exists");

    assert_eq!(updated.get("status"), Some(&json!("maintenance")));
    assert_eq!(updated.get("name"), Some(&json!("Civic")));
    assert!(updated.updated_date().is_some());

    let all = client.list(None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], updated);
}

#[tokio::test]
async fn update_unknown_id_is_a_no_op() {
    let client = vehicles(&store());
    client.create(json!({ "name": "Civic" })).await.unwrap();

    let updated = client
        .update("ghost", json!({ "name": "Phantom" }))
        .await
        .unwrap();
    assert!(updated.is_none());

    let all = client.list(None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].get("name"), Some(&json!("Civic")));
}

#[tokio::test]
async fn delete_removes_the_record_and_is_idempotent() {
    let client = vehicles(&store());
    let created = client.create(json!({ "name": "Civic" })).await.unwrap();
    let id = created.id().unwrap().to_string();

    client.delete(&id).await.unwrap();
    assert!(client.list(None, None).await.unwrap().is_empty());

    // deleting an id that never existed still succeeds
    client.delete("ghost").await.unwrap();
}

#[tokio::test]
async fn descending_sort_puts_missing_values_last_and_limit_truncates() {
    let client = vehicles(&store());
    client
        .create(json!({ "name": "cheap", "price_per_day": 20 }))
        .await
        .unwrap();
    client.create(json!({ "name": "unpriced" })).await.unwrap();
    client
        .create(json!({ "name": "premium", "price_per_day": 45.5 }))
        .await
        .unwrap();

    let sorted = client.list(Some("-price_per_day"), None).await.unwrap();
    let names: Vec<_> = sorted.iter().map(|r| r.get("name").unwrap()).collect();
    assert_eq!(names, vec![&json!("premium"), &json!("cheap"), &json!("unpriced")]);

    let top = client.list(Some("-price_per_day"), Some(2)).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].get("name"), Some(&json!("premium")));
}

#[tokio::test]
async fn filter_matches_on_strict_equality() {
    let client = vehicles(&store());
    client
        .create(json!({ "name": "a", "status": "available" }))
        .await
        .unwrap();
    client
        .create(json!({ "name": "b", "status": "maintenance" }))
        .await
        .unwrap();
    client.create(json!({ "name": "c" })).await.unwrap();

    let available = client.filter(json!({ "status": "available" })).await.unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0].get("name"), Some(&json!("a")));

    // empty criteria matches everything, including the record with no status
    let all = client.filter(json!({})).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn first_user_read_seeds_the_admin_account() {
    init_tracing();
    let store = store();
    let users = store.client(EntityKind::User);

    let all = users.list(None, None).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id(), Some("admin-seed"));
    assert_eq!(all[0].get("role"), Some(&json!("admin")));
    assert_eq!(all[0].get("email"), Some(&json!("admin@example.com")));

    // the seed is persisted, not re-created on every read
    let again = users.list(None, None).await.unwrap();
    assert_eq!(again.len(), 1);

    users.create(json!({ "email": "b@example.com" })).await.unwrap();
    assert_eq!(users.list(None, None).await.unwrap().len(), 2);
}

#[tokio::test]
async fn other_kinds_start_empty() {
    let store = store();
    for kind in [EntityKind::Vehicle, EntityKind::Booking, EntityKind::Document] {
        assert!(store.client(kind).list(None, None).await.unwrap().is_empty());
    }
}

#[tokio::test]
async fn caller_supplied_id_wins_over_the_generated_one() {
    let client = vehicles(&store());
    let created = client
        .create(json!({ "id": "custom-1", "name": "Civic" }))
        .await
        .unwrap();
    assert_eq!(created.id(), Some("custom-1"));
}

#[tokio::test]
async fn malformed_collections_read_as_empty() {
    init_tracing();
    let storage = Arc::new(MemoryStorage::new());
    storage
        .write("admin_data:vehicles", "not json at all")
        .await
        .unwrap();

    let store = EntityStore::new(storage);
    let client = store.client(EntityKind::Vehicle);
    assert!(client.list(None, None).await.unwrap().is_empty());

    // the next write replaces the damaged document
    client.create(json!({ "name": "Civic" })).await.unwrap();
    assert_eq!(client.list(None, None).await.unwrap().len(), 1);
}
