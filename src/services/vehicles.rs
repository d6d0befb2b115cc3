//! Vehicle catalog service - admin vehicle management.

use serde::Serialize;
use serde_json::json;

use super::entity_store::{EntityClient, EntityStore};
use super::parse_all;
use crate::domain::{EntityKind, NewVehicle, Vehicle, VehicleStatus};
use crate::errors::{AppResult, OptionExt};

/// Catalog operations backing the vehicles screen and the listing form.
pub struct VehicleCatalog {
    entities: EntityClient,
}

impl VehicleCatalog {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            entities: store.client(EntityKind::Vehicle),
        }
    }

    /// Full catalog, newest first.
    pub async fn list(&self) -> AppResult<Vec<Vehicle>> {
        let records = self.entities.list(Some("-created_date"), None).await?;
        parse_all(&records)
    }

    /// Listings currently in the given status.
    pub async fn by_status(&self, status: VehicleStatus) -> AppResult<Vec<Vehicle>> {
        let records = self.entities.filter(json!({ "status": status })).await?;
        parse_all(&records)
    }

    /// Fetch one listing for the edit form.
    pub async fn get(&self, id: &str) -> AppResult<Vehicle> {
        let records = self.entities.filter(json!({ "id": id })).await?;
        records.first().ok_or_not_found()?.parse()
    }

    /// Publish a new listing.
    pub async fn add(&self, vehicle: NewVehicle) -> AppResult<Vehicle> {
        self.entities.create(vehicle).await?.parse()
    }

    /// Merge listing changes; fails with `NotFound` for an unknown id.
    pub async fn update(&self, id: &str, data: impl Serialize) -> AppResult<Vehicle> {
        self.entities
            .update(id, data)
            .await?
            .ok_or_not_found()?
            .parse()
    }

    /// Remove a listing.
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        self.entities.delete(id).await
    }

    /// Append an uploaded image URL to the listing gallery.
    pub async fn attach_image(&self, id: &str, file_url: String) -> AppResult<Vehicle> {
        let vehicle = self.get(id).await?;
        let mut images = vehicle.images;
        images.push(file_url);
        self.update(id, json!({ "images": images })).await
    }
}
