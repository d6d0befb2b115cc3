//! AdminData container - centralized access to the data layer.
//!
//! Wires the entity store, the per-screen services and the upload adapter
//! from one storage port, mirroring how the dashboard consumes them.

use std::sync::Arc;

use super::bookings::BookingDesk;
use super::documents::DocumentReview;
use super::entity_store::{EntityClient, EntityStore};
use super::upload::FileUrlAdapter;
use super::users::UserDirectory;
use super::vehicles::VehicleCatalog;
use crate::config::Config;
use crate::domain::EntityKind;
use crate::infra::{FileStorage, StoragePort};

pub struct AdminData {
    store: EntityStore,
    uploads: FileUrlAdapter,
}

impl AdminData {
    /// Wire the data layer over an explicit storage port.
    pub fn new(storage: Arc<dyn StoragePort>, namespace: impl Into<String>) -> Self {
        Self {
            store: EntityStore::new(storage).with_namespace(namespace),
            uploads: FileUrlAdapter,
        }
    }

    /// Wire the data layer from configuration, using file-backed storage.
    pub fn from_config(config: &Config) -> Self {
        let storage: Arc<dyn StoragePort> = Arc::new(FileStorage::new(&config.data_dir));
        Self::new(storage, config.storage_namespace.clone())
    }

    /// The underlying store.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Raw CRUD handle for one entity kind.
    pub fn entity(&self, kind: EntityKind) -> EntityClient {
        self.store.client(kind)
    }

    pub fn vehicles(&self) -> VehicleCatalog {
        VehicleCatalog::new(&self.store)
    }

    pub fn bookings(&self) -> BookingDesk {
        BookingDesk::new(&self.store)
    }

    pub fn documents(&self) -> DocumentReview {
        DocumentReview::new(&self.store)
    }

    pub fn users(&self) -> UserDirectory {
        UserDirectory::new(&self.store)
    }

    /// File-to-URL adapter for image uploads.
    pub fn uploads(&self) -> &FileUrlAdapter {
        &self.uploads
    }
}
