//! Hamro Rental admin data layer.
//!
//! Durable, namespaced CRUD over the record collections behind the admin
//! dashboard (vehicles, bookings, KYC documents, users), plus the
//! file-to-data-URL adapter that stands in for object storage.
//!
//! # Architecture Layers
//!
//! - **config**: environment settings and application-wide constants
//! - **domain**: entity kinds, schema-less records and typed entity views
//! - **infra**: injected concerns (storage ports, id generation)
//! - **services**: the entity store and the dashboard services over it
//! - **types**: shared list-shaping types
//! - **errors**: centralized error handling
//!
//! # Usage
//!
//! ```no_run
//! use hamro_rental_data::{AdminData, Config};
//!
//! # async fn run() -> hamro_rental_data::AppResult<()> {
//! let admin = AdminData::from_config(&Config::from_env());
//! let vehicles = admin.vehicles().list().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{EntityKind, Record};
pub use errors::{AppError, AppResult};
pub use infra::{FileStorage, MemoryStorage, StoragePort};
pub use services::{AdminData, EntityClient, EntityStore};
