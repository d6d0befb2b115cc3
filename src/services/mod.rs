//! Application services layer - Use cases and business logic.
//!
//! The entity store is the core component; the per-screen services
//! orchestrate it into the operations the admin dashboard performs.

use serde::de::DeserializeOwned;

use crate::domain::Record;
use crate::errors::AppResult;

mod bookings;
mod container;
mod documents;
mod entity_store;
mod upload;
mod users;
mod vehicles;

pub use bookings::BookingDesk;
pub use container::AdminData;
pub use documents::DocumentReview;
pub use entity_store::{EntityClient, EntityStore};
pub use upload::{data_url, FileUrlAdapter, UploadedFile};
pub use users::UserDirectory;
pub use vehicles::VehicleCatalog;

/// Parse a batch of records into their typed views.
pub(crate) fn parse_all<T: DeserializeOwned>(records: &[Record]) -> AppResult<Vec<T>> {
    records.iter().map(|record| record.parse()).collect()
}
