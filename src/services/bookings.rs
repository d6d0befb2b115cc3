//! Booking desk service - admin reservation management.

use serde_json::json;

use super::entity_store::{EntityClient, EntityStore};
use super::parse_all;
use crate::domain::{Booking, BookingStatus, EntityKind, NewBooking};
use crate::errors::{AppResult, OptionExt};

/// Reservation operations backing the bookings screen.
pub struct BookingDesk {
    entities: EntityClient,
}

impl BookingDesk {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            entities: store.client(EntityKind::Booking),
        }
    }

    /// All reservations, newest first.
    pub async fn list(&self) -> AppResult<Vec<Booking>> {
        let records = self.entities.list(Some("-created_date"), None).await?;
        parse_all(&records)
    }

    /// Reservations in the given status.
    pub async fn by_status(&self, status: BookingStatus) -> AppResult<Vec<Booking>> {
        let records = self.entities.filter(json!({ "status": status })).await?;
        parse_all(&records)
    }

    /// Record a reservation.
    pub async fn place(&self, booking: NewBooking) -> AppResult<Booking> {
        self.entities.create(booking).await?.parse()
    }

    /// Move a reservation to a new status; fails with `NotFound` for an
    /// unknown id.
    pub async fn set_status(&self, id: &str, status: BookingStatus) -> AppResult<Booking> {
        self.entities
            .update(id, json!({ "status": status }))
            .await?
            .ok_or_not_found()?
            .parse()
    }

    /// Reservation tallies for the status filter row.
    pub async fn status_counts(&self) -> AppResult<Vec<(BookingStatus, usize)>> {
        let bookings = self.list().await?;
        Ok(BookingStatus::ALL
            .iter()
            .map(|status| {
                let count = bookings.iter().filter(|b| b.status == *status).count();
                (*status, count)
            })
            .collect())
    }
}
