//! User directory service - admin account overview.

use super::entity_store::{EntityClient, EntityStore};
use super::parse_all;
use crate::domain::{EntityKind, NewUser, User};
use crate::errors::AppResult;

/// Account operations backing the users screen.
///
/// The first read of the underlying collection seeds the synthetic admin
/// account; see the entity store.
pub struct UserDirectory {
    entities: EntityClient,
}

impl UserDirectory {
    pub fn new(store: &EntityStore) -> Self {
        Self {
            entities: store.client(EntityKind::User),
        }
    }

    /// All accounts in stored order.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let records = self.entities.list(None, None).await?;
        parse_all(&records)
    }

    /// Add an account to the directory.
    pub async fn register(&self, user: NewUser) -> AppResult<User> {
        self.entities.create(user).await?.parse()
    }

    /// `(admins, members)` tallies for the header cards.
    pub async fn role_counts(&self) -> AppResult<(usize, usize)> {
        let users = self.list().await?;
        let admins = users.iter().filter(|u| u.is_admin()).count();
        Ok((admins, users.len() - admins))
    }
}
