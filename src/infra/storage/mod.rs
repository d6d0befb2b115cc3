//! Storage ports - the persistence substrate behind the entity store.
//!
//! The store never touches the substrate directly; it goes through the
//! [`StoragePort`] seam so tests can inject an in-memory fake.

use async_trait::async_trait;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::errors::AppResult;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Key/value substrate holding one opaque document per storage key.
///
/// `read` returns `None` for a key that has never been written, which is how
/// the store tells an uninitialized collection apart from an empty one.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StoragePort: Send + Sync {
    /// Fetch the document stored under `key`.
    async fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document stored under `key`.
    async fn write(&self, key: &str, value: &str) -> AppResult<()>;
}
