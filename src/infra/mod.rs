//! Infrastructure layer - External systems integration
//!
//! This module handles the concerns injected into the store:
//! - Storage ports (the key/value substrate)
//! - Id generation

pub mod id;
pub mod storage;

pub use id::{IdGenerator, UuidGenerator};
pub use storage::{FileStorage, MemoryStorage, StoragePort};

#[cfg(any(test, feature = "test-utils"))]
pub use id::SequenceGenerator;
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockStoragePort;
