//! File-backed storage port.
//!
//! One JSON document per storage key, written under a single data directory.
//! Writes are whole-document replacements; there is no locking above the
//! filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use super::StoragePort;
use crate::errors::AppResult;

pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Storage keys may contain characters that are not filename-safe
    /// (the namespace separator in particular), so keys are mapped onto
    /// `[A-Za-z0-9_-]` file stems.
    fn document_path(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{stem}.json"))
    }
}

#[async_trait]
impl StoragePort for FileStorage {
    async fn read(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.document_path(key)).await {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write(&self, key: &str, value: &str) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.document_path(key);
        fs::write(&path, value).await?;
        debug!("wrote {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path());
        assert_eq!(storage.read("admin_data:vehicles").await.unwrap(), None);
    }

    #[tokio::test]
    async fn documents_round_trip() {
        let temp = TempDir::new().unwrap();
        let storage = FileStorage::new(temp.path().join("data"));

        storage.write("admin_data:vehicles", "[]").await.unwrap();
        assert_eq!(
            storage.read("admin_data:vehicles").await.unwrap(),
            Some("[]".to_string())
        );

        // the namespaced key lands as a sanitized file name
        assert!(temp
            .path()
            .join("data")
            .join("admin_data_vehicles.json")
            .exists());
    }
}
