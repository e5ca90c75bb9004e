//! Flat-file JSON record store.
//!
//! Each resource lives in one JSON file holding the full record list. Reads
//! load the whole collection; writes rewrite the whole file. A missing or
//! unparsable file reads as the empty collection so a fresh data directory
//! needs no seeding step.

mod repository;

pub use repository::*;

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{Mutex, MutexGuard};

use crate::errors::AppError;

/// Store handle over a data directory of per-resource JSON files.
pub struct JsonStore {
    data_dir: PathBuf,
    // Serializes read-modify-write cycles so concurrent mutations of the
    // same resource file cannot clobber each other. Plain reads stay
    // lock-free and may observe the previous snapshot.
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open the store, creating the data directory if needed.
    pub async fn open(data_dir: &Path) -> Result<Self, AppError> {
        tokio::fs::create_dir_all(data_dir).await?;
        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            write_lock: Mutex::new(()),
        })
    }

    /// Acquire the mutation lock for a read-modify-write cycle.
    pub(crate) async fn lock_mutations(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }

    /// Load every record in a resource file. Missing or unparsable files
    /// yield the empty list.
    pub async fn load<T: DeserializeOwned>(&self, file: &str) -> Vec<T> {
        let path = self.data_dir.join(file);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_slice(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!("Unparsable record file {:?}, treating as empty: {}", path, err);
                Vec::new()
            }
        }
    }

    /// Rewrite a resource file with the full record list.
    pub async fn save<T: Serialize>(&self, file: &str, records: &[T]) -> Result<(), AppError> {
        let path = self.data_dir.join(file);
        let raw = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&path, raw).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Probe {
        id: u64,
        label: String,
    }

    #[tokio::test]
    async fn test_missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();

        let records: Vec<Probe> = store.load("nothing.json").await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_unparsable_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("broken.json"), b"{not json").unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();

        let records: Vec<Probe> = store.load("broken.json").await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_save_rewrites_whole_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open(dir.path()).await.unwrap();

        store
            .save(
                "probe.json",
                &[
                    Probe { id: 1, label: "a".into() },
                    Probe { id: 2, label: "b".into() },
                ],
            )
            .await
            .unwrap();
        store
            .save("probe.json", &[Probe { id: 3, label: "c".into() }])
            .await
            .unwrap();

        let records: Vec<Probe> = store.load("probe.json").await;
        assert_eq!(records, vec![Probe { id: 3, label: "c".into() }]);
    }
}
