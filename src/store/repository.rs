//! Typed CRUD operations over the JSON store.
//!
//! Every resource follows the same lifecycle: ids are assigned as the
//! current maximum plus one, updates mutate the matching record in place,
//! deletes filter it out, and the whole collection is rewritten on each
//! mutation.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::JsonStore;
use crate::errors::AppError;

/// A record stored in one of the per-resource JSON files.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// File name of the collection inside the data directory.
    const FILE: &'static str;
    /// Human-readable resource name used in error messages.
    const NAME: &'static str;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);
}

/// Records that carry an ISO `YYYY-MM-DD` date and list newest-first.
pub trait Dated: Record {
    fn date(&self) -> &str;
}

/// Repository for all record-list operations.
pub struct Repository {
    store: JsonStore,
}

impl Repository {
    pub fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// List all records in stored order.
    pub async fn list<R: Record>(&self) -> Vec<R> {
        self.store.load(R::FILE).await
    }

    /// List all records sorted by date, newest first. ISO dates compare
    /// correctly as strings.
    pub async fn list_by_date_desc<R: Dated>(&self) -> Vec<R> {
        let mut records: Vec<R> = self.store.load(R::FILE).await;
        records.sort_by(|a, b| b.date().cmp(a.date()));
        records
    }

    /// Get a single record by id.
    pub async fn get<R: Record>(&self, id: u64) -> Result<R, AppError> {
        let records: Vec<R> = self.store.load(R::FILE).await;
        records
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::NotFound(format!("{} {} not found", R::NAME, id)))
    }

    /// Create a record, assigning the next free id.
    pub async fn create<R: Record>(&self, mut record: R) -> Result<R, AppError> {
        let _guard = self.store.lock_mutations().await;
        let mut records: Vec<R> = self.store.load(R::FILE).await;
        record.set_id(next_id(&records));
        records.push(record.clone());
        self.store.save(R::FILE, &records).await?;
        Ok(record)
    }

    /// Update the record matching `id` in place. Fields the caller leaves
    /// untouched in `apply` keep their stored values. The file is not
    /// rewritten when the id is unknown.
    pub async fn update<R, F>(&self, id: u64, apply: F) -> Result<R, AppError>
    where
        R: Record,
        F: FnOnce(&mut R),
    {
        let _guard = self.store.lock_mutations().await;
        let mut records: Vec<R> = self.store.load(R::FILE).await;
        let Some(record) = records.iter_mut().find(|r| r.id() == id) else {
            return Err(AppError::NotFound(format!("{} {} not found", R::NAME, id)));
        };
        apply(record);
        let updated = record.clone();
        self.store.save(R::FILE, &records).await?;
        Ok(updated)
    }

    /// Delete the record matching `id`, leaving every other record intact.
    pub async fn delete<R: Record>(&self, id: u64) -> Result<(), AppError> {
        let _guard = self.store.lock_mutations().await;
        let mut records: Vec<R> = self.store.load(R::FILE).await;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Err(AppError::NotFound(format!("{} {} not found", R::NAME, id)));
        }
        self.store.save(R::FILE, &records).await?;
        Ok(())
    }
}

/// Next id: current maximum plus one, starting at 1 for an empty list.
fn next_id<R: Record>(records: &[R]) -> u64 {
    records.iter().map(Record::id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Widget {
        id: u64,
        label: String,
        date: String,
    }

    impl Record for Widget {
        const FILE: &'static str = "widgets.json";
        const NAME: &'static str = "Widget";

        fn id(&self) -> u64 {
            self.id
        }

        fn set_id(&mut self, id: u64) {
            self.id = id;
        }
    }

    impl Dated for Widget {
        fn date(&self) -> &str {
            &self.date
        }
    }

    fn widget(label: &str, date: &str) -> Widget {
        Widget {
            id: 0,
            label: label.into(),
            date: date.into(),
        }
    }

    async fn repo(dir: &TempDir) -> Repository {
        Repository::new(JsonStore::open(dir.path()).await.unwrap())
    }

    #[tokio::test]
    async fn test_id_assignment_is_max_plus_one() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir).await;

        let a = repo.create(widget("a", "2025-01-01")).await.unwrap();
        let b = repo.create(widget("b", "2025-01-02")).await.unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);

        // Deleting the max frees its id for reuse.
        repo.delete::<Widget>(2).await.unwrap();
        let c = repo.create(widget("c", "2025-01-03")).await.unwrap();
        assert_eq!(c.id, 2);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_the_target() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir).await;

        repo.create(widget("a", "2025-01-01")).await.unwrap();
        repo.create(widget("b", "2025-01-02")).await.unwrap();
        repo.create(widget("c", "2025-01-03")).await.unwrap();

        repo.delete::<Widget>(2).await.unwrap();

        let rest: Vec<Widget> = repo.list().await;
        let ids: Vec<u64> = rest.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir).await;

        let err = repo.delete::<Widget>(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_mutates_in_place() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir).await;

        repo.create(widget("a", "2025-01-01")).await.unwrap();
        let updated = repo
            .update(1, |w: &mut Widget| w.label = "renamed".into())
            .await
            .unwrap();
        assert_eq!(updated.label, "renamed");
        assert_eq!(updated.date, "2025-01-01");

        let err = repo
            .update(7, |w: &mut Widget| w.label = "nope".into())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_list_by_date_desc_sorts_at_read_time() {
        let dir = TempDir::new().unwrap();
        let repo = repo(&dir).await;

        repo.create(widget("old", "2025-01-01")).await.unwrap();
        repo.create(widget("new", "2025-03-01")).await.unwrap();
        repo.create(widget("mid", "2025-02-01")).await.unwrap();

        let sorted: Vec<Widget> = repo.list_by_date_desc().await;
        let labels: Vec<&str> = sorted.iter().map(|w| w.label.as_str()).collect();
        assert_eq!(labels, vec!["new", "mid", "old"]);

        // Stored order is untouched.
        let stored: Vec<Widget> = repo.list().await;
        assert_eq!(stored[0].label, "old");
    }
}
