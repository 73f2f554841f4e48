//! Record persistence collaborator.
//!
//! Records are opaque JSON documents keyed by a store-assigned id. The
//! service imposes no schema and offers no delete or update — a stored
//! record stays retrievable by its id until something outside this system
//! removes it.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::CollabError;

/// Key-value persistence for opaque JSON records.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists `payload` and returns the assigned record id.
    async fn store(&self, payload: serde_json::Value) -> Result<String, CollabError>;

    /// Fetches a record by id. Absence is `Ok(None)`, never an error.
    async fn get(&self, id: &str) -> Result<Option<serde_json::Value>, CollabError>;
}

/// In-process store backed by a `HashMap`.
///
/// Ids are UUIDv7, so listing a dump of the map sorts by insertion time.
/// Contents do not survive a restart; production deployments implement
/// [`RecordStore`] against a real database.
pub struct MemoryStore {
    records: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self { records: RwLock::new(HashMap::new()) }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn store(&self, payload: serde_json::Value) -> Result<String, CollabError> {
        let id = Uuid::now_v7().to_string();
        self.records.write().await.insert(id.clone(), payload);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<Option<serde_json::Value>, CollabError> {
        Ok(self.records.read().await.get(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stored_record_comes_back_unchanged() {
        let store = MemoryStore::new();
        let payload = serde_json::json!({ "name": "x", "nested": { "n": 1 } });

        let id = store.store(payload.clone()).await.unwrap();
        assert_eq!(store.get(&id).await.unwrap(), Some(payload));
    }

    #[tokio::test]
    async fn absent_id_is_none_not_an_error() {
        let store = MemoryStore::new();
        assert_eq!(store.get("missing").await.unwrap(), None);
    }

    #[tokio::test]
    async fn each_store_assigns_a_distinct_id() {
        let store = MemoryStore::new();
        let a = store.store(serde_json::json!(1)).await.unwrap();
        let b = store.store(serde_json::json!(2)).await.unwrap();
        assert_ne!(a, b);
    }
}
