use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tokio::sync::RwLock;

use super::{new_revision, CollectionStore, StoreError, StoredCollection};

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, StoredCollection>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self, key: &str) -> Result<Option<StoredCollection>, StoreError> {
        Ok(self.collections.read().await.get(key).cloned())
    }

    async fn insert_if_absent(
        &self,
        key: &str,
        items: Value,
    ) -> Result<StoredCollection, StoreError> {
        let mut collections = self.collections.write().await;
        let stored = collections.entry(key.to_string()).or_insert_with(|| {
            let now = Utc::now();
            StoredCollection {
                key: key.to_string(),
                items,
                revision: new_revision(),
                created_at: now,
                updated_at: now,
            }
        });
        Ok(stored.clone())
    }

    async fn save(
        &self,
        key: &str,
        expected_revision: &str,
        items: Value,
    ) -> Result<Option<StoredCollection>, StoreError> {
        let mut collections = self.collections.write().await;
        match collections.get_mut(key) {
            Some(stored) if stored.revision == expected_revision => {
                stored.items = items;
                stored.revision = new_revision();
                stored.updated_at = Utc::now();
                Ok(Some(stored.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn load_missing_returns_none() {
        let store = MemoryStore::new();
        assert!(store.load("hero").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn insert_if_absent_keeps_first_write() {
        let store = MemoryStore::new();
        let first = store.insert_if_absent("hero", json!([1])).await.unwrap();
        let second = store.insert_if_absent("hero", json!([2])).await.unwrap();

        assert_eq!(second.items, json!([1]));
        assert_eq!(second.revision, first.revision);
    }

    #[tokio::test]
    async fn save_checks_revision() {
        let store = MemoryStore::new();
        let stored = store.insert_if_absent("hero", json!([])).await.unwrap();

        let saved = store
            .save("hero", &stored.revision, json!(["a"]))
            .await
            .unwrap()
            .expect("revision matched");
        assert_ne!(saved.revision, stored.revision);
        assert_eq!(saved.items, json!(["a"]));

        // The old revision is now stale.
        let stale = store.save("hero", &stored.revision, json!(["b"])).await.unwrap();
        assert!(stale.is_none());
        assert_eq!(store.load("hero").await.unwrap().unwrap().items, json!(["a"]));
    }

    #[tokio::test]
    async fn save_without_parent_is_refused() {
        let store = MemoryStore::new();
        assert!(store.save("team", "rev", json!([])).await.unwrap().is_none());
    }
}
