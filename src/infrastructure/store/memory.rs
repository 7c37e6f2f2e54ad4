//! In-process key-value backend.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use crate::domain::repositories::{KeyValueStore, StoreResult};

/// Key-value backend held in a sharded concurrent map.
///
/// Contents are lost on restart. Used for local development, the admin CLI
/// without Redis, and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    storage: DashMap<String, String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        debug!("Using InMemoryStore (data is not persisted)");
        Self {
            storage: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.storage.get(key).map(|value| value.clone()))
    }

    async fn put_if_absent(&self, key: &str, value: &str) -> StoreResult<bool> {
        match self.storage.entry(key.to_string()) {
            Entry::Occupied(_) => Ok(false),
            Entry::Vacant(slot) => {
                slot.insert(value.to_string());
                Ok(true)
            }
        }
    }

    async fn list_keys(&self) -> StoreResult<Vec<String>> {
        Ok(self.storage.iter().map(|e| e.key().clone()).collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_and_get() {
        let store = InMemoryStore::new();

        assert!(store.put_if_absent("2dce7d0e", "https://example.com/a").await.unwrap());

        let value = store.get("2dce7d0e").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://example.com/a"));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryStore::new();
        assert!(store.get("00000000").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_put_if_absent_keeps_first_value() {
        let store = InMemoryStore::new();

        assert!(store.put_if_absent("2dce7d0e", "https://first.com").await.unwrap());
        assert!(!store.put_if_absent("2dce7d0e", "https://second.com").await.unwrap());

        let value = store.get("2dce7d0e").await.unwrap();
        assert_eq!(value.as_deref(), Some("https://first.com"));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_list_keys() {
        let store = InMemoryStore::new();
        assert!(store.list_keys().await.unwrap().is_empty());

        store.put_if_absent("aaaaaaaa", "https://a.com").await.unwrap();
        store.put_if_absent("bbbbbbbb", "https://b.com").await.unwrap();

        let mut keys = store.list_keys().await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["aaaaaaaa", "bbbbbbbb"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_put_if_absent_has_single_winner() {
        let store = std::sync::Arc::new(InMemoryStore::new());

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .put_if_absent("2dce7d0e", &format!("https://example.com/{i}"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(store.len(), 1);
    }
}
