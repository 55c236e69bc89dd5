//! In-memory blob store.
//!
//! Backs tests and local runs with the same per-key overwrite semantics as
//! the cloud collaborator.

use async_trait::async_trait;
use dashmap::DashMap;

use super::BlobStore;
use crate::utils::{WorkbenchError, WorkbenchResult};

/// In-process [`BlobStore`] backed by a concurrent map.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Vec<u8>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, key: &str, bytes: Vec<u8>) -> WorkbenchResult<()> {
        self.blobs.insert(key.to_string(), bytes);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> WorkbenchResult<Vec<String>> {
        Ok(self
            .blobs
            .iter()
            .map(|entry| entry.key().clone())
            .filter(|key| key.starts_with(prefix))
            .collect())
    }

    async fn get(&self, key: &str) -> WorkbenchResult<Vec<u8>> {
        self.blobs
            .get(key)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| WorkbenchError::storage_read(format!("No blob at key: {}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = MemoryBlobStore::new();
        store.put("logs/a.txt", b"a,2026-01-01 12:00:00\n".to_vec()).await.unwrap();
        let bytes = store.get("logs/a.txt").await.unwrap();
        assert_eq!(bytes, b"a,2026-01-01 12:00:00\n");
    }

    #[tokio::test]
    async fn put_overwrites_same_key() {
        let store = MemoryBlobStore::new();
        store.put("logs/a.txt", b"old".to_vec()).await.unwrap();
        store.put("logs/a.txt", b"new".to_vec()).await.unwrap();
        assert_eq!(store.get("logs/a.txt").await.unwrap(), b"new");
        assert_eq!(store.list("logs/").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_filters_by_prefix() {
        let store = MemoryBlobStore::new();
        store.put("logs/a.txt", vec![1]).await.unwrap();
        store.put("logs/b.txt", vec![2]).await.unwrap();
        store.put("other/c.txt", vec![3]).await.unwrap();
        let mut keys = store.list("logs/").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["logs/a.txt", "logs/b.txt"]);
    }

    #[tokio::test]
    async fn get_missing_key_is_a_read_error() {
        let store = MemoryBlobStore::new();
        let err = store.get("logs/nope.txt").await.unwrap_err();
        assert!(matches!(err, WorkbenchError::StorageRead(_)));
    }
}
