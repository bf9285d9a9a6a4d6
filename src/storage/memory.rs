use crate::error::Result;
use crate::storage::BlobStore;
use async_trait::async_trait;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::Mutex;

/// In-memory blob store.
///
/// Clones share the same underlying map, so a test can hold a handle to
/// inspect what a `BoardStore` wrote. Also usable by embedders that manage
/// durability themselves.
#[derive(Default, Clone)]
pub struct MemoryBlobStore {
    blobs: Arc<Mutex<HashMap<String, String>>>,
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.blobs.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_absent_key() {
        let store = MemoryBlobStore::default();
        assert!(store.get("board").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryBlobStore::default();
        store.set("board", "{}".to_string()).await.unwrap();
        assert_eq!(store.get("board").await.unwrap().as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryBlobStore::default();
        let handle = store.clone();

        store.set("board", "v1".to_string()).await.unwrap();
        assert_eq!(handle.get("board").await.unwrap().as_deref(), Some("v1"));
    }
}
