use crate::{
    domain::Board,
    error::{Result, TaskdeckError},
};
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_store;
pub mod memory;

/// Store key under which the serialized board lives.
pub const BOARD_KEY: &str = "board";

/// Blob store contract for persisting board state.
///
/// A minimal get/set key-value surface; the concrete backend (file,
/// in-memory, browser storage bridge) is an external collaborator. `set`
/// must commit the value atomically: readers observe either the prior blob
/// or the new one, never a partial write.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Reads the blob stored under `key`, or `None` if absent
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, overwriting any prior value
    async fn set(&self, key: &str, value: String) -> Result<()>;
}

/// Persistence adapter between the board model and a blob store.
///
/// Serializes the full board to a single JSON value before committing it,
/// so the stored blob is always a complete snapshot.
pub struct BoardStore {
    store: Box<dyn BlobStore>,
}

impl BoardStore {
    pub fn new(store: impl BlobStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    /// Saves the board, overwriting the prior snapshot
    pub async fn save(&self, board: &Board) -> Result<()> {
        let json = serde_json::to_string(board)?;
        self.store
            .set(BOARD_KEY, json)
            .await
            .map_err(|err| TaskdeckError::PersistenceWriteFailure(err.to_string()))
    }

    /// Loads the persisted board.
    ///
    /// Returns `Ok(None)` on first run (no blob) and for a blob that fails
    /// to parse; an unparseable blob is logged and discarded so startup can
    /// fall back to the default board instead of failing hard.
    pub async fn load(&self) -> Result<Option<Board>> {
        let raw = self
            .store
            .get(BOARD_KEY)
            .await
            .map_err(|err| TaskdeckError::PersistenceLoadFailure(err.to_string()))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(board) => Ok(Some(board)),
            Err(err) => {
                log::warn!("discarding unparseable board blob: {err}");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, Column, ColumnKey, Item, ItemId, INTAKE_COLUMN_NAME};
    use crate::storage::memory::MemoryBlobStore;
    use indexmap::IndexMap;

    fn sample_board() -> Board {
        let mut columns = IndexMap::new();
        columns.insert(
            ColumnKey::new("k1"),
            Column::with_items(
                INTAKE_COLUMN_NAME,
                vec![
                    Item::new(ItemId::new("1"), "First task", 0.25),
                    Item::new(ItemId::new("2"), "Second task", 1.5),
                ],
            ),
        );
        columns.insert(ColumnKey::new("k2"), Column::new("To do"));
        columns.insert(ColumnKey::new("k3"), Column::new("Done"));
        Board::new(columns)
    }

    #[tokio::test]
    async fn test_load_absent_returns_none() {
        let store = BoardStore::new(MemoryBlobStore::default());
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let store = BoardStore::new(MemoryBlobStore::default());
        let board = sample_board();

        store.save(&board).await.unwrap();
        let loaded = store.load().await.unwrap().unwrap();

        assert_eq!(loaded, board);
        let keys: Vec<&str> = loaded.columns().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["k1", "k2", "k3"]);
    }

    #[tokio::test]
    async fn test_load_corrupt_blob_returns_none() {
        let blobs = MemoryBlobStore::default();
        blobs
            .set(BOARD_KEY, "not json at all".to_string())
            .await
            .unwrap();

        let store = BoardStore::new(blobs);
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_overwrites_prior_snapshot() {
        let blobs = MemoryBlobStore::default();
        let store = BoardStore::new(blobs.clone());

        let board = sample_board();
        store.save(&board).await.unwrap();

        let next = board
            .move_item(&ColumnKey::new("k1"), 0, &ColumnKey::new("k2"), 0)
            .unwrap();
        store.save(&next).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, next);
        assert_ne!(loaded, board);
    }
}
