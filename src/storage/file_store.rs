use crate::error::Result;
use crate::storage::BlobStore;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

/// File-backed blob store: one JSON file per key under `.taskdeck/`.
///
/// Writes land in a temporary sibling file first and are renamed into
/// place, so a crash mid-write leaves the prior blob intact.
pub struct FileBlobStore {
    root_path: PathBuf,
}

impl FileBlobStore {
    const STORE_DIR: &'static str = ".taskdeck";

    /// Creates a new FileBlobStore rooted at the given project directory
    pub fn new(project_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: project_root.as_ref().join(Self::STORE_DIR),
        }
    }

    fn blob_file(&self, key: &str) -> PathBuf {
        self.root_path.join(format!("{key}.json"))
    }

    async fn ensure_directory_exists(&self) -> Result<()> {
        if !self.root_path.exists() {
            fs::create_dir_all(&self.root_path).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl BlobStore for FileBlobStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_file(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path).await?))
    }

    async fn set(&self, key: &str, value: String) -> Result<()> {
        self.ensure_directory_exists().await?;

        let path = self.blob_file(key);
        let tmp = self.root_path.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).await?;
        fs::rename(&tmp, &path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Board, UuidGenerator};
    use crate::storage::BoardStore;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_before_first_write() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());

        assert!(store.get("board").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());

        store.set("board", "{\"a\":1}".to_string()).await.unwrap();
        assert_eq!(
            store.get("board").await.unwrap().as_deref(),
            Some("{\"a\":1}")
        );

        // Overwrite
        store.set("board", "{\"a\":2}".to_string()).await.unwrap();
        assert_eq!(
            store.get("board").await.unwrap().as_deref(),
            Some("{\"a\":2}")
        );
    }

    #[tokio::test]
    async fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());

        store.set("board", "{}".to_string()).await.unwrap();

        let tmp = temp_dir
            .path()
            .join(FileBlobStore::STORE_DIR)
            .join("board.json.tmp");
        assert!(!tmp.exists());
    }

    #[tokio::test]
    async fn test_board_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let store = BoardStore::new(FileBlobStore::new(temp_dir.path()));

        let board = Board::seed(&UuidGenerator);
        store.save(&board).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded, board);
    }
}
