use thiserror::Error;

pub type Result<T> = std::result::Result<T, TaskdeckError>;

#[derive(Debug, Error)]
pub enum TaskdeckError {
    #[error("Unknown column key: {0}")]
    InvalidReference(String),

    #[error("Index {index} out of range for column of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Failed to load persisted board: {0}")]
    PersistenceLoadFailure(String),

    #[error("Failed to write board to store: {0}")]
    PersistenceWriteFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
