//! # Taskdeck Core
//!
//! Board state model, event intake, and persistence for the Taskdeck
//! kanban board.
//!
//! This crate provides the fundamental types and operations for a board of
//! ordered columns of work items: moving an item within and across columns,
//! appending validated submissions to the intake column, and persisting
//! board snapshots through a pluggable blob store, without any dependency
//! on a specific UI or storage backend. Rendering, drag gesture
//! recognition, and form validation are external collaborators that feed
//! events into [`intake::BoardController`] and re-render from the board
//! snapshot it exposes.

pub mod domain;
pub mod error;
pub mod intake;
pub mod storage;

// Re-export commonly used types
pub use domain::{
    board::{Board, Column, ColumnKey, INTAKE_COLUMN_NAME},
    item::{IdGenerator, Item, ItemId, UuidGenerator, STORY_POINT_SCALE},
};
pub use error::{Result, TaskdeckError};
pub use intake::{BoardController, DragEndEvent, DropPosition, SubmitEvent};
pub use storage::{BlobStore, BoardStore, BOARD_KEY};
