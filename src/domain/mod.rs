pub mod board;
pub mod item;

pub use board::{Board, Column, ColumnKey, INTAKE_COLUMN_NAME};
pub use item::{IdGenerator, Item, ItemId, UuidGenerator, STORY_POINT_SCALE};
