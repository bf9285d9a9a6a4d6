use crate::domain::item::{IdGenerator, Item, ItemId};
use crate::error::{Result, TaskdeckError};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of the column that receives newly submitted items.
pub const INTAKE_COLUMN_NAME: &str = "Requested";

/// Opaque key identifying a column.
///
/// Distinct from the display name: names are not guaranteed unique, keys are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named column holding an ordered sequence of items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub items: Vec<Item>,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    pub fn with_items(name: impl Into<String>, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            items,
        }
    }
}

/// Kanban board state: an ordered mapping from column key to column.
///
/// Key insertion order is the left-to-right display order and is preserved
/// by every operation and by serialization. All mutations go through
/// [`Board::move_item`] and [`Board::append_item`], both pure value-to-value
/// transforms: the input board is never modified, callers swap in the
/// returned value atomically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: IndexMap<ColumnKey, Column>,
}

impl Board {
    pub fn new(columns: IndexMap<ColumnKey, Column>) -> Self {
        Self { columns }
    }

    /// Builds the default board used on first run: the four standard columns
    /// with the intake column pre-seeded, all ids freshly generated.
    pub fn seed(ids: &dyn IdGenerator) -> Self {
        let seed_items = [
            "First task",
            "Second task",
            "Third task",
            "Fourth task",
            "Fifth task",
        ]
        .into_iter()
        .map(|label| Item::new(ItemId::new(ids.generate()), label, 0.25))
        .collect();

        let mut columns = IndexMap::new();
        columns.insert(
            ColumnKey::new(ids.generate()),
            Column::with_items(INTAKE_COLUMN_NAME, seed_items),
        );
        columns.insert(ColumnKey::new(ids.generate()), Column::new("To do"));
        columns.insert(ColumnKey::new(ids.generate()), Column::new("In Progress"));
        columns.insert(ColumnKey::new(ids.generate()), Column::new("Done"));

        Self { columns }
    }

    /// Gets a column by key
    pub fn column(&self, key: &ColumnKey) -> Option<&Column> {
        self.columns.get(key)
    }

    /// Iterates columns in display order
    pub fn columns(&self) -> impl Iterator<Item = (&ColumnKey, &Column)> {
        self.columns.iter()
    }

    /// Number of columns on the board
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of items across all columns
    pub fn item_count(&self) -> usize {
        self.columns.values().map(|col| col.items.len()).sum()
    }

    /// Checks whether an item id exists anywhere on the board
    pub fn contains_item(&self, id: &ItemId) -> bool {
        self.columns
            .values()
            .any(|col| col.items.iter().any(|item| &item.id == id))
    }

    /// Key of the intake column (first column named "Requested")
    pub fn intake_key(&self) -> Result<&ColumnKey> {
        self.columns
            .iter()
            .find(|(_, col)| col.name == INTAKE_COLUMN_NAME)
            .map(|(key, _)| key)
            .ok_or_else(|| TaskdeckError::InvalidReference(INTAKE_COLUMN_NAME.to_string()))
    }

    /// Moves the item at `source_index` in `source` to `dest_index` in `dest`.
    ///
    /// Removal happens before insertion, so for a same-column move
    /// `dest_index` is interpreted against the column with the item already
    /// removed: moving index 0 to index 2 in `[A, B, C]` yields `[B, C, A]`.
    /// Returns a new board; the input is untouched.
    pub fn move_item(
        &self,
        source: &ColumnKey,
        source_index: usize,
        dest: &ColumnKey,
        dest_index: usize,
    ) -> Result<Board> {
        let source_col = self
            .columns
            .get(source)
            .ok_or_else(|| TaskdeckError::InvalidReference(source.to_string()))?;
        if source_index >= source_col.items.len() {
            return Err(TaskdeckError::IndexOutOfRange {
                index: source_index,
                len: source_col.items.len(),
            });
        }

        let dest_col = self
            .columns
            .get(dest)
            .ok_or_else(|| TaskdeckError::InvalidReference(dest.to_string()))?;
        // Dest bounds are checked against the column as it will look after
        // removal; the removed item may be re-inserted at the end.
        let dest_len = if source == dest {
            dest_col.items.len() - 1
        } else {
            dest_col.items.len()
        };
        if dest_index > dest_len {
            return Err(TaskdeckError::IndexOutOfRange {
                index: dest_index,
                len: dest_len,
            });
        }

        let mut next = self.clone();
        let moved = next
            .columns
            .get_mut(source)
            .ok_or_else(|| TaskdeckError::InvalidReference(source.to_string()))?
            .items
            .remove(source_index);
        next.columns
            .get_mut(dest)
            .ok_or_else(|| TaskdeckError::InvalidReference(dest.to_string()))?
            .items
            .insert(dest_index, moved);

        Ok(next)
    }

    /// Appends `item` to the end of the intake column.
    ///
    /// Fails with `DuplicateId` if the id already exists anywhere on the
    /// board (guards against retried submit events). Returns a new board.
    pub fn append_item(&self, item: Item) -> Result<Board> {
        if self.contains_item(&item.id) {
            return Err(TaskdeckError::DuplicateId(item.id.to_string()));
        }

        let intake = self.intake_key()?.clone();
        let mut next = self.clone();
        next.columns
            .get_mut(&intake)
            .ok_or_else(|| TaskdeckError::InvalidReference(intake.to_string()))?
            .items
            .push(item);

        Ok(next)
    }
}
