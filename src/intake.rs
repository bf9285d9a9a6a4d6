//! Event intake: translates the drag and form collaborators' events into
//! board operations and drives the mutate-then-save lifecycle.

use crate::domain::{Board, ColumnKey, IdGenerator, Item, ItemId};
use crate::error::Result;
use crate::storage::BoardStore;
use serde::{Deserialize, Serialize};

/// Where a dragged item was dropped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DropPosition {
    pub column: ColumnKey,
    pub index: usize,
}

/// Emitted by the drag collaborator once per completed or cancelled gesture.
///
/// `destination` is `None` when the drop landed outside any column; the
/// optionality of the destination key/index pair is carried structurally so
/// a half-formed destination cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEndEvent {
    pub source_column: ColumnKey,
    pub source_index: usize,
    pub destination: Option<DropPosition>,
}

/// Emitted by the form collaborator once per validated submission.
///
/// Field content (non-empty label, estimate on the scale) is the form's
/// contract; intake only assigns identity and routes the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitEvent {
    pub label: String,
    pub story_points_estimation: f64,
}

/// Owns the live board between events.
///
/// The rendering layer reads snapshots via [`BoardController::board`] and
/// feeds user actions through [`on_drag_end`](BoardController::on_drag_end)
/// and [`on_submit`](BoardController::on_submit). Events are serialized by
/// the caller's dispatch, so no operation ever observes a half-applied
/// mutation: each one swaps in a complete new board value, then persists it.
pub struct BoardController {
    board: Board,
    store: BoardStore,
    ids: Box<dyn IdGenerator>,
}

impl BoardController {
    /// Loads the persisted board, falling back to the seed board when no
    /// snapshot exists or the stored one cannot be read.
    pub async fn start(store: BoardStore, ids: Box<dyn IdGenerator>) -> Self {
        let board = match store.load().await {
            Ok(Some(board)) => board,
            Ok(None) => Board::seed(ids.as_ref()),
            Err(err) => {
                log::warn!("failed to load persisted board, starting from defaults: {err}");
                Board::seed(ids.as_ref())
            }
        };
        Self { board, store, ids }
    }

    /// The current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handles a drag-end event.
    ///
    /// Cancelled drops and drops back onto the source position are ignored
    /// without touching the model or the store. Returns whether the board
    /// changed. A rejected move (stale index, unknown column) leaves the
    /// prior board in place.
    pub async fn on_drag_end(&mut self, event: DragEndEvent) -> Result<bool> {
        let Some(dest) = event.destination else {
            return Ok(false);
        };
        if dest.column == event.source_column && dest.index == event.source_index {
            return Ok(false);
        }

        let next = self
            .board
            .move_item(&event.source_column, event.source_index, &dest.column, dest.index)
            .map_err(|err| {
                log::error!("rejected drag event: {err}");
                err
            })?;
        self.commit(next).await;
        Ok(true)
    }

    /// Handles a validated form submission: mints a fresh id, builds the
    /// item, and appends it to the intake column. Returns the new id.
    pub async fn on_submit(&mut self, event: SubmitEvent) -> Result<ItemId> {
        let item = Item::new(
            ItemId::new(self.ids.generate()),
            event.label,
            event.story_points_estimation,
        );
        let id = item.id.clone();

        let next = self
            .board
            .append_item(item)
            .map_err(|err| {
                log::error!("rejected submit event: {err}");
                err
            })?;
        self.commit(next).await;
        Ok(id)
    }

    /// Swaps in the new board, then persists it. The in-memory board stays
    /// authoritative when the write fails; the next mutation's full-board
    /// write reconciles the store.
    async fn commit(&mut self, next: Board) {
        self.board = next;
        if let Err(err) = self.store.save(&self.board).await {
            log::warn!("board write failed, retrying on next mutation: {err}");
        }
    }
}
