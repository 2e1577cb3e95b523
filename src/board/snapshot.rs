//! Read-only render view of a board.

use serde::{Deserialize, Serialize};

use crate::core::{GameOutcome, Tile, TileStatus, TileValue, TILE_COUNT};

/// Everything the rendering collaborator needs to draw one frame.
///
/// `PartialEq` lets hosts diff consecutive snapshots and skip redraws.
/// The crate never performs I/O itself; serde derives are for hosts that
/// ship snapshots across their own boundaries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// All nine tiles in ascending value order.
    pub tiles: [Tile; TILE_COUNT],

    /// Current target sum. `None` exactly when the board is complete.
    pub target: Option<TileValue>,

    /// Sum of the candidate tiles.
    pub candidate_sum: u16,

    /// Derived outcome at the time of the snapshot.
    pub outcome: GameOutcome,
}

impl BoardSnapshot {
    /// Get the status of one tile.
    #[must_use]
    pub fn status_of(&self, value: TileValue) -> TileStatus {
        self.tiles[value.index()].status
    }
}
