//! Move history records.

use serde::{Deserialize, Serialize};

use super::outcome::ToggleOutcome;
use super::tile::TileValue;

/// A recorded toggle command with metadata for history tracking.
///
/// Used for:
/// - Replay/debugging
/// - Inspecting how a board reached its current state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Sequence number within the board (0-based, monotonic).
    pub sequence: u32,

    /// The tile value the command named.
    pub value: TileValue,

    /// What the command did.
    pub outcome: ToggleOutcome,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub fn new(sequence: u32, value: TileValue, outcome: ToggleOutcome) -> Self {
        Self {
            sequence,
            value,
            outcome,
        }
    }
}
