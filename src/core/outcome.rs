//! Derived game outcome and per-command feedback.

use serde::{Deserialize, Serialize};

/// Overall outcome of a board, derived from its tile statuses and target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Tiles remain and the target is still reachable.
    Playing,
    /// All nine tiles are used.
    Won,
    /// No subset of the remaining tiles sums to the target.
    Lost,
}

impl GameOutcome {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameOutcome {
    fn default() -> Self {
        Self::Playing
    }
}

/// What a single toggle command did, reported back to the caller.
///
/// Renderers use `has_update` to skip redraws on no-ops.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToggleOutcome {
    /// The tile is used or the value was out of range. Nothing changed.
    Ignored,
    /// The tile became a candidate; the sum stayed below the target.
    Selected,
    /// The tile went back from candidate to available.
    Deselected,
    /// The selection hit the target exactly and was committed; a new
    /// target was drawn.
    Matched,
    /// The selection overshot the target and was released.
    Busted,
    /// The selection was committed and no tiles remain.
    Won,
}

impl ToggleOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Selected => true,
            Self::Deselected => true,
            Self::Matched => true,
            Self::Busted => true,
            Self::Won => true,
        }
    }

    /// Whether this command committed tiles as used.
    pub const fn committed(self) -> bool {
        matches!(self, Self::Matched | Self::Won)
    }
}
