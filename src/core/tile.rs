//! Tile values and per-tile status.
//!
//! ## TileValue
//!
//! Type-safe tile value, always in 1..=9. Construction validates the range,
//! so every `TileValue` in circulation is usable as a board index.
//!
//! ## TileStatus
//!
//! The per-board lifecycle of a tile. Transitions per tile:
//! Available → Candidate → {Used | Available}. Used is terminal within a board.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Number of tiles on a board.
pub const TILE_COUNT: usize = 9;

/// Validated tile value in 1..=9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileValue(u8);

impl TileValue {
    /// All nine values in ascending order.
    pub const ALL: [TileValue; TILE_COUNT] = [
        TileValue(1),
        TileValue(2),
        TileValue(3),
        TileValue(4),
        TileValue(5),
        TileValue(6),
        TileValue(7),
        TileValue(8),
        TileValue(9),
    ];

    /// Create a tile value, returning `None` outside 1..=9.
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= TILE_COUNT as u8 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Get the raw numeric value (1-based).
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Get the 0-based board index for this value.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Iterate over all nine tile values.
    ///
    /// ```
    /// use star_match::core::TileValue;
    ///
    /// let values: Vec<_> = TileValue::all().collect();
    /// assert_eq!(values.len(), 9);
    /// assert_eq!(values[0].raw(), 1);
    /// assert_eq!(values[8].raw(), 9);
    /// ```
    pub fn all() -> impl Iterator<Item = TileValue> {
        Self::ALL.into_iter()
    }
}

impl TryFrom<u8> for TileValue {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(GameError::InvalidTile(value))
    }
}

impl std::fmt::Display for TileValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of one tile within a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStatus {
    /// Not selected, still in play.
    Available,
    /// Currently selected, pending evaluation.
    Candidate,
    /// Committed by an exact match. Terminal for this board.
    Used,
}

impl TileStatus {
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    pub const fn is_candidate(self) -> bool {
        matches!(self, Self::Candidate)
    }

    pub const fn is_used(self) -> bool {
        matches!(self, Self::Used)
    }
}

impl Default for TileStatus {
    fn default() -> Self {
        Self::Available
    }
}

/// One tile as exposed in snapshots: its value plus current status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub value: TileValue,
    pub status: TileStatus,
}
