//! Core types: tiles, outcomes, move records, RNG, errors.
//!
//! This module contains the building blocks the board and session are made
//! of. Nothing here holds game state on its own.

pub mod error;
pub mod outcome;
pub mod record;
pub mod rng;
pub mod tile;

pub use error::{GameError, Result};
pub use outcome::{GameOutcome, ToggleOutcome};
pub use record::MoveRecord;
pub use rng::GameRng;
pub use tile::{Tile, TileStatus, TileValue, TILE_COUNT};
