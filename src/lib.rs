//! # star-match
//!
//! State engine for the Star Match tile game: nine numbered tiles, a
//! randomly drawn target sum, and a selection that is evaluated the moment
//! it reaches the target.
//!
//! ## Design Principles
//!
//! 1. **Commands Over Field Access**: All mutation goes through two
//!    commands (`toggle_tile`, `start_new_game`), so the board invariants
//!    stay enforceable.
//!
//! 2. **Synchronous Evaluation**: Selection evaluation settles inside the
//!    toggle that triggered it. After any command returns, the candidate
//!    sum is strictly below the target whenever a target exists.
//!
//! 3. **Deterministic**: Targets come from a seeded, forkable ChaCha8 RNG.
//!    Same seed, same commands, same game.
//!
//! ## Architecture
//!
//! - **Ownership Swap on Reset**: The session owns exactly one board and
//!   replaces it wholesale on `start_new_game`; no reference to the old
//!   board survives.
//!
//! - **Derived Outcome**: Won/lost is computed from the tile statuses and
//!   target (lost via an exact subset-sum check), never stored.
//!
//! ## Modules
//!
//! - `core`: Tile values and statuses, outcomes, move records, RNG, errors
//! - `board`: Board state engine and render snapshot
//! - `session`: Session controller owning one board per game

pub mod board;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    GameError, GameOutcome, GameRng, MoveRecord, Result, Tile, TileStatus, TileValue,
    ToggleOutcome, TILE_COUNT,
};

pub use crate::board::{Board, BoardSnapshot};

pub use crate::session::Session;
