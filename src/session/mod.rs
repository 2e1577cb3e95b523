//! Game session controller.
//!
//! A session owns a master RNG and exactly one [`Board`]. Starting a new
//! game forks the master RNG and replaces the board wholesale, so nothing
//! of the previous game survives. All mutation flows through the two
//! commands; the renderer only ever sees `&Board` accessors and snapshots.

use crate::board::{Board, BoardSnapshot};
use crate::core::{GameOutcome, GameRng, TileValue, ToggleOutcome};

/// One player's sequence of game attempts.
#[derive(Clone, Debug)]
pub struct Session {
    rng: GameRng,
    board: Board,
    game_number: u32,
}

impl Session {
    /// Create a session and its first board.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let board = Board::with_rng(rng.fork());
        Self {
            rng,
            board,
            game_number: 1,
        }
    }

    /// Discard the current board and start a fresh game.
    ///
    /// The new board gets a forked RNG, so consecutive games draw
    /// independent but reproducible target sequences.
    pub fn start_new_game(&mut self) {
        self.board = Board::with_rng(self.rng.fork());
        self.game_number += 1;
        log::debug!("started game {}", self.game_number);
    }

    /// Raw command surface for the rendering collaborator.
    ///
    /// Values outside 1..=9 are ignored rather than rejected: the renderer
    /// only emits values it rendered, so anything else is a no-op.
    pub fn toggle_tile(&mut self, value: u8) -> ToggleOutcome {
        match TileValue::new(value) {
            Some(value) => self.board.toggle(value),
            None => {
                log::debug!("toggle {value}: outside 1..=9, ignoring");
                ToggleOutcome::Ignored
            }
        }
    }

    /// The current board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current target sum.
    #[must_use]
    pub fn target(&self) -> Option<TileValue> {
        self.board.target()
    }

    /// Current derived outcome.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Sum of the currently selected tiles.
    #[must_use]
    pub fn candidate_sum(&self) -> u16 {
        self.board.candidate_sum()
    }

    /// Render view of the current board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    /// 1-based count of games this session has started.
    #[must_use]
    pub fn game_number(&self) -> u32 {
        self.game_number
    }
}
