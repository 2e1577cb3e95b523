//! Board state engine: tile statuses, target, selection evaluation.
//!
//! The board owns the nine tile statuses, the current target and the running
//! candidate sum. All mutation happens through `toggle`; evaluation of the
//! selection against the target runs synchronously inside the same call, so
//! after any command returns the candidate sum is strictly below the target
//! whenever a target exists.

use im::Vector;
use smallvec::SmallVec;

use crate::core::{
    GameError, GameOutcome, GameRng, MoveRecord, Result, Tile, TileStatus, TileValue,
    ToggleOutcome, TILE_COUNT,
};

mod reach;
mod snapshot;

pub use snapshot::BoardSnapshot;

/// One game attempt's worth of tile state.
///
/// Created with all nine tiles available and a target drawn from all nine
/// values. The target is `None` exactly when every tile is used.
#[derive(Clone, Debug)]
pub struct Board {
    /// Tile statuses indexed by `TileValue::index()`.
    statuses: [TileStatus; TILE_COUNT],
    target: Option<TileValue>,
    candidate_sum: u16,
    used_count: u8,
    rng: GameRng,
    /// Toggle history. `im::Vector` keeps clones cheap.
    moves: Vector<MoveRecord>,
    next_sequence: u32,
}

impl Board {
    /// Create a fresh board seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    /// Create a fresh board drawing its targets from `rng`.
    #[must_use]
    pub fn with_rng(rng: GameRng) -> Self {
        let mut board = Self {
            statuses: [TileStatus::Available; TILE_COUNT],
            target: None,
            candidate_sum: 0,
            used_count: 0,
            rng,
            moves: Vector::new(),
            next_sequence: 0,
        };
        board.draw_target();
        board
    }

    /// Reconstruct a mid-game board from its observable parts.
    ///
    /// Validates what live play guarantees: a target is present iff tiles
    /// remain, and any restored selection sums strictly below the target
    /// (commands always settle evaluation before returning, so a sum at or
    /// above the target is corrupt input).
    pub fn from_parts(
        statuses: [TileStatus; TILE_COUNT],
        target: Option<TileValue>,
        seed: u64,
    ) -> Result<Self> {
        let used_count = statuses.iter().filter(|s| s.is_used()).count() as u8;
        let candidate_sum: u16 = TileValue::all()
            .filter(|v| statuses[v.index()].is_candidate())
            .map(|v| u16::from(v.raw()))
            .sum();

        match target {
            None if (used_count as usize) < TILE_COUNT => return Err(GameError::MissingTarget),
            Some(_) if used_count as usize == TILE_COUNT => {
                return Err(GameError::UnexpectedTarget)
            }
            Some(t) if candidate_sum >= u16::from(t.raw()) => {
                return Err(GameError::UnsettledSelection {
                    sum: candidate_sum,
                    target: t.raw(),
                })
            }
            _ => {}
        }

        Ok(Self {
            statuses,
            target,
            candidate_sum,
            used_count,
            rng: GameRng::new(seed),
            moves: Vector::new(),
            next_sequence: 0,
        })
    }

    /// Flip a tile between available and candidate, then evaluate.
    ///
    /// Toggling a used tile is a no-op (`Ignored`). Selecting a tile that
    /// brings the sum to the target commits the whole selection as used and
    /// draws a new target (`Matched`, or `Won` when no tiles remain);
    /// overshooting releases the selection back to available (`Busted`).
    /// Equality is checked before overshoot. Deselecting never evaluates.
    pub fn toggle(&mut self, value: TileValue) -> ToggleOutcome {
        let outcome = self.apply_toggle(value);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.moves.push_back(MoveRecord::new(sequence, value, outcome));
        outcome
    }

    fn apply_toggle(&mut self, value: TileValue) -> ToggleOutcome {
        match self.statuses[value.index()] {
            TileStatus::Used => {
                log::trace!("toggle {value}: already used, ignoring");
                ToggleOutcome::Ignored
            }
            TileStatus::Candidate => {
                self.statuses[value.index()] = TileStatus::Available;
                self.candidate_sum -= u16::from(value.raw());
                log::trace!("deselected {value}, sum now {}", self.candidate_sum);
                ToggleOutcome::Deselected
            }
            TileStatus::Available => {
                self.statuses[value.index()] = TileStatus::Candidate;
                self.candidate_sum += u16::from(value.raw());
                log::trace!("selected {value}, sum now {}", self.candidate_sum);
                self.evaluate()
            }
        }
    }

    /// Settle the selection against the target. Called after every select.
    fn evaluate(&mut self) -> ToggleOutcome {
        // A target exists whenever any tile is still selectable.
        let target = match self.target {
            Some(t) => u16::from(t.raw()),
            None => return ToggleOutcome::Selected,
        };

        if self.candidate_sum < target {
            ToggleOutcome::Selected
        } else if self.candidate_sum == target {
            self.commit_selection()
        } else {
            self.release_selection()
        }
    }

    /// Exact match: all candidates become used, a new target is drawn.
    fn commit_selection(&mut self) -> ToggleOutcome {
        let selection = self.selection();
        for value in &selection {
            self.statuses[value.index()] = TileStatus::Used;
        }
        self.used_count += selection.len() as u8;
        self.candidate_sum = 0;
        log::debug!(
            "matched {:?} against {:?}, {} tiles used",
            selection,
            self.target,
            self.used_count
        );

        if usize::from(self.used_count) == TILE_COUNT {
            self.target = None;
            log::debug!("board complete, game won");
            ToggleOutcome::Won
        } else {
            self.draw_target();
            ToggleOutcome::Matched
        }
    }

    /// Overshoot: the whole selection reverts to available.
    fn release_selection(&mut self) -> ToggleOutcome {
        let selection = self.selection();
        for value in &selection {
            self.statuses[value.index()] = TileStatus::Available;
        }
        log::debug!(
            "busted at {} over {:?}, released {:?}",
            self.candidate_sum,
            self.target,
            selection
        );
        self.candidate_sum = 0;
        ToggleOutcome::Busted
    }

    /// Draw a new target uniformly from the available tile values.
    fn draw_target(&mut self) {
        let available = self.available_values();
        self.target = self.rng.choose(&available).copied();
        log::debug!("drew target {:?} from {:?}", self.target, available);
    }

    /// Derived outcome: `Won` once every tile is used, `Lost` when no subset
    /// of the remaining tiles can reach the target, `Playing` otherwise.
    ///
    /// The reachability check covers all non-used tiles, since candidates
    /// can always be released back. `Lost` is reported, not enforced: the
    /// board keeps accepting toggles, it just can never match again.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        match self.target {
            None => GameOutcome::Won,
            Some(target) => {
                if reach::can_reach(self.usable_values(), target.raw()) {
                    GameOutcome::Playing
                } else {
                    GameOutcome::Lost
                }
            }
        }
    }

    /// Current target sum, `None` once the board is complete.
    #[must_use]
    pub fn target(&self) -> Option<TileValue> {
        self.target
    }

    /// Sum of the candidate tiles.
    #[must_use]
    pub fn candidate_sum(&self) -> u16 {
        self.candidate_sum
    }

    /// Number of used tiles.
    #[must_use]
    pub fn used_count(&self) -> u8 {
        self.used_count
    }

    /// Status of one tile.
    #[must_use]
    pub fn status_of(&self, value: TileValue) -> TileStatus {
        self.statuses[value.index()]
    }

    /// All nine tiles in ascending value order.
    #[must_use]
    pub fn tiles(&self) -> [Tile; TILE_COUNT] {
        std::array::from_fn(|i| Tile {
            value: TileValue::ALL[i],
            status: self.statuses[i],
        })
    }

    /// Values of the candidate tiles, ascending.
    #[must_use]
    pub fn selection(&self) -> SmallVec<[TileValue; TILE_COUNT]> {
        TileValue::all()
            .filter(|v| self.statuses[v.index()].is_candidate())
            .collect()
    }

    /// Values of the available tiles, ascending.
    #[must_use]
    pub fn available_values(&self) -> SmallVec<[TileValue; TILE_COUNT]> {
        TileValue::all()
            .filter(|v| self.statuses[v.index()].is_available())
            .collect()
    }

    /// Iterate over the toggle history, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &MoveRecord> {
        self.moves.iter()
    }

    /// Number of toggle commands this board has processed.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// Read-only render view of the board.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            tiles: self.tiles(),
            target: self.target,
            candidate_sum: self.candidate_sum,
            outcome: self.outcome(),
        }
    }

    /// Values of all tiles that are not yet used.
    fn usable_values(&self) -> impl Iterator<Item = TileValue> + '_ {
        TileValue::all().filter(|v| !self.statuses[v.index()].is_used())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tile(value: u8) -> TileValue {
        TileValue::new(value).unwrap()
    }

    /// Board with a known target and all tiles available.
    fn board_with_target(target: u8) -> Board {
        Board::from_parts(
            [TileStatus::Available; TILE_COUNT],
            Some(tile(target)),
            42,
        )
        .unwrap()
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(42);

        assert_eq!(board.candidate_sum(), 0);
        assert_eq!(board.used_count(), 0);
        assert_eq!(board.outcome(), GameOutcome::Playing);
        assert_eq!(board.available_values().len(), TILE_COUNT);

        // Initial target is drawn from all nine values
        let target = board.target().unwrap();
        assert!((1..=9).contains(&target.raw()));
    }

    #[test]
    fn test_select_below_target_keeps_candidates() {
        let mut board = board_with_target(9);

        assert_eq!(board.toggle(tile(1)), ToggleOutcome::Selected);
        assert_eq!(board.toggle(tile(3)), ToggleOutcome::Selected);

        assert_eq!(board.candidate_sum(), 4);
        assert_eq!(board.status_of(tile(1)), TileStatus::Candidate);
        assert_eq!(board.status_of(tile(3)), TileStatus::Candidate);
        assert_eq!(board.used_count(), 0);
    }

    #[test]
    fn test_deselect_restores_available() {
        let mut board = board_with_target(9);

        board.toggle(tile(4));
        assert_eq!(board.toggle(tile(4)), ToggleOutcome::Deselected);

        assert_eq!(board.candidate_sum(), 0);
        assert_eq!(board.status_of(tile(4)), TileStatus::Available);
    }

    #[test]
    fn test_exact_match_commits_selection() {
        let mut board = board_with_target(9);

        assert_eq!(board.toggle(tile(4)), ToggleOutcome::Selected);
        assert_eq!(board.toggle(tile(5)), ToggleOutcome::Matched);

        assert_eq!(board.status_of(tile(4)), TileStatus::Used);
        assert_eq!(board.status_of(tile(5)), TileStatus::Used);
        assert_eq!(board.used_count(), 2);
        assert_eq!(board.candidate_sum(), 0);

        // New target comes from the remaining available values
        let target = board.target().unwrap();
        assert!(board.available_values().contains(&target));
        assert_ne!(target, tile(4));
        assert_ne!(target, tile(5));
    }

    #[test]
    fn test_overshoot_releases_selection() {
        let mut board = board_with_target(5);

        assert_eq!(board.toggle(tile(2)), ToggleOutcome::Selected);
        assert_eq!(board.toggle(tile(9)), ToggleOutcome::Busted);

        assert_eq!(board.status_of(tile(2)), TileStatus::Available);
        assert_eq!(board.status_of(tile(9)), TileStatus::Available);
        assert_eq!(board.candidate_sum(), 0);
        assert_eq!(board.used_count(), 0);
        assert_eq!(board.outcome(), GameOutcome::Playing);
        assert_eq!(board.target(), Some(tile(5)));
    }

    #[test]
    fn test_used_tile_toggle_is_noop() {
        let mut board = board_with_target(4);
        board.toggle(tile(4));
        assert_eq!(board.status_of(tile(4)), TileStatus::Used);

        let before = board.snapshot();
        assert_eq!(board.toggle(tile(4)), ToggleOutcome::Ignored);
        assert_eq!(board.snapshot(), before);
    }

    #[test]
    fn test_last_match_wins() {
        let mut statuses = [TileStatus::Used; TILE_COUNT];
        statuses[tile(9).index()] = TileStatus::Available;
        let mut board = Board::from_parts(statuses, Some(tile(9)), 42).unwrap();

        assert_eq!(board.toggle(tile(9)), ToggleOutcome::Won);
        assert_eq!(board.target(), None);
        assert_eq!(board.outcome(), GameOutcome::Won);
        assert_eq!(board.used_count(), 9);
    }

    #[test]
    fn test_stuck_board_is_lost() {
        // Only 9 remains but the target is 5: no subset reaches it
        let mut statuses = [TileStatus::Used; TILE_COUNT];
        statuses[tile(9).index()] = TileStatus::Available;
        let board = Board::from_parts(statuses, Some(tile(5)), 42).unwrap();

        assert_eq!(board.outcome(), GameOutcome::Lost);
    }

    #[test]
    fn test_lost_counts_candidates_as_usable() {
        // 2 is selected, 3 available, target 5: releasing 2 still reaches 5
        let mut statuses = [TileStatus::Used; TILE_COUNT];
        statuses[tile(2).index()] = TileStatus::Candidate;
        statuses[tile(3).index()] = TileStatus::Available;
        let board = Board::from_parts(statuses, Some(tile(5)), 42).unwrap();

        assert_eq!(board.outcome(), GameOutcome::Playing);
    }

    #[test]
    fn test_move_history() {
        let mut board = board_with_target(9);

        board.toggle(tile(4));
        board.toggle(tile(4));
        board.toggle(tile(9));

        let moves: Vec<_> = board.moves().copied().collect();
        assert_eq!(moves.len(), 3);
        assert_eq!(moves[0], MoveRecord::new(0, tile(4), ToggleOutcome::Selected));
        assert_eq!(moves[1], MoveRecord::new(1, tile(4), ToggleOutcome::Deselected));
        assert_eq!(moves[2], MoveRecord::new(2, tile(9), ToggleOutcome::Matched));
        assert_eq!(board.move_count(), 3);
    }

    #[test]
    fn test_from_parts_rejects_missing_target() {
        let statuses = [TileStatus::Available; TILE_COUNT];
        assert_eq!(
            Board::from_parts(statuses, None, 42).unwrap_err(),
            GameError::MissingTarget
        );
    }

    #[test]
    fn test_from_parts_rejects_target_on_complete_board() {
        let statuses = [TileStatus::Used; TILE_COUNT];
        assert_eq!(
            Board::from_parts(statuses, Some(tile(3)), 42).unwrap_err(),
            GameError::UnexpectedTarget
        );
        assert!(Board::from_parts(statuses, None, 42).is_ok());
    }

    #[test]
    fn test_from_parts_rejects_unsettled_selection() {
        let mut statuses = [TileStatus::Available; TILE_COUNT];
        statuses[tile(3).index()] = TileStatus::Candidate;
        statuses[tile(4).index()] = TileStatus::Candidate;

        assert_eq!(
            Board::from_parts(statuses, Some(tile(5)), 42).unwrap_err(),
            GameError::UnsettledSelection { sum: 7, target: 5 }
        );
        // Same selection is fine under a higher target
        assert!(Board::from_parts(statuses, Some(tile(8)), 42).is_ok());
    }

    #[test]
    fn test_board_determinism() {
        let mut a = Board::new(1234);
        let mut b = Board::new(1234);

        assert_eq!(a.target(), b.target());
        for value in TileValue::all() {
            assert_eq!(a.toggle(value), b.toggle(value));
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }
}
