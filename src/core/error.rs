use thiserror::Error;

/// Errors from fallible construction.
///
/// Gameplay commands never error: out-of-range or stale toggles are no-ops
/// reported through `ToggleOutcome::Ignored`. Errors are reserved for
/// `TileValue::try_from` and `Board::from_parts`, where the caller hands the
/// crate data it did not produce itself.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("tile value {0} is outside 1..=9")]
    InvalidTile(u8),
    #[error("board has unused tiles but no target")]
    MissingTarget,
    #[error("completed board still carries a target")]
    UnexpectedTarget,
    #[error("restored candidate sum {sum} is not below target {target}")]
    UnsettledSelection { sum: u16, target: u8 },
}

pub type Result<T> = std::result::Result<T, GameError>;
