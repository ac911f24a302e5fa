//! Common types for the engine: game errors shared across modules.

use crate::bitboard::BitBoardError;

/// Errors returned by board and engine operations.
///
/// Every operation that returns one of these leaves the game state
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (e.g., invalid size or index).
    BitBoardError(BitBoardError),
    /// Cell index is outside 0..9.
    InvalidIndex,
    /// Attempted to mark a cell that is already occupied.
    CellOccupied,
    /// Attempted to clear a cell that holds no mark.
    CellVacant,
    /// Attempted a move after the game reached Won or Draw.
    GameOver,
    /// Attempted to undo with an empty move history.
    NothingToUndo,
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoardError(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            GameError::InvalidIndex => write!(f, "Cell index is out of range"),
            GameError::CellOccupied => write!(f, "Cell is already occupied"),
            GameError::CellVacant => write!(f, "Cell holds no mark"),
            GameError::GameOver => write!(f, "Game has already ended"),
            GameError::NothingToUndo => write!(f, "Move history is empty"),
        }
    }
}
