//! Game error types

use thiserror::Error;

/// Result type alias for game operations
pub type Result<T> = std::result::Result<T, GameError>;

/// Moves the engine refuses to apply
///
/// These signal a caller bug: legal moves come from `Board::actions`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Cell ({row}, {col}) is already taken")]
    CellOccupied { row: usize, col: usize },

    #[error("Cell ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("Invalid move syntax: {0:?} (expected \"row col\")")]
    Parse(String),
}
