//! Engine error taxonomy.

use thiserror::Error;

/// Errors surfaced by the rule engines and the session controller.
///
/// Illegal-move errors (`ColumnFull`, `Occupied`, `NoCapture`) are
/// recoverable: the move is rejected, the board is unchanged, and play
/// continues. `OutOfRange` indicates a move that never came from
/// `legal_moves`. `GameOver` rejects moves once the session is terminal.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    #[error("move at ({row}, {col}) captures nothing")]
    NoCapture { row: usize, col: usize },

    #[error("coordinates ({row}, {col}) are out of bounds")]
    OutOfRange { row: usize, col: usize },

    #[error("the game is already over")]
    GameOver,
}
