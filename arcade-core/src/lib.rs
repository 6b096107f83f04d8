//! Turn-based two-player grid game engines with adversarial search.
//!
//! Two variants share one board model:
//!
//! - [`four_in_a_row`]: 6×7 gravity board. Pieces drop to the lowest empty
//!   row of a column and never move again; four in a line wins.
//! - [`nexus`]: 6×6 reversi-style board. A move must bracket at least one
//!   opposing run, which flips to the mover's color; piece majority wins
//!   once neither player can move.
//!
//! The [`search`] module provides the difficulty-tiered AI for the gravity
//! variant (random / one-ply tactical / depth-limited minimax with
//! alpha-beta pruning). The [`session`] module wraps a variant behind a
//! [`session::Rules`] implementation and drives turns, terminal detection,
//! and AI invocation for a host UI.
//!
//! The engine is single-threaded and side-effect free: search simulates on
//! cloned boards and never touches the live game state, and every mutation
//! of a session goes through its `apply_move` entry point.

pub mod error;
pub mod four_in_a_row;
pub mod nexus;
pub mod search;
pub mod session;

pub use error::GameError;
pub use four_in_a_row::FourInARow;
pub use nexus::Nexus;
pub use search::Difficulty;
pub use session::{GameEvent, GameSession, MoveOutcome, Rules, SessionConfig, Status, TurnOutcome};

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell coordinate, row-major from the top-left corner.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[inline]
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }
}

/// A two-dimensional grid of cells, each empty or owned by a player.
///
/// Dimensions are fixed at creation. `Clone` is a deep structural copy, so
/// speculative search can simulate on a clone without ever mutating the
/// live board.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Player>>,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a coordinate lies on the board.
    #[inline]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at (row, col). Out-of-bounds access is a programmer
    /// error and panics; move-shaped inputs are bounds-checked by the rule
    /// engines before they reach here.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> Option<Player> {
        debug_assert!(self.in_bounds(row, col));
        self.cells[row * self.cols + col]
    }

    /// Set the cell at (row, col).
    #[inline]
    pub fn set_cell(&mut self, row: usize, col: usize, value: Option<Player>) {
        debug_assert!(self.in_bounds(row, col));
        self.cells[row * self.cols + col] = value;
    }

    /// Check if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Count the cells owned by a player.
    pub fn count(&self, player: Player) -> usize {
        self.cells.iter().filter(|&&c| c == Some(player)).count()
    }

    /// Iterate over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord { row, col }))
    }
}
