//! Nexus: 6×6 reversi-style capture board.
//!
//! A move places a piece on an empty cell and must bracket at least one
//! contiguous run of opposing pieces in some direction; every bracketed
//! piece flips to the mover's color. The game ends only when neither
//! player has a legal move; a player with no moves passes the turn while
//! the opponent can still play.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::error::GameError;
use crate::search::Difficulty;
use crate::session::{Rules, Status, TurnOutcome};
use crate::{Board, Coord, Player};

/// Standard board side length.
pub const SIZE: usize = 6;

/// The 8 capture directions.
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Create a board with the four center cells seeded.
///
/// For even side length N with mid = N/2, the seed pattern is
/// (mid-1,mid-1)=P1, (mid,mid)=P1, (mid-1,mid)=P2, (mid,mid-1)=P2.
pub fn seeded_board(size: usize) -> Board {
    debug_assert!(size >= 4 && size % 2 == 0);
    let mut board = Board::new(size, size);
    let mid = size / 2;
    board.set_cell(mid - 1, mid - 1, Some(Player::One));
    board.set_cell(mid, mid, Some(Player::One));
    board.set_cell(mid - 1, mid, Some(Player::Two));
    board.set_cell(mid, mid - 1, Some(Player::Two));
    board
}

/// Count the opposing pieces bracketed from `at` in one direction.
///
/// Walks outward over contiguous opposing cells; the run only counts if it
/// terminates on one of the player's own pieces. Returns 0 for open,
/// empty-terminated, or board-edge runs.
fn bracketed(board: &Board, at: Coord, dir: (isize, isize), player: Player) -> usize {
    let opponent = player.opponent();
    let mut seen = 0;
    let mut r = at.row as isize + dir.0;
    let mut c = at.col as isize + dir.1;

    while r >= 0 && c >= 0 && (r as usize) < board.rows() && (c as usize) < board.cols() {
        match board.cell(r as usize, c as usize) {
            Some(p) if p == opponent => seen += 1,
            Some(_) => return seen,
            None => return 0,
        }
        r += dir.0;
        c += dir.1;
    }
    0
}

/// Check whether placing at `at` captures anything, short-circuiting on
/// the first qualifying direction. Cheaper than [`captures`] for
/// legality scans.
pub fn can_capture(board: &Board, at: Coord, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| bracketed(board, at, dir, player) > 0)
}

/// All coordinates that would flip if `player` placed at `at`, across
/// every direction.
pub fn captures(board: &Board, at: Coord, player: Player) -> Vec<Coord> {
    let mut flips = Vec::new();
    for dir in DIRECTIONS {
        let n = bracketed(board, at, dir, player);
        for i in 1..=n as isize {
            flips.push(Coord::new(
                (at.row as isize + i * dir.0) as usize,
                (at.col as isize + i * dir.1) as usize,
            ));
        }
    }
    flips
}

/// Empty cells where the player captures at least one run.
pub fn legal_moves(board: &Board, player: Player) -> Vec<Coord> {
    board
        .coords()
        .filter(|&at| board.cell(at.row, at.col).is_none() && can_capture(board, at, player))
        .collect()
}

/// Check whether the player has any legal move at all.
pub fn has_any_move(board: &Board, player: Player) -> bool {
    board
        .coords()
        .any(|at| board.cell(at.row, at.col).is_none() && can_capture(board, at, player))
}

/// Place a piece and flip every bracketed opposing piece.
///
/// Returns the number of flipped pieces. The board is untouched on error.
pub fn apply_move(board: &mut Board, at: Coord, player: Player) -> Result<usize, GameError> {
    if !board.in_bounds(at.row, at.col) {
        return Err(GameError::OutOfRange {
            row: at.row,
            col: at.col,
        });
    }
    if board.cell(at.row, at.col).is_some() {
        return Err(GameError::Occupied {
            row: at.row,
            col: at.col,
        });
    }
    let flips = captures(board, at, player);
    if flips.is_empty() {
        return Err(GameError::NoCapture {
            row: at.row,
            col: at.col,
        });
    }

    board.set_cell(at.row, at.col, Some(player));
    for flip in &flips {
        board.set_cell(flip.row, flip.col, Some(player));
    }
    Ok(flips.len())
}

/// Live piece counts as (player one, player two).
pub fn piece_counts(board: &Board) -> (usize, usize) {
    (board.count(Player::One), board.count(Player::Two))
}

/// The capture variant, for use with [`crate::GameSession`].
#[derive(Clone, Copy, Debug)]
pub struct Nexus {
    size: usize,
}

impl Nexus {
    pub fn new() -> Nexus {
        Nexus { size: SIZE }
    }

    /// A variant board with a custom even side length.
    pub fn with_size(size: usize) -> Nexus {
        Nexus { size }
    }
}

impl Default for Nexus {
    fn default() -> Self {
        Self::new()
    }
}

impl Rules for Nexus {
    type Move = Coord;

    fn initial_board(&self) -> Board {
        seeded_board(self.size)
    }

    fn legal_moves(&self, board: &Board, player: Player) -> Vec<Coord> {
        legal_moves(board, player)
    }

    fn apply(&self, board: &mut Board, at: Coord, player: Player) -> Result<(), GameError> {
        apply_move(board, at, player).map(|_| ())
    }

    fn resolve_turn(&self, board: &Board, mover: Player) -> TurnOutcome {
        let opponent = mover.opponent();
        let opponent_can_move = has_any_move(board, opponent);
        let mover_can_move = has_any_move(board, mover);

        if !opponent_can_move && !mover_can_move {
            let (one, two) = piece_counts(board);
            let status = if one > two {
                Status::Won(Player::One)
            } else if two > one {
                Status::Won(Player::Two)
            } else {
                Status::Draw
            };
            TurnOutcome::Over(status)
        } else if opponent_can_move {
            TurnOutcome::Next(opponent)
        } else {
            // Opponent is stuck but the mover can still play: the turn
            // passes back without consuming a round.
            TurnOutcome::Pass { stuck: opponent }
        }
    }

    // Uniform-random regardless of difficulty, matching the shipped game.
    fn choose_ai_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        _difficulty: Difficulty,
        _max_depth: u32,
        rng: &mut R,
    ) -> Option<Coord> {
        legal_moves(board, player).choose(rng).copied()
    }
}
