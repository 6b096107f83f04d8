//! Four in a Row: 6×7 gravity board.
//!
//! A move is a column index; the piece falls to the lowest empty row of
//! that column and never moves again. Four same-player cells in a line
//! (horizontal, vertical, or either diagonal) win.

use rand::Rng;

use crate::error::GameError;
use crate::search::{self, Difficulty};
use crate::session::{Rules, Status, TurnOutcome};
use crate::{Board, Player};

/// Standard board height.
pub const ROWS: usize = 6;
/// Standard board width.
pub const COLS: usize = 7;

/// The four line directions checked from each cell: right, down,
/// down-right, up-right. Together with scanning every start cell this
/// covers every line on the board exactly once per orientation.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Columns whose top row is still empty.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    (0..board.cols())
        .filter(|&col| board.cell(0, col).is_none())
        .collect()
}

/// Drop a piece into a column. Returns the row it landed in.
pub fn drop_piece(board: &mut Board, col: usize, player: Player) -> Result<usize, GameError> {
    if col >= board.cols() {
        return Err(GameError::OutOfRange { row: 0, col });
    }
    for row in (0..board.rows()).rev() {
        if board.cell(row, col).is_none() {
            board.set_cell(row, col, Some(player));
            return Ok(row);
        }
    }
    Err(GameError::ColumnFull(col))
}

/// Check whether the player has four in a line anywhere on the board.
pub fn check_win(board: &Board, player: Player) -> bool {
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);
    for row in 0..rows {
        for col in 0..cols {
            for (dr, dc) in DIRECTIONS {
                let end_row = row + 3 * dr;
                let end_col = col + 3 * dc;
                if end_row < 0 || end_row >= rows || end_col < 0 || end_col >= cols {
                    continue;
                }
                let line = (0..4).all(|i| {
                    let r = (row + i * dr) as usize;
                    let c = (col + i * dc) as usize;
                    board.cell(r, c) == Some(player)
                });
                if line {
                    return true;
                }
            }
        }
    }
    false
}

/// A full board with no winner is a draw.
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && !check_win(board, Player::One) && !check_win(board, Player::Two)
}

/// The gravity variant, for use with [`crate::GameSession`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FourInARow;

impl Rules for FourInARow {
    type Move = usize;

    fn initial_board(&self) -> Board {
        Board::new(ROWS, COLS)
    }

    fn legal_moves(&self, board: &Board, _player: Player) -> Vec<usize> {
        legal_moves(board)
    }

    fn apply(&self, board: &mut Board, col: usize, player: Player) -> Result<(), GameError> {
        drop_piece(board, col, player).map(|_| ())
    }

    fn resolve_turn(&self, board: &Board, mover: Player) -> TurnOutcome {
        if check_win(board, mover) {
            TurnOutcome::Over(Status::Won(mover))
        } else if board.is_full() {
            TurnOutcome::Over(Status::Draw)
        } else {
            TurnOutcome::Next(mover.opponent())
        }
    }

    fn choose_ai_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        player: Player,
        difficulty: Difficulty,
        max_depth: u32,
        rng: &mut R,
    ) -> Option<usize> {
        search::choose_move(board, player, player.opponent(), difficulty, max_depth, rng)
    }
}
