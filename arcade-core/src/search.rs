//! Adversarial search for the gravity variant.
//!
//! Three difficulty tiers:
//!
//! - `Easy`: uniform-random legal column.
//! - `Hard`: one-ply tactics — take an immediate win, else block the
//!   opponent's immediate win, else random.
//! - `Medium`: depth-limited minimax with alpha-beta pruning, scoring only
//!   win/loss at the horizon. The depth term biases toward faster wins and
//!   slower losses.
//!
//! The search is pure and synchronous: every hypothetical move is applied
//! to a clone, so the caller's board is never mutated.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::four_in_a_row::{check_win, drop_piece, legal_moves};
use crate::{Board, Player};

/// AI difficulty tier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Base magnitude of a win/loss score before depth adjustment.
pub const WIN_SCORE: i32 = 1000;

/// Search depth used by the medium tier.
pub const DEFAULT_DEPTH: u32 = 4;

/// Win/loss signal at a node visited `depth` plies into the search.
fn score_board(board: &Board, ai: Player, opponent: Player, depth: u32) -> i32 {
    if check_win(board, ai) {
        WIN_SCORE - depth as i32
    } else if check_win(board, opponent) {
        -(WIN_SCORE - depth as i32)
    } else {
        0
    }
}

/// Clone the board and drop a piece. Columns come from `legal_moves`, so
/// the drop cannot fail.
fn simulate(board: &Board, col: usize, player: Player) -> Board {
    let mut child = board.clone();
    drop_piece(&mut child, col, player).expect("column from legal_moves cannot be full");
    child
}

fn minimax(
    board: &Board,
    ai: Player,
    opponent: Player,
    depth: u32,
    max_depth: u32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let score = score_board(board, ai, opponent, depth);
    let moves = legal_moves(board);
    if score != 0 || depth == max_depth || moves.is_empty() {
        return score;
    }

    if maximizing {
        let mut best = i32::MIN;
        for col in moves {
            let child = simulate(board, col, ai);
            let value = minimax(&child, ai, opponent, depth + 1, max_depth, false, alpha, beta);
            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for col in moves {
            let child = simulate(board, col, opponent);
            let value = minimax(&child, ai, opponent, depth + 1, max_depth, true, alpha, beta);
            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

/// Full-depth root search: evaluate each legal column and keep the one
/// with the strictly best score. Ties break to the first column in
/// enumeration order, which makes the choice deterministic for a given
/// board and depth.
fn best_minimax_move(board: &Board, ai: Player, opponent: Player, max_depth: u32) -> Option<usize> {
    let moves = legal_moves(board);
    let mut best_col = *moves.first()?;
    let mut best_score = i32::MIN;

    for col in moves {
        let child = simulate(board, col, ai);
        let score = minimax(&child, ai, opponent, 0, max_depth, false, i32::MIN, i32::MAX);
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }
    debug!(col = best_col, score = best_score, "minimax root choice");
    Some(best_col)
}

/// Choose a column for the AI player, or `None` if no move is possible.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Player,
    opponent: Player,
    difficulty: Difficulty,
    max_depth: u32,
    rng: &mut R,
) -> Option<usize> {
    let moves = legal_moves(board);
    if moves.is_empty() {
        return None;
    }

    match difficulty {
        Difficulty::Easy => moves.choose(rng).copied(),
        Difficulty::Hard => {
            // Take an immediate win.
            for &col in &moves {
                if check_win(&simulate(board, col, ai), ai) {
                    return Some(col);
                }
            }
            // Block the opponent's immediate win.
            for &col in &moves {
                if check_win(&simulate(board, col, opponent), opponent) {
                    return Some(col);
                }
            }
            moves.choose(rng).copied()
        }
        Difficulty::Medium => best_minimax_move(board, ai, opponent, max_depth),
    }
}
