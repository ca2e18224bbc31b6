//! # Evaluation Module
//!
//! Static evaluation of an Othello position, scored from the perspective of
//! `root`: positive means the position favors `root`.
//!
//! ## Scoring Strategy
//! The raw score is computed from Black's point of view and combines:
//! 1. **Positional weights**: corners are dominant, squares next to a corner
//!    are penalized for giving the opponent corner access.
//! 2. **Disc differential**: raw material count.
//! 3. **Mobility**: difference in the number of legal moves, a proxy for
//!    positional flexibility.
//!
//! With the default factors (4 / 2 / 8) mobility outweighs material until the
//! endgame, which is the intended behavior: early disc grabbing is usually a
//! mistake in Othello.
//!
//! The search calls this only at leaves (depth exhausted or terminal);
//! interior node scores are backed-up leaf values.

use super::config::EvaluationConfig;
use crate::core::{Board, Cell, Position, Side, BOARD_SIZE};
use crate::logic::count_legal_moves;

/// 静的評価。root 側有利なら正。
pub fn evaluate(board: &Board, root: Side, config: &EvaluationConfig) -> i32 {
    let mut positional = 0;
    let mut black = 0i32;
    let mut white = 0i32;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            match board.get(Position::new(row, col)) {
                Cell::Black => {
                    positional += config.weights[row][col];
                    black += 1;
                }
                Cell::White => {
                    positional -= config.weights[row][col];
                    white += 1;
                }
                Cell::Empty => {}
            }
        }
    }
    let disc_diff = black - white;
    let mobility = count_legal_moves(board, Side::Black) as i32
        - count_legal_moves(board, Side::White) as i32;

    let raw = config.positional_factor * positional
        + config.disc_factor * disc_diff
        + config.mobility_factor * mobility;
    match root {
        Side::Black => raw,
        Side::White => -raw,
    }
}
