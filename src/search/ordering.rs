//! Candidate move shortlisting
//!
//! Before searching, candidates are narrowed to the first non-empty group of:
//! 1. Moves that win for the computer immediately
//! 2. Moves that block an immediate human win
//! 3. Center and corner cells
//! 4. Every candidate
//!
//! This trades completeness for a much smaller branching factor on larger
//! boards: a quiet position only ever considers the center and corners.

use crate::board::{Board, Mark, Move};
use crate::rules::check_win;

/// Candidates where `mark` would complete a line right away.
///
/// Each candidate is played and taken back on `board`.
pub fn immediate_wins(board: &mut Board, candidates: &[Move], mark: Mark) -> Vec<Move> {
    candidates
        .iter()
        .copied()
        .filter(|&mv| board.simulate(mv, mark, |b| check_win(b, mv, mark)))
        .collect()
}

/// Candidates on the center or a corner of the board.
pub fn positional_moves(board: &Board, candidates: &[Move]) -> Vec<Move> {
    let preferred = board.center_and_corners();
    candidates
        .iter()
        .copied()
        .filter(|mv| preferred.contains(mv))
        .collect()
}

/// Shortlist `candidates` in priority order, preserving their relative order.
pub fn select_moves(board: &mut Board, candidates: &[Move]) -> Vec<Move> {
    let wins = immediate_wins(board, candidates, Mark::Computer);
    if !wins.is_empty() {
        return wins;
    }

    let blocks = immediate_wins(board, candidates, Mark::Human);
    if !blocks.is_empty() {
        return blocks;
    }

    let positional = positional_moves(board, candidates);
    if !positional.is_empty() {
        return positional;
    }

    candidates.to_vec()
}
