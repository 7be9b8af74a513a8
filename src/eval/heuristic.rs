//! Position scoring for the minimax search
//!
//! Two scoring modes:
//! - `evaluate`: static line heuristic for depth-limited search
//! - `terminal_score`: exact score of a decided game, biased by depth

use crate::board::{Board, Mark};
use crate::rules::line_windows;

use super::patterns::LineScore;

/// Evaluate the board from the computer's perspective.
///
/// Sums over every window of exactly `win_length` cells:
/// - `+NEAR_WIN` when the computer holds all but one cell and the last is empty
/// - `-NEAR_WIN` when the human does
/// - 0 otherwise, including windows holding both marks
///
/// Completed lines score 0; wins are detected by the search, not here.
#[must_use]
pub fn evaluate(board: &Board) -> i32 {
    let needed = board.win_length() - 1;
    line_windows(board)
        .map(|window| {
            let (mut computer, mut human, mut empty) = (0, 0, 0);
            for &cell in &window {
                match board.get(cell) {
                    Some(Mark::Computer) => computer += 1,
                    Some(Mark::Human) => human += 1,
                    None => empty += 1,
                }
            }
            if empty != 1 {
                0
            } else if computer == needed {
                LineScore::NEAR_WIN
            } else if human == needed {
                -LineScore::NEAR_WIN
            } else {
                0
            }
        })
        .sum()
}

/// Score a finished game reached `ply` plies below the root move.
///
/// Faster wins score higher and slower losses score higher, so the search
/// prefers the quickest win and the longest defense. A draw scores 0.
#[inline]
#[must_use]
pub fn terminal_score(winner: Option<Mark>, ply: u32) -> i32 {
    let ply = ply as i32;
    match winner {
        Some(Mark::Computer) => LineScore::WIN - ply,
        Some(Mark::Human) => -LineScore::WIN + ply,
        None => 0,
    }
}
