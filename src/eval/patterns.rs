//! Score constants shared by evaluation and search

/// Scores for lines and terminal positions.
///
/// All scores are from the computer's point of view: positive favors the
/// computer, negative favors the human.
pub struct LineScore;

impl LineScore {
    /// Decided game, before depth adjustment
    pub const WIN: i32 = 10;
    /// Window one move away from completion (all but one cell marked, one empty)
    pub const NEAR_WIN: i32 = 10;
    /// Search bound; larger than any reachable score
    pub const INF: i32 = 1_000_000;
}
