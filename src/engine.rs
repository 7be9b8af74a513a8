//! Computer player integrating the search with timing and diagnostics
//!
//! # Example
//!
//! ```
//! use tictac::{AIEngine, Board, Mark, VariantConfig};
//!
//! let mut engine = AIEngine::new(VariantConfig::four_in_row());
//! let mut board = Board::from_config(engine.config());
//! board.place(12, Mark::Human);
//!
//! let result = engine.get_move_with_stats(&mut board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Time: {:?}", result.elapsed);
//! ```

use std::time::{Duration, Instant};

use tracing::debug;

use crate::board::{Board, Move};
use crate::config::VariantConfig;
use crate::search::Searcher;

/// Result of a move search with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the best move
    pub score: i32,
    /// Number of nodes searched
    pub nodes: u64,
    /// Number of alpha-beta cutoffs
    pub cutoffs: u64,
    /// Wall-clock time spent searching
    pub elapsed: Duration,
}

impl MoveResult {
    /// Result for a position where no move can be made
    #[inline]
    fn no_move(elapsed: Duration) -> Self {
        Self {
            best_move: None,
            score: 0,
            nodes: 0,
            cutoffs: 0,
            elapsed,
        }
    }
}

/// Computer player for one game variant.
///
/// The engine borrows the caller's board exclusively for the duration of a
/// search and hands it back unchanged.
pub struct AIEngine {
    searcher: Searcher,
}

impl AIEngine {
    /// Create an engine with alpha-beta pruning.
    #[must_use]
    pub fn new(config: VariantConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    /// Create an engine that searches without cutoffs.
    #[must_use]
    pub fn without_pruning(config: VariantConfig) -> Self {
        Self {
            searcher: Searcher::without_pruning(config),
        }
    }

    #[inline]
    pub fn config(&self) -> &VariantConfig {
        self.searcher.config()
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if the game is already decided or no cell is empty.
    #[must_use]
    pub fn get_move(&mut self, board: &mut Board) -> Option<Move> {
        self.get_move_with_stats(board).best_move
    }

    /// Get the best move with search statistics.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &mut Board) -> MoveResult {
        let start = Instant::now();

        if board.winner().is_some() {
            return MoveResult::no_move(start.elapsed());
        }

        let result = self.searcher.search(board);
        let elapsed = start.elapsed();

        debug!(
            best_move = ?result.best_move,
            score = result.score,
            nodes = result.stats.nodes,
            cutoffs = result.stats.cutoffs,
            pruning = self.searcher.pruning(),
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "search finished"
        );

        MoveResult {
            best_move: result.best_move,
            score: result.score,
            nodes: result.stats.nodes,
            cutoffs: result.stats.cutoffs,
            elapsed,
        }
    }
}
