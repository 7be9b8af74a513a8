//! Minimax search with alpha-beta pruning
//!
//! The computer is always the maximizing side and the human the minimizing
//! side. One mutable board is shared by the whole search: every simulated
//! move goes through [`Board::simulate`], which takes the move back before
//! returning, including when a cutoff ends the loop early.
//!
//! How a node is scored depends on the variant:
//! - Exact (`use_heuristic = false`): a node is terminal when any line is
//!   complete or the board is full, and is scored by `terminal_score`
//! - Heuristic (`use_heuristic = true`): a node is terminal at the depth
//!   limit, on a full board, or once a winner is recorded, and is scored by
//!   the static `evaluate`
//!
//! # Example
//!
//! ```
//! use tictac::board::{Board, Mark};
//! use tictac::config::VariantConfig;
//! use tictac::search::Searcher;
//!
//! let mut searcher = Searcher::new(VariantConfig::classic());
//! let mut board = Board::classic();
//! board.place(4, Mark::Human);
//!
//! if let Some(best_move) = searcher.find_best_move(&mut board) {
//!     println!("Best move: {}", best_move + 1);
//! }
//! ```

use crate::board::{Board, Mark, Move};
use crate::config::VariantConfig;
use crate::eval::{evaluate, terminal_score, LineScore};
use crate::rules::find_winner;

use super::ordering::select_moves;

/// Infinity score for alpha-beta bounds
const INF: i32 = LineScore::INF;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited below the root
    pub nodes: u64,
    /// Sibling loops cut short by alpha-beta
    pub cutoffs: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Move>,
    /// Minimax value of the best move
    pub score: i32,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Depth-first minimax searcher for one game variant.
pub struct Searcher {
    config: VariantConfig,
    pruning: bool,
    stats: SearchStats,
}

impl Searcher {
    /// Create a searcher with alpha-beta pruning enabled.
    #[must_use]
    pub fn new(config: VariantConfig) -> Self {
        Self {
            config,
            pruning: true,
            stats: SearchStats::default(),
        }
    }

    /// Create a searcher that visits every node.
    ///
    /// Returns the same values as [`Searcher::new`]; useful for measuring
    /// how much pruning saves.
    #[must_use]
    pub fn without_pruning(config: VariantConfig) -> Self {
        Self {
            pruning: false,
            ..Self::new(config)
        }
    }

    #[inline]
    pub fn config(&self) -> &VariantConfig {
        &self.config
    }

    #[inline]
    pub fn pruning(&self) -> bool {
        self.pruning
    }

    /// Statistics of the most recent search
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Moves to try at a node, shortlisted when the variant filters moves.
    fn candidates(&self, board: &mut Board) -> Vec<Move> {
        let moves = board.available_moves();
        if self.config.filter_moves {
            select_moves(board, &moves)
        } else {
            moves
        }
    }

    /// Score of the node if the search stops here.
    fn leaf_score(&self, board: &Board, ply: u32) -> Option<i32> {
        let horizon = self.config.depth_limit.is_some_and(|limit| ply >= limit);

        if self.config.use_heuristic {
            if horizon || board.winner().is_some() || board.is_full() {
                return Some(evaluate(board));
            }
            return None;
        }

        if let Some(winner) = find_winner(board) {
            return Some(terminal_score(Some(winner), ply));
        }
        if horizon || board.is_full() {
            return Some(terminal_score(None, ply));
        }
        None
    }

    /// Minimax value of `board` with `ply` plies played below the root move.
    ///
    /// `maximizing` is true when the computer is to move. `alpha` and `beta`
    /// bound the window; with `(-INF, INF)` the result is exact. The board is
    /// returned unchanged.
    pub fn minimax(
        &mut self,
        board: &mut Board,
        ply: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;

        if let Some(score) = self.leaf_score(board, ply) {
            return score;
        }

        let mark = if maximizing { Mark::Computer } else { Mark::Human };
        let mut best = if maximizing { -INF } else { INF };

        for mv in self.candidates(board) {
            let score =
                board.simulate(mv, mark, |b| self.minimax(b, ply + 1, !maximizing, alpha, beta));

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.pruning && beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        best
    }

    /// Search every root candidate with a full window and keep the first
    /// move with the strictly greatest value.
    pub fn search(&mut self, board: &mut Board) -> SearchResult {
        self.stats = SearchStats::default();

        let mut best: Option<(Move, i32)> = None;
        for mv in self.candidates(board) {
            let score =
                board.simulate(mv, Mark::Computer, |b| self.minimax(b, 0, false, -INF, INF));
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }

        SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(0, |(_, score)| score),
            stats: self.stats,
        }
    }

    /// Computer's move for `board`, or `None` when no cell is empty.
    pub fn find_best_move(&mut self, board: &mut Board) -> Option<Move> {
        self.search(board).best_move
    }
}
