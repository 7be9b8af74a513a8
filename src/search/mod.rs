//! Search module for the computer player
//!
//! Contains:
//! - Candidate move shortlisting (win, block, center/corners)
//! - Minimax with alpha-beta pruning

pub mod alphabeta;
pub mod ordering;

pub use alphabeta::{SearchResult, SearchStats, Searcher};
pub use ordering::{immediate_wins, positional_moves, select_moves};
