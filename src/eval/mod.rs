//! Evaluation module for board positions
//!
//! This module provides scoring for the minimax search:
//! - Line heuristic for depth-limited search
//! - Depth-biased scores for decided games

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, terminal_score};
pub use patterns::LineScore;
