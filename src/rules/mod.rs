//! Game rules for N-in-a-row
//!
//! This module implements the win conditions shared by every variant:
//! - Line completion through a single square
//! - Whole-board winner scan
//! - Enumeration of every `win_length` window, used by evaluation

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, find_winner, line_windows, winning_line};
