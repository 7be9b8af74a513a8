//! N-in-a-row game engine
//!
//! Plays two variants against a human:
//! - Classic 3x3 three-in-a-row, solved exactly by full-depth minimax
//! - 5x5 four-in-a-row, searched 3 plies deep with a line heuristic and
//!   candidate move shortlisting
//!
//! Both are configurations of one engine ([`VariantConfig`]), sharing the
//! board, the win rules and the alpha-beta search.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation and bounded line stepping
//! - [`rules`]: Win conditions and line enumeration
//! - [`eval`]: Heuristic and terminal scoring
//! - [`search`]: Move shortlisting and minimax with alpha-beta pruning
//! - [`engine`]: Computer player with timing and statistics
//! - [`config`]: Variant presets and TOML configuration
//! - [`ui`]: Plain-text game loop
//!
//! # Quick Start
//!
//! ```
//! use tictac::{AIEngine, Board, Mark, VariantConfig};
//!
//! let mut engine = AIEngine::new(VariantConfig::classic());
//! let mut board = Board::classic();
//!
//! board.place(4, Mark::Human);
//!
//! // Computer responds
//! if let Some(mv) = engine.get_move(&mut board) {
//!     board.place(mv, Mark::Computer);
//!     println!("Computer plays at {}", mv + 1);
//! }
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Mark, Move};
pub use config::{AppConfig, Variant, VariantConfig};
pub use engine::{AIEngine, MoveResult};
pub use error::{ConfigError, GameError};
