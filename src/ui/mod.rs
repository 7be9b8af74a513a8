//! Text user interface for playing against the engine

pub mod app;
pub mod game_state;
pub mod render;

pub use app::TextApp;
pub use game_state::{GameState, GameStatus};
pub use render::render_board;
