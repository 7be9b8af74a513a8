//! Game state management for the text shell

use tracing::info;

use crate::board::{Board, Mark, Move};
use crate::config::VariantConfig;
use crate::engine::{AIEngine, MoveResult};
use crate::error::GameError;
use crate::rules::winning_line;

/// Progress of a single game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Drawn,
}

/// Main game state: the authoritative board plus move history.
pub struct GameState {
    pub board: Board,
    pub last_move: Option<Move>,
    pub move_history: Vec<(Move, Mark)>,
    pub last_ai_result: Option<MoveResult>,
}

impl GameState {
    pub fn new(config: &VariantConfig) -> Self {
        Self {
            board: Board::from_config(config),
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
        }
    }

    /// Current status, derived from the board
    pub fn status(&self) -> GameStatus {
        match self.board.winner() {
            Some(mark) => GameStatus::Won(mark),
            None if self.board.is_full() => GameStatus::Drawn,
            None => GameStatus::InProgress,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status() != GameStatus::InProgress
    }

    /// Parse a 1-indexed position typed by the player into an available move.
    pub fn parse_position(&self, input: &str) -> Result<Move, GameError> {
        let trimmed = input.trim();
        let position = parse_integer(trimmed)
            .ok_or_else(|| GameError::InvalidInput(trimmed.to_string()))?;

        let max = self.board.total_cells();
        let Some(position) = usize::try_from(position)
            .ok()
            .filter(|p| (1..=max).contains(p))
        else {
            return Err(GameError::OutOfRange { position, max });
        };
        let mv = position - 1;
        if !self.board.is_empty(mv) {
            return Err(GameError::Occupied { position });
        }
        Ok(mv)
    }

    /// Apply the human's move.
    pub fn play_human(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        let max = self.board.total_cells();
        if mv >= max {
            return Err(GameError::OutOfRange {
                position: mv as i128 + 1,
                max,
            });
        }
        if !self.board.place(mv, Mark::Human) {
            return Err(GameError::Occupied { position: mv + 1 });
        }
        Ok(self.record(mv, Mark::Human))
    }

    /// Let the engine choose and apply the computer's move.
    ///
    /// The returned result carries the search statistics; its `best_move`
    /// is `None` only when no move was possible.
    pub fn play_computer(&mut self, engine: &mut AIEngine) -> Result<MoveResult, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let result = engine.get_move_with_stats(&mut self.board);
        if let Some(mv) = result.best_move {
            let placed = self.board.place(mv, Mark::Computer);
            debug_assert!(placed, "engine chose occupied cell {mv}");
            self.record(mv, Mark::Computer);
        }
        self.last_ai_result = Some(result.clone());
        Ok(result)
    }

    fn record(&mut self, mv: Move, mark: Mark) -> GameStatus {
        self.move_history.push((mv, mark));
        self.last_move = Some(mv);

        let status = self.status();
        match status {
            GameStatus::Won(winner) => info!(
                winner = %winner,
                line = ?winning_line(&self.board, mv, winner),
                moves = self.move_history.len(),
                "game won"
            ),
            GameStatus::Drawn => info!(moves = self.move_history.len(), "game drawn"),
            GameStatus::InProgress => {}
        }
        status
    }
}

/// Parse an optionally signed decimal integer.
///
/// Numbers too large for `i128` saturate, so any well-formed number is still
/// reported as a position rather than as unreadable text.
fn parse_integer(text: &str) -> Option<i128> {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(text.parse().unwrap_or(if text.starts_with('-') {
        i128::MIN
    } else {
        i128::MAX
    }))
}
