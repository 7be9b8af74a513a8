//! Interactive text game loop
//!
//! Reads 1-indexed positions from any `BufRead`, writes the board and prompts
//! to any `Write`. The human plays `X` and moves first; the computer plays `O`.

use std::io::{BufRead, Write};

use tracing::info;

use crate::board::{Mark, Move};
use crate::config::AppConfig;
use crate::engine::AIEngine;
use crate::error::GameError;

use super::game_state::{GameState, GameStatus};
use super::render::render_board;

/// Human-versus-computer session over text streams.
pub struct TextApp<R, W> {
    input: R,
    output: W,
    state: GameState,
    engine: AIEngine,
    report_timing: bool,
}

impl<R: BufRead, W: Write> TextApp<R, W> {
    pub fn new(config: &AppConfig, engine: AIEngine, input: R, output: W) -> Self {
        Self {
            input,
            output,
            state: GameState::new(engine.config()),
            engine,
            report_timing: config.timing_enabled(),
        }
    }

    /// Game state, for inspection after `run`
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Consume the app, returning the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play one game to completion.
    ///
    /// Returns the final status, or `InProgress` if input ran out first.
    pub fn run(&mut self) -> Result<GameStatus, GameError> {
        self.print_board()?;

        while !self.state.is_over() {
            let Some(mv) = self.read_move()? else {
                info!("input closed before the game ended");
                return Ok(self.state.status());
            };

            let status = self.state.play_human(mv)?;
            self.print_board()?;
            if let GameStatus::Won(mark) = status {
                return self.announce_winner(mark);
            }
            if status != GameStatus::InProgress {
                break;
            }

            writeln!(self.output, "\nAI is thinking...")?;
            let result = self.state.play_computer(&mut self.engine)?;
            if self.report_timing {
                writeln!(
                    self.output,
                    "AI took {:.3} seconds to move.",
                    result.elapsed.as_secs_f64()
                )?;
            }
            if result.best_move.is_some() {
                self.print_board()?;
                if let GameStatus::Won(mark) = self.state.status() {
                    return self.announce_winner(mark);
                }
            }
        }

        writeln!(self.output, "It's a tie!")?;
        Ok(self.state.status())
    }

    /// Prompt until the player enters an available position.
    ///
    /// Returns `None` at end of input.
    fn read_move(&mut self) -> Result<Option<Move>, GameError> {
        let max = self.state.board.total_cells();
        loop {
            write!(self.output, "Enter position (1-{max}): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            match self.state.parse_position(&line) {
                Ok(mv) => return Ok(Some(mv)),
                Err(GameError::InvalidInput(_)) => writeln!(
                    self.output,
                    "Invalid input. Please enter a number between 1 and {max}."
                )?,
                Err(GameError::OutOfRange { .. } | GameError::Occupied { .. }) => {
                    writeln!(self.output, "Invalid move. Try again.")?
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn print_board(&mut self) -> Result<(), GameError> {
        write!(self.output, "{}", render_board(&self.state.board))?;
        Ok(())
    }

    fn announce_winner(&mut self, mark: Mark) -> Result<GameStatus, GameError> {
        writeln!(self.output, "{mark} wins!")?;
        Ok(GameStatus::Won(mark))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VariantConfig;
    use std::io::Cursor;

    fn run_session(config: AppConfig, input: &str) -> (GameStatus, String) {
        let engine = AIEngine::new(config.variant);
        let mut app = TextApp::new(&config, engine, Cursor::new(input.to_string()), Vec::new());
        let status = app.run().unwrap();
        let output = String::from_utf8(app.into_output()).unwrap();
        (status, output)
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let (status, output) = run_session(AppConfig::default(), "abc\n42\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("Invalid input. Please enter a number between 1 and 9."));
        assert!(output.contains("Invalid move. Try again."));
        assert_eq!(output.matches("Enter position (1-9): ").count(), 3);
    }

    #[test]
    fn test_negative_number_is_invalid_move() {
        let (status, output) = run_session(AppConfig::default(), "-1\n");
        assert_eq!(status, GameStatus::InProgress);
        assert!(output.contains("Invalid move. Try again."));
        assert!(!output.contains("Invalid input."));
        assert_eq!(output.matches("Enter position (1-9): ").count(), 2);
    }

    #[test]
    fn test_occupied_cell_reprompts() {
        // Computer answers 5 with 1; entering 1 again is rejected
        let (_, output) = run_session(AppConfig::default(), "5\n1\n");
        assert!(output.contains("AI is thinking..."));
        assert!(output.contains("Invalid move. Try again."));
    }

    #[test]
    fn test_human_cannot_beat_classic_engine() {
        // Always the lowest free position
        let input = (1..=9).map(|n| format!("{n}\n")).collect::<String>().repeat(5);
        let (status, output) = run_session(AppConfig::default(), &input);
        assert_ne!(status, GameStatus::Won(Mark::Human));
        assert!(!output.contains("X wins!"));
        assert!(output.contains("O wins!") || output.contains("It's a tie!"));
    }

    #[test]
    fn test_computer_wins_when_human_ignores_threats() {
        // Human plays 2, 3, 8 while the computer builds a line
        let input = "2\n3\n8\n";
        let (status, output) = run_session(AppConfig::default(), input);
        assert_eq!(status, GameStatus::Won(Mark::Computer));
        assert!(output.trim_end().ends_with("O wins!"));
    }

    #[test]
    fn test_timing_reported_for_four_in_row() {
        let config = AppConfig {
            variant: VariantConfig::four_in_row(),
            report_timing: None,
        };
        let (_, output) = run_session(config, "13\n");
        assert!(output.contains("Enter position (1-25): "));
        assert!(output.contains("AI took "));
        assert!(output.contains(" seconds to move."));
    }

    #[test]
    fn test_timing_off_for_classic() {
        let (_, output) = run_session(AppConfig::default(), "5\n");
        assert!(!output.contains("AI took "));
    }
}
