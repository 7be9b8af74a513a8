//! Board structure with win tracking

use super::{Mark, Move, MAX_SIZE};
use crate::config::VariantConfig;
use crate::rules::check_win;

/// Square game board of `size × size` cells.
///
/// A cell is either empty (`None`) or holds one player's mark. The winner is
/// recorded by [`Board::place`] the first time a placement completes a line of
/// `win_length` marks and is never overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Option<Mark>>,
    size: usize,
    win_length: usize,
    winner: Option<Mark>,
}

impl Board {
    /// Create an empty board.
    ///
    /// `size` and `win_length` are fixed for the lifetime of the board.
    /// Callers are expected to pass values accepted by
    /// [`VariantConfig::validate`].
    pub fn new(size: usize, win_length: usize) -> Self {
        debug_assert!((1..=MAX_SIZE).contains(&size));
        debug_assert!(win_length >= 1 && win_length <= size);
        Self {
            cells: vec![None; size * size],
            size,
            win_length,
            winner: None,
        }
    }

    /// Classic 3x3 three-in-a-row board
    pub fn classic() -> Self {
        Self::new(3, 3)
    }

    /// Empty board shaped by a variant configuration
    pub fn from_config(config: &VariantConfig) -> Self {
        Self::new(config.size, config.win_length)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Total number of cells (size²)
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// Mark at a cell, `None` if empty or out of range
    #[inline]
    pub fn get(&self, mv: Move) -> Option<Mark> {
        self.cells.get(mv).copied().flatten()
    }

    /// Check if a cell exists and is empty
    #[inline]
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.cells.get(mv), Some(None))
    }

    /// All cells in row-major order
    #[inline]
    pub fn cells(&self) -> &[Option<Mark>] {
        &self.cells
    }

    /// Winner recorded so far, if any
    #[inline]
    pub fn winner(&self) -> Option<Mark> {
        self.winner
    }

    /// All empty cells in ascending index order.
    ///
    /// The order is relied upon by the search for tie-breaking.
    pub fn available_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Place a mark on an empty cell.
    ///
    /// Returns `false` without touching the board if the cell is occupied.
    /// On success the winner is recorded when this placement completes a
    /// line and no earlier winner exists.
    pub fn place(&mut self, mv: Move, mark: Mark) -> bool {
        match self.cells.get_mut(mv) {
            Some(cell @ None) => *cell = Some(mark),
            _ => return false,
        }
        if self.winner.is_none() && check_win(self, mv, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Empty a cell. The recorded winner is left untouched.
    #[inline]
    pub fn clear(&mut self, mv: Move) {
        if let Some(cell) = self.cells.get_mut(mv) {
            *cell = None;
        }
    }

    /// Play `mark` at `mv`, run `f` on the resulting position, then restore
    /// the cell and the recorded winner before returning `f`'s result.
    ///
    /// `mv` must be empty.
    pub fn simulate<R>(&mut self, mv: Move, mark: Mark, f: impl FnOnce(&mut Board) -> R) -> R {
        let prior_winner = self.winner;
        let placed = self.place(mv, mark);
        debug_assert!(placed, "simulated move on occupied cell {mv}");

        let result = f(self);

        if placed {
            self.clear(mv);
        }
        self.winner = prior_winner;
        result
    }

    /// Check if no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Number of occupied cells
    #[inline]
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row and column of a cell index
    #[inline]
    pub fn row_col(&self, mv: Move) -> (usize, usize) {
        (mv / self.size, mv % self.size)
    }

    /// Step from `mv` by `(dr, dc)` rows/columns.
    ///
    /// Returns `None` when the step leaves the grid, so lines never wrap
    /// across row boundaries.
    #[inline]
    pub fn step(&self, mv: Move, dr: isize, dc: isize) -> Option<Move> {
        let (row, col) = self.row_col(mv);
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.size && c < self.size).then_some(r * self.size + c)
    }

    /// Center cell and the four corners
    pub fn center_and_corners(&self) -> [Move; 5] {
        let last = self.size - 1;
        [
            (self.size / 2) * self.size + self.size / 2,
            0,
            last,
            last * self.size,
            last * self.size + last,
        ]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}
