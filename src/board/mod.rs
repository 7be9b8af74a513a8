//! Board representation for N-in-a-row games

pub mod board;


// Re-exports
pub use board::Board;

/// A move is an index into the board's cells, row-major, in `[0, size²)`.
pub type Move = usize;

/// Largest supported side length.
pub const MAX_SIZE: usize = 16;

/// Direction vectors for line checking (4 directions)
pub const DIRECTIONS: [(isize, isize); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Player marks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Human,
    Computer,
}

impl Mark {
    /// Get opponent mark
    #[inline]
    pub fn opponent(self) -> Mark {
        match self {
            Mark::Human => Mark::Computer,
            Mark::Computer => Mark::Human,
        }
    }

    /// Character used when rendering the board
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Mark::Human => 'X',
            Mark::Computer => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
