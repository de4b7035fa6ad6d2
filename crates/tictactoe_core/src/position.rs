//! Board coordinates.

use super::types::SIZE;
use serde::{Deserialize, Serialize};

/// A (row, column) pair on the board.
///
/// Construction is unchecked so that callers holding raw coordinates can
/// still ask the board about them; [`Board::place`](crate::Board::place) and
/// [`Board::cell_at`](crate::Board::cell_at) do the bounds checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// All nine on-board positions in row-major order.
    pub const ALL: [Position; SIZE * SIZE] = [
        Position::new(0, 0),
        Position::new(0, 1),
        Position::new(0, 2),
        Position::new(1, 0),
        Position::new(1, 1),
        Position::new(1, 2),
        Position::new(2, 0),
        Position::new(2, 1),
        Position::new(2, 2),
    ];

    /// Creates a position from zero-based coordinates.
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn column(self) -> usize {
        self.column
    }

    /// Whether both coordinates are within `[0, SIZE)`.
    pub fn is_on_board(self) -> bool {
        self.row < SIZE && self.column < SIZE
    }

    /// Row-major index (0-8), or `None` when off the board.
    pub fn to_index(self) -> Option<usize> {
        self.is_on_board().then(|| self.row * SIZE + self.column)
    }

    /// Creates a position from a row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the position lies on the main diagonal.
    pub fn on_main_diagonal(self) -> bool {
        self.is_on_board() && self.row == self.column
    }

    /// Whether the position lies on the anti-diagonal.
    pub fn on_anti_diagonal(self) -> bool {
        self.is_on_board() && self.column == SIZE - 1 - self.row
    }
}

/// Console notation: column letter followed by one-based row (`b2`).
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match u8::try_from(self.column) {
            Ok(col) if self.is_on_board() => write!(f, "{}{}", char::from(b'a' + col), self.row + 1),
            _ => write!(f, "({}, {})", self.row, self.column),
        }
    }
}
