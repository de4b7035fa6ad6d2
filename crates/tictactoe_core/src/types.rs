//! Core domain types for tic-tac-toe.

use super::error::InvalidMove;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Symbol placed by a side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Mark {
    /// Mark `x` (moves first).
    #[display("x")]
    X,
    /// Mark `o`.
    #[display("o")]
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Not yet played.
    #[default]
    Empty,
    /// Played by a mark.
    Occupied(Mark),
}

impl Square {
    /// Character used when drawing the board.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => ' ',
            Square::Occupied(Mark::X) => 'x',
            Square::Occupied(Mark::O) => 'o',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; SIZE * SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position, or `None` when off the board.
    pub fn cell_at(&self, pos: Position) -> Option<Square> {
        pos.to_index().and_then(|i| self.squares.get(i).copied())
    }

    /// Checks whether a square is on the board and empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell_at(pos) == Some(Square::Empty)
    }

    /// Places a mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an off-board position and
    /// [`InvalidMove::Occupied`] for a square that was already played. The
    /// board is left untouched in both cases.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, mark: Mark) -> Result<(), InvalidMove> {
        let index = pos.to_index().ok_or(InvalidMove::OutOfRange {
            row: pos.row(),
            column: pos.column(),
        })?;

        if self.squares[index] != Square::Empty {
            debug!(%pos, "Rejected move onto occupied square");
            return Err(InvalidMove::Occupied(pos));
        }

        self.squares[index] = Square::Occupied(mark);
        Ok(())
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares played so far.
    pub fn played(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty positions in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; SIZE * SIZE] {
        &self.squares
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// The mark completed a line.
    Won(Mark),
    /// Board filled without a line.
    Tie,
}

impl GameStatus {
    /// Whether the game has ended.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.played(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().count(), 9);
        assert!(Position::ALL.iter().all(|p| board.cell_at(*p) == Some(Square::Empty)));
    }

    #[test]
    fn test_place_sets_square() {
        let mut board = Board::new();
        board.place(Position::new(1, 2), Mark::O).unwrap();
        assert_eq!(board.cell_at(Position::new(1, 2)), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.played(), 1);
    }

    #[test]
    fn test_place_occupied_is_rejected_without_mutation() {
        let mut board = Board::new();
        let pos = Position::new(0, 0);
        board.place(pos, Mark::X).unwrap();
        let before = board.clone();

        let result = board.place(pos, Mark::O);
        assert_eq!(result, Err(InvalidMove::Occupied(pos)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_off_board_is_rejected() {
        let mut board = Board::new();
        let result = board.place(Position::new(3, 1), Mark::X);
        assert_eq!(result, Err(InvalidMove::OutOfRange { row: 3, column: 1 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_cell_at_off_board_is_none() {
        let board = Board::new();
        assert_eq!(board.cell_at(Position::new(0, 3)), None);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let mark = if i % 2 == 0 { Mark::X } else { Mark::O };
            board.place(pos, mark).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().next(), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new();
        board.place(Position::new(0, 1), Mark::X).unwrap();
        let cells: Vec<_> = board.empty_cells().take(3).collect();
        assert_eq!(
            cells,
            vec![Position::new(0, 0), Position::new(0, 2), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_mark_opponent_and_display() {
        assert_eq!(Mark::X.opponent(), Mark::O);
        assert_eq!(Mark::O.opponent(), Mark::X);
        assert_eq!(Mark::X.to_string(), "x");
        assert_eq!(Square::Occupied(Mark::O).symbol(), 'o');
        assert_eq!(Square::Empty.symbol(), ' ');
    }
}
