//! Move rejection.

use super::position::Position;

/// A move the board or game refused to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// Coordinates outside the 3x3 grid.
    #[display("Position ({}, {}) is off the board", row, column)]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The square has already been played.
    #[display("Square {} is already occupied", _0)]
    Occupied(Position),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_move_display() {
        assert_eq!(
            InvalidMove::OutOfRange { row: 4, column: 0 }.to_string(),
            "Position (4, 0) is off the board"
        );
        assert_eq!(
            InvalidMove::Occupied(Position::new(1, 1)).to_string(),
            "Square b2 is already occupied"
        );
        assert_eq!(InvalidMove::GameOver.to_string(), "Game is already over");
    }
}
