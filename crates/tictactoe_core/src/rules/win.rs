//! Win detection logic for tic-tac-toe.

use super::super::{Board, GameStatus, Mark, Position, SIZE};
use super::lines::max_run;
use tracing::instrument;

/// Checks if `mark` has a full line through `pos`.
///
/// Only meaningful when `pos` is the square just played: the rest of the
/// board is not scanned. A win can only be completed on the move that
/// creates it, so checking the last move is sufficient.
#[instrument(skip(board))]
pub fn has_won(board: &Board, pos: Position, mark: Mark) -> bool {
    max_run(board, pos, mark) == SIZE
}

/// Status of the game after `mark` was played at `pos`.
pub fn status_after(board: &Board, pos: Position, mark: Mark) -> GameStatus {
    if has_won(board, pos, mark) {
        GameStatus::Won(mark)
    } else if board.is_full() {
        GameStatus::Tie
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Position::new(1, 1), Mark::X));
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Mark::X).unwrap();
        board.place(Position::new(0, 1), Mark::X).unwrap();
        assert!(!has_won(&board, Position::new(0, 1), Mark::X));
        board.place(Position::new(0, 2), Mark::X).unwrap();
        assert!(has_won(&board, Position::new(0, 2), Mark::X));
        assert!(!has_won(&board, Position::new(0, 2), Mark::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        board.place(Position::new(0, 2), Mark::O).unwrap();
        board.place(Position::new(2, 0), Mark::O).unwrap();
        board.place(Position::new(1, 1), Mark::O).unwrap();
        assert!(has_won(&board, Position::new(1, 1), Mark::O));
    }

    #[test]
    fn test_win_is_idempotent() {
        let mut board = Board::new();
        for i in 0..SIZE {
            board.place(Position::new(i, 1), Mark::X).unwrap();
        }
        let pos = Position::new(2, 1);
        assert!(has_won(&board, pos, Mark::X));
        assert!(has_won(&board, pos, Mark::X));
    }

    #[test]
    fn test_status_after() {
        let mut board = Board::new();
        board.place(Position::new(1, 1), Mark::X).unwrap();
        assert_eq!(
            status_after(&board, Position::new(1, 1), Mark::X),
            GameStatus::InProgress
        );
    }

    #[test]
    fn test_status_tie_on_full_board() {
        // x o x / x o o / o x x
        let layout = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
        ];
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.into_iter().zip(layout) {
            board.place(pos, mark).unwrap();
        }
        let last = Position::new(2, 2);
        assert_eq!(status_after(&board, last, Mark::X), GameStatus::Tie);
    }
}
