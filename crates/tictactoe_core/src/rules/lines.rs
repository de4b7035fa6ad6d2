//! Line evaluation through a single square.

use super::super::{Board, Mark, Position, SIZE, Square};

/// Largest number of `mark` squares on any line through `pos`.
///
/// Considers the row and column of `pos`, the main diagonal when `pos` is on
/// it and the anti-diagonal when `pos` is on it. Every square of a line is
/// counted, not only those adjacent to `pos`. The result is in `[0, SIZE]`;
/// an off-board `pos` scores 0.
pub fn max_run(board: &Board, pos: Position, mark: Mark) -> usize {
    if !pos.is_on_board() {
        return 0;
    }
    row_run(board, pos, mark)
        .max(column_run(board, pos, mark))
        .max(diagonal_run(board, pos, mark))
        .max(anti_diagonal_run(board, pos, mark))
}

fn count(board: &Board, mark: Mark, line: impl Iterator<Item = Position>) -> usize {
    line.filter(|p| board.cell_at(*p) == Some(Square::Occupied(mark)))
        .count()
}

fn row_run(board: &Board, pos: Position, mark: Mark) -> usize {
    count(board, mark, (0..SIZE).map(|j| Position::new(pos.row(), j)))
}

fn column_run(board: &Board, pos: Position, mark: Mark) -> usize {
    count(board, mark, (0..SIZE).map(|i| Position::new(i, pos.column())))
}

fn diagonal_run(board: &Board, pos: Position, mark: Mark) -> usize {
    if !pos.on_main_diagonal() {
        return 0;
    }
    count(board, mark, (0..SIZE).map(|k| Position::new(k, k)))
}

fn anti_diagonal_run(board: &Board, pos: Position, mark: Mark) -> usize {
    if !pos.on_anti_diagonal() {
        return 0;
    }
    count(board, mark, (0..SIZE).map(|i| Position::new(i, SIZE - 1 - i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (i, row) in rows.iter().enumerate() {
            for (j, c) in row.chars().enumerate() {
                let mark = match c {
                    'x' => Mark::X,
                    'o' => Mark::O,
                    _ => continue,
                };
                board.place(Position::new(i, j), mark).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_empty_board_scores_zero() {
        let board = Board::new();
        for pos in Position::ALL {
            assert_eq!(max_run(&board, pos, Mark::X), 0);
        }
    }

    #[test]
    fn test_row_counts_whole_line() {
        let board = board_from(["x.x", "...", "..."]);
        assert_eq!(max_run(&board, Position::new(0, 1), Mark::X), 2);
        assert_eq!(max_run(&board, Position::new(0, 1), Mark::O), 0);
    }

    #[test]
    fn test_column_run() {
        let board = board_from([".o.", ".o.", "..."]);
        assert_eq!(max_run(&board, Position::new(2, 1), Mark::O), 2);
    }

    #[test]
    fn test_diagonal_only_through_diagonal_squares() {
        let board = board_from(["x..", ".x.", "..."]);
        assert_eq!(max_run(&board, Position::new(2, 2), Mark::X), 2);
        // only the column through (2, 1) holds an x
        assert_eq!(max_run(&board, Position::new(2, 1), Mark::X), 1);
        // (0, 2) is on the anti-diagonal, not the main one
        assert_eq!(max_run(&board, Position::new(0, 2), Mark::X), 1);
    }

    #[test]
    fn test_anti_diagonal() {
        let board = board_from(["..o", "...", "o.."]);
        assert_eq!(max_run(&board, Position::new(1, 1), Mark::O), 2);
        assert_eq!(max_run(&board, Position::new(1, 0), Mark::O), 1);
    }

    #[test]
    fn test_max_of_lines() {
        let board = board_from(["xx.", "x..", "x.."]);
        assert_eq!(max_run(&board, Position::new(0, 0), Mark::X), 3);
        assert_eq!(max_run(&board, Position::new(0, 2), Mark::X), 2);
    }

    #[test]
    fn test_off_board_scores_zero() {
        let board = board_from(["xxx", "xxx", "xxx"]);
        assert_eq!(max_run(&board, Position::new(5, 5), Mark::X), 0);
    }

    #[test]
    fn test_run_bounded_for_every_square() {
        let board = board_from(["xox", "oxo", "oxo"]);
        for pos in Position::ALL {
            for mark in Mark::iter() {
                assert!(max_run(&board, pos, mark) <= SIZE);
            }
        }
    }
}
