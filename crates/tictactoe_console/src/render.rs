//! Text rendering of the board and the score table.

use std::fmt::Write;
use tictactoe_core::{Board, Position, SIZE, Score};

/// Formats the board with column letters and row numbers.
///
/// ```text
///    a   b   c
/// 1  x | o |   
///   -----------
/// 2    | x |   
///   -----------
/// 3    |   | o 
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for col in (b'a'..).take(SIZE) {
        let _ = write!(out, "   {}", char::from(col));
    }
    out.push('\n');

    for row in 0..SIZE {
        let _ = write!(out, "{} ", row + 1);
        for col in 0..SIZE {
            let symbol = board
                .cell_at(Position::new(row, col))
                .map_or(' ', |sq| sq.symbol());
            let _ = write!(out, " {} ", symbol);
            if col < SIZE - 1 {
                out.push('|');
            }
        }
        out.push_str("\n  ");
        if row < SIZE - 1 {
            out.push_str(&"-".repeat(SIZE * 3 + SIZE - 1));
        }
        out.push('\n');
    }
    out
}

/// Formats the running score as a two-column table.
pub fn render_score(score: &Score) -> String {
    format!(
        "Player 1  Player 2\n--------  --------\n{:8}{:10}\n",
        score.player1(),
        score.player2()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::{Mark, Side};

    #[test]
    fn test_empty_board() {
        let expected = "   a   b   c\n\
                        1    |   |   \n  -----------\n\
                        2    |   |   \n  -----------\n\
                        3    |   |   \n  \n";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_marks_land_in_their_squares() {
        let mut board = Board::new();
        board.place(Position::new(0, 0), Mark::X).unwrap();
        board.place(Position::new(1, 1), Mark::O).unwrap();
        board.place(Position::new(2, 2), Mark::X).unwrap();

        let rendered = render_board(&board);
        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[1], "1  x |   |   ");
        assert_eq!(lines[3], "2    | o |   ");
        assert_eq!(lines[5], "3    |   | x ");
    }

    #[test]
    fn test_score_table_alignment() {
        let mut score = Score::new();
        score.record(Side::Player1);
        score.record(Side::Player1);
        score.record(Side::Player2);
        assert_eq!(
            render_score(&score),
            "Player 1  Player 2\n--------  --------\n       2         1\n"
        );
    }
}
