//! Move entry parsing.
//!
//! Moves are entered as a column letter followed by a row number, `a1`
//! being the top-left square and `c3` the bottom-right.

use derive_more::Display;
use tictactoe_core::{Position, SIZE};
use tracing::instrument;

/// Why a line could not be read as a move.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Nothing was entered.
    #[display("No move entered")]
    Blank,

    /// The text is not a column letter followed by a number.
    #[display("Cannot read {:?} as a move", _0)]
    Malformed(String),

    /// The column or row lies outside the board.
    #[display("Column {} row {} is off the board", column, row)]
    OutOfRange {
        /// Column letter as entered.
        column: char,
        /// Row number as entered.
        row: usize,
    },
}

impl std::error::Error for InputError {}

/// Parses a move such as `b2` into a board position.
#[instrument]
pub fn parse_move(line: &str) -> Result<Position, InputError> {
    let text = line.trim();
    let mut chars = text.chars();
    let column = chars.next().ok_or(InputError::Blank)?.to_ascii_lowercase();

    let row: usize = chars
        .as_str()
        .trim()
        .parse()
        .map_err(|_| InputError::Malformed(text.to_string()))?;

    let col_index = match column {
        'a'..='z' => column as usize - 'a' as usize,
        _ => return Err(InputError::Malformed(text.to_string())),
    };

    if col_index >= SIZE || row == 0 || row > SIZE {
        return Err(InputError::OutOfRange { column, row });
    }

    Ok(Position::new(row - 1, col_index))
}
