//! Turn bookkeeping around a [`Board`].

use super::ai::select_move;
use super::error::InvalidMove;
use super::rules::status_after;
use super::{Board, GameStatus, Mark, Position};
use rand::Rng;
use tracing::{info, instrument};

/// A single game: the board, the side to move and the status.
///
/// `x` always moves first. After a move that ends the game every further
/// move is rejected with [`InvalidMove::GameOver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    last_move: Option<Position>,
}

impl Game {
    /// Creates a new game with an empty board and `x` to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark whose turn it is.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the most recently played position.
    pub fn last_move(&self) -> Option<Position> {
        self.last_move
    }

    /// Number of moves played.
    pub fn moves(&self) -> usize {
        self.board.played()
    }

    /// Plays the side to move at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] when the game is over, the position is off the
    /// board, or the square is occupied. Nothing changes on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, InvalidMove> {
        if self.status.is_over() {
            return Err(InvalidMove::GameOver);
        }
        self.board.place(pos, self.to_move)?;
        Ok(self.finish_turn(pos))
    }

    /// Lets the computer play the side to move.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::GameOver`] when the game has already ended.
    #[instrument(skip(self, rng), fields(player = %self.to_move))]
    pub fn play_computer<R: Rng>(&mut self, rng: &mut R) -> Result<Position, InvalidMove> {
        if self.status.is_over() {
            return Err(InvalidMove::GameOver);
        }
        let ai = self.to_move;
        // An in-progress game always has an empty square.
        let pos = select_move(&mut self.board, ai.opponent(), ai, rng).ok_or(InvalidMove::GameOver)?;
        self.finish_turn(pos);
        Ok(pos)
    }

    fn finish_turn(&mut self, pos: Position) -> GameStatus {
        let mover = self.to_move;
        self.last_move = Some(pos);
        self.status = status_after(&self.board, pos, mover);

        if self.status.is_over() {
            info!(status = ?self.status, moves = self.moves(), "Game finished");
        } else {
            self.to_move = mover.opponent();
        }
        self.status
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
