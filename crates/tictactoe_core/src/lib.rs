//! Tic-tac-toe core - board state, line evaluation and the computer player.
//!
//! This crate holds the pure game logic. It performs no I/O; console
//! front-ends drive it through [`Game`] or the lower-level [`Board`] API.
//!
//! # Architecture
//!
//! - **Board**: occupancy of the fixed 3x3 grid
//! - **Rules**: line evaluation through a cell and post-move win detection
//! - **AI**: single-ply heuristic with reservoir-sampled tie-breaking
//! - **Game**: side to move, move count and status bookkeeping
//! - **Score**: wins tally kept across games
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, GameStatus, Mark, Position};
//!
//! let mut game = Game::new();
//! assert_eq!(game.to_move(), Mark::X);
//! let status = game.play(Position::new(1, 1)).unwrap();
//! assert_eq!(status, GameStatus::InProgress);
//! assert_eq!(game.to_move(), Mark::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod ai;
mod error;
mod game;
mod position;
mod rules;
mod score;
mod types;

pub use ai::{choose_move, select_move};
pub use error::InvalidMove;
pub use game::Game;
pub use position::Position;
pub use rules::{has_won, max_run, status_after};
pub use score::{Score, Side};
pub use types::{Board, GameStatus, Mark, Square, SIZE};
