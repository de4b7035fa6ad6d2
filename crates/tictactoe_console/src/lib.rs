//! Console tic-tac-toe.
//!
//! Thin I/O layer over [`tictactoe_core`]: move entry in `b2` notation,
//! text rendering of the board, the play-again loop and the score table.
//!
//! # Architecture
//!
//! - **Console**: line-oriented terminal abstraction over any reader/writer
//! - **Players**: human (prompted) and computer (heuristic) movers
//! - **Session**: game loop, mark assignment and the running score
//! - **Config**: TOML settings and the command line
//!
//! # Example
//!
//! ```
//! use tictactoe_console::{Console, ConsoleConfig, GameSession, Mode};
//!
//! // x takes the whole a column while o plays column b, then decline a rematch.
//! let input = "a1\nb1\na2\nb2\na3\nn\n";
//! let mut console = Console::new(input.as_bytes(), Vec::new());
//! let config = ConsoleConfig::default();
//! let mut session = GameSession::new(Mode::Duel, &config, Some(1));
//! let score = session.run(&mut console).unwrap();
//! assert_eq!(score.player1() + score.player2(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod input;
mod players;
mod prompt;
mod render;
mod rng;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, ConsoleConfig};
pub use console::{Console, Terminal};
pub use error::{SessionError, SessionErrorKind};
pub use input::{InputError, parse_move};
pub use players::{ComputerPlayer, HumanPlayer, Player};
pub use prompt::prompt_bool;
pub use render::{render_board, render_score};
pub use rng::GameRng;
pub use session::{GameSession, Mode, choose_mode};
