//! Human player that enters moves on the terminal.

use super::Player;
use crate::input::parse_move;
use crate::{GameRng, SessionError, Terminal};
use std::io::Write;
use tictactoe_core::{Game, InvalidMove, Position};
use tracing::{debug, instrument};

/// Human player prompted for a move until a legal one is entered.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    name: String,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for HumanPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move()))]
    fn take_turn(
        &mut self,
        game: &mut Game,
        terminal: &mut dyn Terminal,
        _rng: &mut GameRng,
    ) -> Result<Position, SessionError> {
        loop {
            write!(terminal, "Select a position: ")?;
            let line = terminal.read_line()?.ok_or_else(SessionError::input_closed)?;

            let pos = match parse_move(&line) {
                Ok(pos) => pos,
                Err(e) => {
                    debug!(error = %e, "Unreadable move");
                    writeln!(terminal, "Invalid move")?;
                    continue;
                }
            };

            match game.play(pos) {
                Ok(_) => return Ok(pos),
                Err(InvalidMove::Occupied(_)) => {
                    debug!(%pos, "Square already played");
                    writeln!(terminal, "Already played there")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
