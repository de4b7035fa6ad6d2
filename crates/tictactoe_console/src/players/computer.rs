//! Computer player driven by the core heuristic.

use super::Player;
use crate::{GameRng, SessionError, Terminal};
use std::io::Write;
use tictactoe_core::{Game, Position};
use tracing::{debug, instrument};

/// Computer opponent.
#[derive(Debug, Clone)]
pub struct ComputerPlayer {
    name: String,
    announce: bool,
}

impl ComputerPlayer {
    /// Creates a computer player; `announce` prints each chosen square.
    pub fn new(name: impl Into<String>, announce: bool) -> Self {
        Self {
            name: name.into(),
            announce,
        }
    }
}

impl Player for ComputerPlayer {
    #[instrument(skip_all, fields(player = %self.name, mark = %game.to_move(), seed = rng.seed()))]
    fn take_turn(
        &mut self,
        game: &mut Game,
        terminal: &mut dyn Terminal,
        rng: &mut GameRng,
    ) -> Result<Position, SessionError> {
        let pos = game.play_computer(rng)?;
        debug!(%pos, "Computer chose position");

        if self.announce {
            writeln!(terminal, "{} plays {}", self.name, pos)?;
        }
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
