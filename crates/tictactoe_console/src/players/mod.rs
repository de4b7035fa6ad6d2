//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use crate::{GameRng, SessionError, Terminal};
use tictactoe_core::{Game, Position};

/// Something that can take a turn in a [`Game`].
pub trait Player {
    /// Plays one move for the side to move and returns where it went.
    ///
    /// On success the move has been applied to `game`.
    fn take_turn(
        &mut self,
        game: &mut Game,
        terminal: &mut dyn Terminal,
        rng: &mut GameRng,
    ) -> Result<Position, SessionError>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
