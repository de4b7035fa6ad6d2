//! Wins tally kept across games.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which seat won a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Side {
    /// Player 1 (always human).
    Player1,
    /// Player 2 or the computer.
    Player2,
}

/// Wins for player 1 and player 2.
///
/// Only decisive games are recorded; ties leave the tally unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    player1: u32,
    player2: u32,
}

impl Score {
    /// Creates an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one win for `side`.
    #[instrument(skip(self))]
    pub fn record(&mut self, side: Side) {
        match side {
            Side::Player1 => self.player1 += 1,
            Side::Player2 => self.player2 += 1,
        }
    }

    /// Wins for player 1.
    pub fn player1(&self) -> u32 {
        self.player1
    }

    /// Wins for player 2.
    pub fn player2(&self) -> u32 {
        self.player2
    }
}
