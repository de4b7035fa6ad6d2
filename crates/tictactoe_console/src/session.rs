//! Game session: mark assignment, the turn loop and the running score.

use super::config::ConsoleConfig;
use super::players::{ComputerPlayer, HumanPlayer, Player};
use super::prompt::prompt_bool;
use super::render::{render_board, render_score};
use super::{GameRng, SessionError, Terminal};
use rand::Rng;
use std::io::Write;
use tictactoe_core::{Game, GameStatus, Mark, Score, Side};
use tracing::{debug, info, instrument};

/// Who player 1 is up against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Player 1 against the computer.
    Solo,
    /// Two humans sharing the terminal.
    Duel,
}

impl From<crate::Command> for Mode {
    fn from(command: crate::Command) -> Self {
        match command {
            crate::Command::Solo => Mode::Solo,
            crate::Command::Duel => Mode::Duel,
        }
    }
}

/// Asks whether to play against the computer.
#[instrument(skip(terminal))]
pub fn choose_mode(terminal: &mut dyn Terminal) -> Result<Mode, SessionError> {
    let solo = prompt_bool(terminal, "Play against the computer?", true)?;
    Ok(if solo { Mode::Solo } else { Mode::Duel })
}

/// A run of games sharing one score.
///
/// The score lives as long as the session, so it carries across games and
/// starts from zero for every new session.
#[derive(Debug, Clone)]
pub struct GameSession {
    mode: Mode,
    score: Score,
    games_played: u64,
    seed: Option<u64>,
    play_again_default: bool,
    announce_computer_moves: bool,
}

impl GameSession {
    /// Creates a session; `seed` overrides the configured base seed.
    pub fn new(mode: Mode, config: &ConsoleConfig, seed: Option<u64>) -> Self {
        Self {
            mode,
            score: Score::new(),
            games_played: 0,
            seed: seed.or(*config.seed()),
            play_again_default: *config.play_again_default(),
            announce_computer_moves: *config.announce_computer_moves(),
        }
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the score so far.
    pub fn score(&self) -> Score {
        self.score
    }

    /// Number of games started in this session.
    pub fn games_played(&self) -> u64 {
        self.games_played
    }

    /// Plays games until the user declines another one or input runs out.
    ///
    /// # Errors
    ///
    /// Returns terminal failures. Running out of input is not an error.
    #[instrument(skip(self, terminal), fields(mode = ?self.mode))]
    pub fn run(&mut self, terminal: &mut dyn Terminal) -> Result<Score, SessionError> {
        loop {
            match self.play_game(terminal) {
                Ok(_) => {}
                Err(e) if e.is_input_closed() => break,
                Err(e) => return Err(e),
            }

            match prompt_bool(terminal, "Play again?", self.play_again_default) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) if e.is_input_closed() => break,
                Err(e) => return Err(e),
            }
        }

        info!(
            player1 = self.score.player1(),
            player2 = self.score.player2(),
            games = self.games_played,
            "Session finished"
        );
        Ok(self.score)
    }

    /// Plays one game to completion and records the result.
    ///
    /// # Errors
    ///
    /// Returns an input-closed error if input runs out mid-game; the score
    /// is left unchanged in that case.
    #[instrument(skip(self, terminal), fields(game = self.games_played))]
    pub fn play_game(&mut self, terminal: &mut dyn Terminal) -> Result<GameStatus, SessionError> {
        let mut rng = GameRng::for_game(self.seed, self.games_played);
        self.games_played += 1;

        let mark1 = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
        let mark2 = mark1.opponent();
        debug!(seed = rng.seed(), %mark1, "Marks assigned");

        let mut player1 = HumanPlayer::new("Player 1");
        let mut player2: Box<dyn Player> = match self.mode {
            Mode::Solo => Box::new(ComputerPlayer::new("Computer", self.announce_computer_moves)),
            Mode::Duel => Box::new(HumanPlayer::new("Player 2")),
        };

        let mut game = Game::new();
        match self.mode {
            Mode::Solo => {
                writeln!(terminal, "You are {}", mark1)?;
                if mark1 == Mark::X {
                    write!(terminal, "{}", render_board(game.board()))?;
                }
            }
            Mode::Duel => {
                writeln!(terminal, "Player 1 is {}. Player 2 is {}", mark1, mark2)?;
                write!(terminal, "{}", render_board(game.board()))?;
            }
        }

        let status = loop {
            let side = if game.to_move() == mark1 {
                Side::Player1
            } else {
                Side::Player2
            };
            let player: &mut dyn Player = match side {
                Side::Player1 => &mut player1,
                Side::Player2 => player2.as_mut(),
            };

            if self.mode == Mode::Duel {
                writeln!(terminal, "{}'s turn", player.name())?;
            }
            player.take_turn(&mut game, terminal, &mut rng)?;

            match game.status() {
                GameStatus::Won(mark) => {
                    writeln!(terminal, "{}", self.win_message(side))?;
                    self.score.record(side);
                    info!(%mark, ?side, "Game won");
                    break GameStatus::Won(mark);
                }
                GameStatus::Tie => {
                    writeln!(terminal, "Tie")?;
                    info!("Game tied");
                    break GameStatus::Tie;
                }
                // The computer answers straight away, so skip the board
                // between player 1's move and its reply.
                GameStatus::InProgress if self.mode == Mode::Solo && side == Side::Player1 => {}
                GameStatus::InProgress => write!(terminal, "{}", render_board(game.board()))?,
            }
        };

        write!(terminal, "{}", render_board(game.board()))?;
        write!(terminal, "{}", render_score(&self.score))?;
        Ok(status)
    }

    fn win_message(&self, side: Side) -> &'static str {
        match (self.mode, side) {
            (Mode::Solo, Side::Player1) => "You won",
            (Mode::Solo, Side::Player2) => "You lost",
            (Mode::Duel, Side::Player1) => "Player 1 won",
            (Mode::Duel, Side::Player2) => "Player 2 won",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Console;

    fn config() -> ConsoleConfig {
        ConsoleConfig::default()
    }

    #[test]
    fn test_seed_argument_overrides_config() {
        let config: ConsoleConfig = toml::from_str("seed = 5").unwrap();
        assert_eq!(GameSession::new(Mode::Duel, &config, Some(9)).seed, Some(9));
        assert_eq!(GameSession::new(Mode::Duel, &config, None).seed, Some(5));
    }

    #[test]
    fn test_win_messages() {
        let solo = GameSession::new(Mode::Solo, &config(), None);
        assert_eq!(solo.win_message(Side::Player1), "You won");
        assert_eq!(solo.win_message(Side::Player2), "You lost");
        let duel = GameSession::new(Mode::Duel, &config(), None);
        assert_eq!(duel.win_message(Side::Player2), "Player 2 won");
    }

    #[test]
    fn test_choose_mode() {
        let mut console = Console::new("n\n".as_bytes(), Vec::new());
        assert_eq!(choose_mode(&mut console).unwrap(), Mode::Duel);
        let mut console = Console::new("\n".as_bytes(), Vec::new());
        assert_eq!(choose_mode(&mut console).unwrap(), Mode::Solo);
    }

    #[test]
    fn test_input_closed_mid_game_leaves_score() {
        let mut session = GameSession::new(Mode::Duel, &config(), Some(0));
        let mut console = Console::new("b2\n".as_bytes(), Vec::new());
        let err = session.play_game(&mut console).unwrap_err();
        assert!(err.is_input_closed());
        assert_eq!(session.score(), Score::new());
        assert_eq!(session.games_played(), 1);
    }
}
