//! Command-line interface for the tic-tac-toe console.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Console tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Console tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it doesn't exist)
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: PathBuf,

    /// Base seed for reproducible games (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Game mode; asks interactively when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play against the computer
    Solo,

    /// Two players sharing the keyboard
    Duel,
}
