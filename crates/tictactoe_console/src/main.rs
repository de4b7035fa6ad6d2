//! Console tic-tac-toe
//!
//! Two players on one keyboard, or one player against the computer.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictactoe_console::{Cli, Console, ConsoleConfig, GameSession, choose_mode};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = ConsoleConfig::load_or_default(&cli.config)?;
    initialize_tracing(config.log_filter());

    let mut console = Console::stdio();
    let mode = match cli.command {
        Some(command) => command.into(),
        None => match choose_mode(&mut console) {
            Ok(mode) => mode,
            Err(e) if e.is_input_closed() => return Ok(()),
            Err(e) => return Err(e.into()),
        },
    };

    info!(?mode, seed = ?cli.seed, "Starting session");
    let mut session = GameSession::new(mode, &config, cli.seed);
    session.run(&mut console)?;

    Ok(())
}

/// Logs go to stderr so they never interleave with the board on stdout.
#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
