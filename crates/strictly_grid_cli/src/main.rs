//! Strictly Grid - console tic-tac-toe
//!
//! Interactive play on stdin/stdout, or a scripted replay. Logs go to
//! stderr so they never mix with the board.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use strictly_grid_cli::Console;
use strictly_grid_cli::app::{self, DEFAULT_REPLAY_SIZE};
use strictly_grid_cli::cli::{Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.game_config().context("Invalid game configuration")?;
    info!(win_length = *config.win_length(), "Starting strictly_grid");

    let stdout = io::stdout();
    match cli.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), stdout.lock(), *config.blank());
            app::play(&mut console, &config, cli.size).context("Game aborted")?;
        }
        Command::Replay { moves } => {
            let size = cli.size.unwrap_or(DEFAULT_REPLAY_SIZE);
            app::replay(stdout.lock(), &config, size, &moves).context("Replay failed")?;
        }
    }
    Ok(())
}

/// Logs to stderr, filtered by `RUST_LOG` or the verbosity flag.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}
