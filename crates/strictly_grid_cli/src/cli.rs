//! Command-line interface for strictly_grid.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_grid::{ConfigError, GameConfig};
use tracing::instrument;

/// Strictly Grid - N×N tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_grid")]
#[command(about = "Tic-tac-toe on any board size", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Game configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board size; skips the size prompt
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Marks in a row needed to win (overrides the config file)
    #[arg(short, long)]
    pub win_length: Option<usize>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to run (defaults to play)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game
    Play,

    /// Play a fixed list of moves and print the result
    Replay {
        /// Moves as row,col, first player first
        #[arg(required = true)]
        moves: Vec<String>,
    },
}

impl Cli {
    /// Builds the game configuration from the file and flag overrides.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be loaded or the result is invalid.
    #[instrument(skip(self))]
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        let config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        match self.win_length {
            Some(win_length) => config.with_win_length(win_length),
            None => Ok(config),
        }
    }
}
