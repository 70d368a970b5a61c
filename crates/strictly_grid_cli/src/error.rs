//! Errors that end a console session.

use derive_more::{Display, Error};
use strictly_grid::{ConfigError, GameError};

/// Why a session stopped before printing an outcome.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    /// Reading or writing the console failed.
    #[display("Console I/O failed: {_0}")]
    Io(std::io::Error),

    /// Input ended while the game was still being set up.
    #[display("Input closed during setup")]
    InputClosed,

    /// A scripted move could not be read as `row,col`.
    #[display("Cannot read move {input:?}")]
    BadMove {
        /// The move as given.
        input: String,
    },

    /// Scripted moves ran out before the game ended.
    #[display("Game unfinished after {moves} moves")]
    Unfinished {
        /// Moves played.
        moves: usize,
    },

    /// The engine refused or failed.
    #[display("{_0}")]
    Game(GameError),
}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<GameError> for SessionError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<ConfigError> for SessionError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::Game(GameError::from(err))
    }
}
