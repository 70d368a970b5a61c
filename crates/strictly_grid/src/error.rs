//! Failure kinds and the game-over signal.

use crate::config::ConfigError;
use crate::phases::Outcome;
use crate::position::Position;
use crate::types::{GameState, Mark, Player};
use derive_more::{Display, Error};
use std::collections::BTreeSet;
use tracing::instrument;

/// Everything the engine can refuse or fail at.
///
/// Only the kinds listed by [`GameError::is_recoverable`] leave the game
/// untouched and let the same player try again.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum GameError {
    /// Board construction with a size outside the allowed set.
    #[display("Board size invalid! {size} is not one of {allowed:?}")]
    InvalidSize {
        /// Requested side length.
        size: usize,
        /// Sizes the configuration accepts.
        allowed: BTreeSet<usize>,
    },

    /// Coordinate outside `[1, size]` on either axis.
    #[display("{player}, the coordinate {position} cannot be identified")]
    PositionOutOfRange {
        /// Rejected coordinate.
        position: Position,
        /// Player who tried it.
        player: Player,
    },

    /// Target square already holds a mark.
    #[display("{player}, {position} is already taken by {occupant}")]
    PositionOccupied {
        /// Rejected coordinate.
        position: Position,
        /// Player who tried it.
        player: Player,
        /// Mark found on the square.
        occupant: Mark,
    },

    /// The input collaborator could not read a coordinate pair.
    #[display("{player}, {input:?} is not a coordinate")]
    MalformedInput {
        /// Raw text as received.
        input: String,
        /// Player who typed it.
        player: Player,
    },

    /// A move or evaluation was requested after the game ended.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// The input collaborator failed for good (closed stream, I/O error).
    #[display("Input failed for {player}: {reason}")]
    InputFailed {
        /// Player whose move was being read.
        player: Player,
        /// What went wrong.
        reason: String,
    },

    /// The board observer could not show the grid.
    #[display("Output failed: {reason}")]
    OutputFailed {
        /// What went wrong.
        reason: String,
    },

    /// Configuration or setup rejected.
    #[display("{_0}")]
    Config(ConfigError),
}

impl GameError {
    /// True for rejections that should re-prompt the same player.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::PositionOutOfRange { .. }
                | GameError::PositionOccupied { .. }
                | GameError::MalformedInput { .. }
        )
    }
}

impl From<ConfigError> for GameError {
    #[track_caller]
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Signal raised by [`Board::evaluate`](crate::Board::evaluate) once the
/// board reaches `Win` or `Draw`.
///
/// Not a failure: the state transition is already committed when this is
/// observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOver {
    state: GameState,
    winner: Option<Player>,
}

impl GameOver {
    /// Win for `player`.
    #[instrument]
    pub fn win(player: Player) -> Self {
        Self {
            state: GameState::Win,
            winner: Some(player),
        }
    }

    /// Draw, nobody wins.
    #[instrument]
    pub fn draw() -> Self {
        Self {
            state: GameState::Draw,
            winner: None,
        }
    }

    /// Terminal state reached.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Winning player, `None` on a draw.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.as_ref()
    }

    /// The same result as an [`Outcome`].
    pub fn outcome(&self) -> Outcome {
        match &self.winner {
            Some(player) => Outcome::Winner(player.clone()),
            None => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for GameOver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.winner {
            Some(player) => write!(f, "Game over: {} wins", player),
            None => write!(f, "Game over: draw"),
        }
    }
}

impl std::error::Error for GameOver {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Player {
        Player::new("Ada", Mark::new('X'), 1)
    }

    #[test]
    fn test_recoverable_kinds() {
        let out = GameError::PositionOutOfRange {
            position: Position::new(4, 4),
            player: ada(),
        };
        let malformed = GameError::MalformedInput {
            input: "1,v".to_string(),
            player: ada(),
        };
        assert!(out.is_recoverable());
        assert!(malformed.is_recoverable());
        assert!(!GameError::GameAlreadyOver.is_recoverable());
        assert!(
            !GameError::InvalidSize {
                size: 1,
                allowed: BTreeSet::from([3])
            }
            .is_recoverable()
        );
    }

    #[test]
    fn test_occupied_names_occupant() {
        let occupied = GameError::PositionOccupied {
            position: Position::new(1, 1),
            player: ada(),
            occupant: Mark::new('O'),
        };
        assert!(occupied.to_string().contains("already taken by O"));
    }

    #[test]
    fn test_game_over_outcome() {
        let over = GameOver::win(ada());
        assert_eq!(over.state(), GameState::Win);
        assert_eq!(over.outcome(), Outcome::Winner(ada()));
        assert_eq!(GameOver::draw().outcome(), Outcome::Draw);
        assert_eq!(GameOver::draw().to_string(), "Game over: draw");
    }
}
