//! Turn-controller phases and the final outcome.

use crate::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Winner(player) => Some(player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Where the turn controller stands.
///
/// `AwaitingMove` is left only by an accepted move; `Evaluating` is passed
/// through while the board classifies the new grid; `Terminal` is final.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for this player's move.
    AwaitingMove(Player),
    /// Classifying the grid after an accepted move.
    Evaluating,
    /// Game over.
    Terminal(Outcome),
}

impl TurnPhase {
    /// Returns true once the game is over.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnPhase::Terminal(_))
    }

    /// The outcome, once terminal.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            TurnPhase::Terminal(outcome) => Some(outcome),
            _ => None,
        }
    }
}

impl std::fmt::Display for TurnPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TurnPhase::AwaitingMove(player) => write!(f, "awaiting move from {}", player),
            TurnPhase::Evaluating => write!(f, "evaluating"),
            TurnPhase::Terminal(outcome) => write!(f, "terminal ({})", outcome),
        }
    }
}
