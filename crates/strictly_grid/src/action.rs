//! Accepted moves as first-class records.

use crate::position::Position;
use crate::types::Player;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
///
/// Boards keep these in order of acceptance, which lets invariant checks
/// rebuild the grid from scratch.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) -> {}", self.player, self.player.mark(), self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    #[test]
    fn test_display() {
        let action = Move::new(Player::new("Ada", Mark::new('X'), 1), Position::new(2, 3));
        assert_eq!(action.to_string(), "Ada (X) -> 2,3");
    }
}
