//! State consistency: the stored state agrees with the grid.

use super::Invariant;
use crate::board::Board;
use crate::rules;
use crate::types::GameState;

/// Invariant: `Live` boards have no run and an open square, `Win` boards
/// have a run, `Draw` boards are full without a run.
pub struct StateConsistentInvariant;

impl Invariant<Board> for StateConsistentInvariant {
    fn holds(board: &Board) -> bool {
        let won = rules::has_winner(board.grid(), board.marks(), board.win_length());
        let full = rules::is_full(board.grid());
        match board.state() {
            GameState::Live => !won && !full,
            GameState::Win => won,
            GameState::Draw => full && !won,
        }
    }

    fn description() -> &'static str {
        "Game state agrees with the grid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Mark, Player, Position};

    #[test]
    fn test_unevaluated_win_violates() {
        let mut board = Board::new(3, &GameConfig::default()).expect("allowed size");
        let player = Player::new("A", Mark::new('X'), 1);
        for col in 1..=3 {
            board.apply_move(Position::new(1, col), &player).expect("legal");
        }
        assert!(!StateConsistentInvariant::holds(&board));

        let _ = board.evaluate(&player);
        assert!(StateConsistentInvariant::holds(&board));
    }
}
