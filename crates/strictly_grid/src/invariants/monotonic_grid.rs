//! Monotonic grid invariant: squares never change once set.

use super::Invariant;
use crate::board::Board;
use crate::grid::Grid;
use crate::types::Square;

/// Invariant: Grid squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes.
/// This is verified by replaying the move history and comparing.
pub struct MonotonicGridInvariant;

impl Invariant<Board> for MonotonicGridInvariant {
    fn holds(board: &Board) -> bool {
        let Some(mut rebuilt) = Grid::new(board.size()) else {
            return false;
        };

        for action in board.history() {
            let Some(coord) = action.position.to_coord(board.size()) else {
                return false;
            };
            if !rebuilt.square(coord).is_empty() {
                return false;
            }
            rebuilt.set(coord, Square::Occupied(action.player.mark()));
        }

        rebuilt == *board.grid()
    }

    fn description() -> &'static str {
        "Grid squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameConfig, Mark, Player, Position};

    #[test]
    fn test_empty_board_holds() {
        let board = Board::new(4, &GameConfig::default()).expect("allowed size");
        assert!(MonotonicGridInvariant::holds(&board));
    }

    #[test]
    fn test_overwritten_square_violates() {
        let mut board = Board::new(3, &GameConfig::default()).expect("allowed size");
        let player = Player::new("A", Mark::new('X'), 1);
        board.apply_move(Position::new(2, 2), &player).expect("legal");
        assert!(MonotonicGridInvariant::holds(&board));

        board.grid_mut().set((1, 1), Square::Occupied(Mark::new('O')));
        assert!(!MonotonicGridInvariant::holds(&board));
    }
}
