//! History completeness: one history entry per occupied square.

use super::Invariant;
use crate::board::Board;
use tracing::warn;

/// Invariant: History length matches filled squares.
pub struct HistoryCompleteInvariant;

impl Invariant<Board> for HistoryCompleteInvariant {
    fn holds(board: &Board) -> bool {
        let grid = board.grid();
        let filled = grid.squares().len() - grid.empty_count();
        let history_len = board.history().len();

        let valid = filled == history_len;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }

    fn description() -> &'static str {
        "History length matches filled squares"
    }
}
