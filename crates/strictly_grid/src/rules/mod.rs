//! Game rules for the grid game.
//!
//! Pure functions for evaluating a grid snapshot. Rules are separated from
//! board storage so the board, invariant checks and tests can share them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{
    Direction, Line, WinningLine, backward_diagonals, columns, find_winning_line,
    forward_diagonals, has_consecutive_run, has_winner, rows,
};
