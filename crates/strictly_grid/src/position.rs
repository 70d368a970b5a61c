//! Player-facing board coordinates.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Zero-based `(row, col)` index into a grid.
pub type Coord = (usize, usize);

/// A 1-based `(row, col)` coordinate as players type it.
///
/// Any pair of integers is representable; whether it lands on the board is
/// decided by [`Position::to_coord`] against a concrete board size.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
    derive_more::Display,
)]
#[display("{row},{col}")]
pub struct Position {
    /// 1-based row, counted from the top.
    pub row: u32,
    /// 1-based column, counted from the left.
    pub col: u32,
}

impl Position {
    /// Converts to a zero-based index, or `None` if off a `size`×`size` board.
    #[instrument]
    pub fn to_coord(self, size: usize) -> Option<Coord> {
        let i = (self.row as usize).checked_sub(1)?;
        let j = (self.col as usize).checked_sub(1)?;
        if i >= size || j >= size {
            return None;
        }
        Some((i, j))
    }
}
