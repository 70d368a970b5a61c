//! Square matrix of cells, stored row-major.

use crate::position::Coord;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Snapshot of the cell matrix.
///
/// The owning [`Board`](crate::Board) is the only writer; everyone else sees
/// a `&Grid`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    squares: Vec<Square>,
}

impl Grid {
    /// Creates an all-empty `size`×`size` grid, `None` if the square count
    /// does not fit in a `usize`.
    #[instrument]
    pub(crate) fn new(size: usize) -> Option<Self> {
        let cells = size.checked_mul(size)?;
        Some(Self {
            size,
            squares: vec![Square::Empty; cells],
        })
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Square at a zero-based index, `None` when off the grid.
    pub fn get(&self, (row, col): Coord) -> Option<Square> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.squares.get(row * self.size + col).copied()
    }

    /// Square at a zero-based index; off-grid reads as empty.
    pub fn square(&self, coord: Coord) -> Square {
        self.get(coord).unwrap_or_default()
    }

    /// Writes a square. Off-grid writes are ignored.
    pub(crate) fn set(&mut self, (row, col): Coord, square: Square) {
        if row < self.size && col < self.size {
            self.squares[row * self.size + col] = square;
        }
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.max(1))
    }

    /// Squares along a line of coordinates, in line order.
    pub fn line(&self, coords: &[Coord]) -> Vec<Square> {
        coords.iter().map(|&coord| self.square(coord)).collect()
    }

    /// Number of squares still empty.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| s.is_empty()).count()
    }

    /// Number of squares stamped with `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| s.mark() == Some(mark))
            .count()
    }

    /// True once no empty square remains.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Text rendering: one line per row, squares separated by single spaces.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn render(&self, blank: char) -> String {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|square| square.symbol(blank).to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
