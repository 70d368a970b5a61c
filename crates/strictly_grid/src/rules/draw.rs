//! Draw detection.

use crate::grid::Grid;
use tracing::instrument;

/// Checks if the grid is full (all squares occupied).
///
/// A full grid with no winner indicates a draw.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::has_winner;
    use super::*;
    use crate::types::{Mark, Square};

    const MARKS: [Mark; 2] = [Mark::new('X'), Mark::new('O')];

    fn is_draw(grid: &Grid) -> bool {
        is_full(grid) && !has_winner(grid, &MARKS, 3)
    }

    fn fill(grid: &mut Grid, rows: [&str; 3]) {
        for (r, row) in rows.iter().enumerate() {
            for (c, symbol) in row.chars().enumerate() {
                grid.set((r, c), Square::Occupied(Mark::new(symbol)));
            }
        }
    }

    #[test]
    fn test_empty_grid_not_full() {
        let grid = Grid::new(3).expect("small grid");
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_partial_grid_not_full() {
        let mut grid = Grid::new(3).expect("small grid");
        grid.set((1, 1), Square::Occupied(Mark::new('X')));
        assert!(!is_full(&grid));
    }

    #[test]
    fn test_draw_detection() {
        let mut grid = Grid::new(3).expect("small grid");
        // X O X / O X X / O X O
        fill(&mut grid, ["XOX", "OXX", "OXO"]);
        assert!(is_full(&grid));
        assert!(is_draw(&grid));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut grid = Grid::new(3).expect("small grid");
        fill(&mut grid, ["XXX", "OOX", "XOO"]);
        assert!(is_full(&grid));
        assert!(!is_draw(&grid));
    }
}
