//! Win detection over arbitrary board sizes.
//!
//! A grid is cut into lines (rows, columns and both diagonal families) and
//! each line is scanned for `win_length` consecutive identical marks.

use crate::grid::Grid;
use crate::position::Coord;
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Ordered coordinates of one scan line.
pub type Line = Vec<Coord>;

/// Family of lines a run can lie on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Constant `row + col`, bottom-left to top-right.
    ForwardDiagonal,
    /// Constant `row - col`, top-left to bottom-right.
    BackwardDiagonal,
}

impl Direction {
    /// All lines of this family on a `size`×`size` grid.
    pub fn lines(self, size: usize) -> Vec<Line> {
        match self {
            Direction::Horizontal => rows(size),
            Direction::Vertical => columns(size),
            Direction::ForwardDiagonal => forward_diagonals(size),
            Direction::BackwardDiagonal => backward_diagonals(size),
        }
    }
}

/// A qualifying run found on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinningLine {
    /// Mark that completed the run.
    pub mark: Mark,
    /// Family of the line holding the run.
    pub direction: Direction,
    /// The whole line the run lies on.
    pub line: Line,
}

/// Rows, top to bottom, each left to right.
pub fn rows(size: usize) -> Vec<Line> {
    (0..size)
        .map(|row| (0..size).map(|col| (row, col)).collect())
        .collect()
}

/// Columns, left to right, each top to bottom.
pub fn columns(size: usize) -> Vec<Line> {
    (0..size)
        .map(|col| (0..size).map(|row| (row, col)).collect())
        .collect()
}

/// Number of diagonals in one family.
fn diagonal_count(size: usize) -> usize {
    (2 * size).saturating_sub(1)
}

/// Columns crossed by diagonal `p` of either family.
fn diagonal_span(size: usize, p: usize) -> Range<usize> {
    (p + 1).saturating_sub(size)..(p + 1).min(size)
}

/// Diagonals of constant `row + col`, by ascending sum.
///
/// On a 3×3 grid numbered row-major `0..9` this yields
/// `[[0], [3, 1], [6, 4, 2], [7, 5], [8]]`.
pub fn forward_diagonals(size: usize) -> Vec<Line> {
    (0..diagonal_count(size))
        .map(|p| diagonal_span(size, p).map(|q| (p - q, q)).collect())
        .collect()
}

/// Diagonals of constant `row - col`, from the bottom-left corner to the
/// top-right corner.
///
/// On a 3×3 grid numbered row-major `0..9` this yields
/// `[[6], [3, 7], [0, 4, 8], [1, 5], [2]]`.
pub fn backward_diagonals(size: usize) -> Vec<Line> {
    (0..diagonal_count(size))
        .map(|p| diagonal_span(size, p).map(|q| (size + q - 1 - p, q)).collect())
        .collect()
}

/// Scans one line for `win_length` consecutive identical marks.
///
/// Keeps one running count per known mark. An empty square resets every
/// count; a marked square resets every count but its own, which grows by
/// one. Marks outside `marks` are passed over and leave every count as it
/// was. Returns the mark whose count first reaches `win_length`.
pub fn has_consecutive_run<I>(squares: I, marks: &[Mark], win_length: usize) -> Option<Mark>
where
    I: IntoIterator<Item = Square>,
{
    let mut counts = vec![0usize; marks.len()];
    for square in squares {
        let Square::Occupied(mark) = square else {
            counts.fill(0);
            continue;
        };
        let Some(slot) = marks.iter().position(|known| *known == mark) else {
            continue;
        };
        let run = counts[slot] + 1;
        counts.fill(0);
        counts[slot] = run;
        if run >= win_length {
            return Some(mark);
        }
    }
    None
}

/// Finds the first qualifying run, checking rows, then columns, then both
/// diagonal families.
///
/// Diagonals shorter than `win_length` are skipped. When `win_length`
/// exceeds the board size no line qualifies and the result is `None`.
#[instrument(skip(grid, marks), fields(size = grid.size()))]
pub fn find_winning_line(grid: &Grid, marks: &[Mark], win_length: usize) -> Option<WinningLine> {
    for direction in Direction::iter() {
        for line in direction.lines(grid.size()) {
            if line.len() < win_length {
                continue;
            }
            if let Some(mark) = has_consecutive_run(grid.line(&line), marks, win_length) {
                debug!(%mark, %direction, "Found winning run");
                return Some(WinningLine {
                    mark,
                    direction,
                    line,
                });
            }
        }
    }
    None
}

/// True if any line holds a qualifying run.
#[instrument(skip(grid, marks), fields(size = grid.size()))]
pub fn has_winner(grid: &Grid, marks: &[Mark], win_length: usize) -> bool {
    find_winning_line(grid, marks, win_length).is_some()
}
