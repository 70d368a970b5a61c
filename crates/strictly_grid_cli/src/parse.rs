//! Turns raw input lines into sizes and coordinates.

use strictly_grid::{MoveInput, Position};
use tracing::{instrument, trace};

/// Separator between row and column.
pub const DELIMITER: char = ',';

/// Reads `row,col` as a 1-based position.
///
/// Both parts must be plain positive integers; anything else comes back as
/// [`MoveInput::Malformed`] with the trimmed text. Whether the position is
/// on the board is for the board to decide.
#[instrument]
pub fn parse_coordinates(input: &str) -> MoveInput {
    let input = input.trim();
    match parse_pair(input) {
        Some(position) => MoveInput::Coordinates(position),
        None => {
            trace!("Not a coordinate pair");
            MoveInput::Malformed(input.to_string())
        }
    }
}

fn parse_pair(input: &str) -> Option<Position> {
    let (row, col) = input.split_once(DELIMITER)?;
    if col.contains(DELIMITER) {
        return None;
    }
    Some(Position::new(parse_positive(row)?, parse_positive(col)?))
}

fn parse_positive(part: &str) -> Option<u32> {
    let part = part.trim();
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok().filter(|value| *value > 0)
}

/// Reads a board side length. Range checking is left to the board.
pub fn parse_board_size(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}
