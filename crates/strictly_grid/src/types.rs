//! Core domain types for the grid game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A player's stamp on a square.
///
/// Marks are configured per player slot at setup time and are pairwise
/// distinct; none of them equals the blank symbol used to draw empty squares.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(transparent)]
#[display("{_0}")]
pub struct Mark(char);

impl Mark {
    /// Creates a mark from its display symbol.
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the display symbol.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Mark {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square stamped with a mark. Never reverts to empty.
    Occupied(Mark),
}

impl Square {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Square::Empty)
    }

    /// Returns the mark on this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }

    /// Symbol used to draw this square, `blank` for empty squares.
    pub fn symbol(self, blank: char) -> char {
        self.mark().map_or(blank, Mark::symbol)
    }
}

/// A named participant bound to one mark for the whole game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{name}")]
pub struct Player {
    name: String,
    mark: Mark,
    index: usize,
}

impl Player {
    /// Creates a player for the given slot.
    ///
    /// `index` is the 1-based slot number from the mark assignment.
    #[instrument(skip(name), fields(name = %name.as_ref()))]
    pub fn new(name: impl AsRef<str>, mark: Mark, index: usize) -> Self {
        Self {
            name: name.as_ref().to_string(),
            mark,
            index,
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the mark this player stamps.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the 1-based slot index.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Lifecycle of a board. Only moves forward: `Live` to `Win` or `Draw`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GameState {
    /// Moves are still accepted.
    #[default]
    Live,
    /// Someone completed a run.
    Win,
    /// The grid filled without a run.
    Draw,
}

impl GameState {
    /// Returns true for `Win` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameState::Live)
    }
}
