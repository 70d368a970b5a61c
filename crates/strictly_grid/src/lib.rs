//! Strictly Grid - N×N tic-tac-toe engine
//!
//! Two or more players take turns stamping their mark on a square grid until
//! one of them lines up `win_length` identical marks in a row, column or
//! diagonal, or the grid fills up.
//!
//! # Architecture
//!
//! - **Board**: owns the grid, validates and applies moves, classifies the
//!   grid as live, won or drawn
//! - **Rules**: pure win/draw detection over a grid snapshot, for any board
//!   size and any win length
//! - **Turn controller**: owns the turn queue, drives each move through
//!   evaluation, reports the outcome
//!
//! Console I/O is not part of this crate; input and rendering plug in
//! through [`MoveSource`] and [`BoardObserver`].
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Board, GameConfig, Position, TurnController, TurnQueue};
//!
//! # fn main() -> Result<(), strictly_grid::GameError> {
//! let config = GameConfig::default();
//! let board = Board::new(3, &config)?;
//! let queue = TurnQueue::from_names(["Ada", "Grace"], &config)?;
//!
//! let moves = [(1, 1), (2, 2), (1, 2), (3, 3), (1, 3)].map(|(r, c)| Position::new(r, c));
//! let game = TurnController::replay(board, queue, &moves)?;
//! let winner = game.outcome().and_then(|o| o.winner()).map(|p| p.name());
//! assert_eq!(winner, Some("Ada"));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod controller;
mod error;
mod grid;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod turn_queue;
mod types;

pub use action::Move;
pub use board::Board;
pub use config::{
    ConfigError, DEFAULT_ALLOWED_SIZES, DEFAULT_BLANK, DEFAULT_WIN_LENGTH, GameConfig,
    MAX_BOARD_SIZE, MarkSlot,
};
pub use controller::{BoardObserver, MoveInput, MoveSource, Retry, TurnController};
pub use error::{GameError, GameOver};
pub use grid::Grid;
pub use phases::{Outcome, TurnPhase};
pub use position::{Coord, Position};
pub use rules::{Direction, WinningLine};
pub use turn_queue::TurnQueue;
pub use types::{GameState, Mark, Player, Square};
