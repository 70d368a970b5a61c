//! Console front end for the strictly_grid engine.
//!
//! Reads the board size, player names and moves from a line-oriented
//! input, and prints the grid after every accepted move. Everything is
//! generic over [`BufRead`](std::io::BufRead) and [`Write`](std::io::Write)
//! so whole sessions can be scripted in tests.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
mod console;
mod error;
pub mod messages;
mod parse;
mod setup;

pub use console::Console;
pub use error::SessionError;
pub use parse::{DELIMITER, parse_board_size, parse_coordinates};
pub use setup::{announce_board, prompt_board, prompt_players};
