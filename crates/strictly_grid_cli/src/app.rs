//! The two ways to run a game: interactive play and scripted replay.

use crate::console::Console;
use crate::error::SessionError;
use crate::messages;
use crate::parse::parse_coordinates;
use crate::setup::{announce_board, prompt_board, prompt_players};
use std::io::{self, BufRead, Write};
use strictly_grid::{Board, GameConfig, MoveInput, Outcome, TurnController, TurnQueue};
use tracing::{info, instrument};

/// Board size used by [`replay`] when none is given.
pub const DEFAULT_REPLAY_SIZE: usize = 3;

/// Plays one interactive game on `console`.
///
/// With `size` set the size prompt is skipped, but the size is still
/// checked against the configuration.
///
/// # Errors
///
/// Fails if setup is refused, input ends, or the console breaks.
#[instrument(skip(console, config))]
pub fn play<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
    size: Option<usize>,
) -> Result<Outcome, SessionError> {
    let board = match size {
        Some(size) => {
            let board = Board::new(size, config)?;
            announce_board(console, &board)?;
            board
        }
        None => prompt_board(console, config)?,
    };
    let queue = prompt_players(console, config)?;

    let mut game = TurnController::new(board, queue)?;
    let outcome = game.run(console)?;

    info!(%outcome, moves = game.board().history().len(), "Game complete");
    console.say(messages::end_of_game(&outcome))?;
    Ok(outcome)
}

/// Plays `moves` in order without prompting and prints the final grid.
///
/// Players are named `Player 1`, `Player 2`, … after their slots.
///
/// # Errors
///
/// Fails on an unreadable or rejected move, on moves left over after the
/// game ends, and when the moves run out before it ends.
#[instrument(skip(output, config, moves), fields(moves = moves.len()))]
pub fn replay<W: Write, S: AsRef<str>>(
    output: W,
    config: &GameConfig,
    size: usize,
    moves: &[S],
) -> Result<Outcome, SessionError> {
    let positions = moves
        .iter()
        .map(|text| match parse_coordinates(text.as_ref()) {
            MoveInput::Coordinates(position) => Ok(position),
            MoveInput::Malformed(input) => Err(SessionError::BadMove { input }),
        })
        .collect::<Result<Vec<_>, _>>()?;

    let board = Board::new(size, config)?;
    let names = config
        .marks()
        .iter()
        .map(|slot| format!("Player {}", slot.index));
    let queue = TurnQueue::from_names(names, config)?;

    let game = TurnController::replay(board, queue, &positions)?;

    let mut console = Console::new(io::empty(), output, *config.blank());
    console.render(game.board().grid())?;
    let outcome = game
        .outcome()
        .cloned()
        .ok_or(SessionError::Unfinished {
            moves: positions.len(),
        })?;
    console.say(messages::end_of_game(&outcome))?;
    Ok(outcome)
}
