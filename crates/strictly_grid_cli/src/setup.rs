//! Board and player setup before the first move.

use crate::console::Console;
use crate::error::SessionError;
use crate::messages;
use crate::parse::parse_board_size;
use std::io::{BufRead, Write};
use strictly_grid::{Board, GameConfig, Player, TurnQueue};
use tracing::{debug, info, instrument};

/// Asks for a side length until the configuration accepts one.
///
/// Unreadable and disallowed sizes both print the same complaint and ask
/// again.
///
/// # Errors
///
/// Fails if input ends or the console cannot be written.
#[instrument(skip_all)]
pub fn prompt_board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<Board, SessionError> {
    loop {
        let answer = console
            .prompt(messages::SIZE_PROMPT)?
            .ok_or(SessionError::InputClosed)?;

        match parse_board_size(&answer).map(|size| Board::new(size, config)) {
            Some(Ok(board)) => {
                announce_board(console, &board)?;
                return Ok(board);
            }
            Some(Err(error)) => debug!(%error, "Board refused"),
            None => debug!(%answer, "Board size unreadable"),
        }
        console.say(messages::INVALID_SIZE)?;
    }
}

/// Prints the preparation line and the empty grid.
pub fn announce_board<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &Board,
) -> Result<(), SessionError> {
    console.say(messages::prepare_board(board.size()))?;
    console.render(board.grid())?;
    Ok(())
}

/// Asks one name per configured mark slot, in slot order.
///
/// # Errors
///
/// Fails if input ends, or if the slots cannot form a turn queue.
#[instrument(skip_all, fields(slots = config.marks().len()))]
pub fn prompt_players<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &GameConfig,
) -> Result<TurnQueue, SessionError> {
    let mut players = Vec::with_capacity(config.marks().len());
    for slot in config.marks() {
        let name = console
            .prompt(&messages::name_prompt(slot.index))?
            .ok_or(SessionError::InputClosed)?;
        let player = Player::new(name, slot.mark, slot.index);
        console.say(messages::player_announcement(&player))?;
        info!(%player, mark = %player.mark(), "Player joined");
        players.push(player);
    }
    Ok(TurnQueue::new(players)?)
}
