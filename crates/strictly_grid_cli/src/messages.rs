//! Everything the console prints, in one place.

use strictly_grid::{GameError, Outcome, Player, Retry};

/// Asks for the side length.
pub const SIZE_PROMPT: &str = "Enter the board size: ";

/// Printed when the side length is unreadable or not allowed.
pub const INVALID_SIZE: &str = "Board size invalid!";

/// Stands in for the winner's name in a draw.
pub const NO_WINNER: &str = "No one";

/// Printed once the board is built.
pub fn prepare_board(size: usize) -> String {
    format!("Prepare a {size}x{size} board …")
}

/// English ordinal for small slot numbers.
pub fn ordinal(index: usize) -> Option<&'static str> {
    const ORDINALS: [&str; 10] = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth",
    ];
    index.checked_sub(1).and_then(|i| ORDINALS.get(i)).copied()
}

/// Asks for the name of the player in slot `index`.
pub fn name_prompt(index: usize) -> String {
    match ordinal(index) {
        Some(word) => format!("Enter the {word} player name: "),
        None => format!("Enter the name of player {index}: "),
    }
}

/// Confirms a player's slot. Ends with a newline so a blank line follows.
pub fn player_announcement(player: &Player) -> String {
    format!("Player {} is {} !!!\n", player.index(), player.name())
}

/// Asks the current player for a move.
pub fn move_prompt(player: &Player) -> String {
    format!(
        "{}, enter a coordinate as row,col for {}: ",
        player.name(),
        player.mark()
    )
}

/// Asks the same player again after a rejection.
pub fn retry_prompt(current: &Player, retry: &Retry) -> String {
    match &retry.error {
        GameError::PositionOccupied { occupant, .. } => format!(
            "{}, {} has already put {} in this position, please enter a new coordinate: ",
            current.name(),
            retry.previous.name(),
            occupant
        ),
        GameError::PositionOutOfRange { .. } | GameError::MalformedInput { .. } => format!(
            "{}, the coordinate cannot be identified, please enter a new coordinate: ",
            current.name()
        ),
        other => format!("{other}, please enter a new coordinate: "),
    }
}

/// Final line of a game.
pub fn end_of_game(outcome: &Outcome) -> String {
    let winner = outcome.winner().map_or(NO_WINNER, Player::name);
    format!("{winner} wins the game !!!!")
}
