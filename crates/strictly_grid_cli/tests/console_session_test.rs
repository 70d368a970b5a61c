//! Whole console sessions driven by scripted input.

use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

use clap::Parser;
use strictly_grid::{GameConfig, GameError, Outcome, Player};
use strictly_grid_cli::app::{play, replay};
use strictly_grid_cli::cli::Cli;
use strictly_grid_cli::{Console, SessionError};

/// Runs an interactive session and returns its result and everything printed.
fn session(
    config: &GameConfig,
    size: Option<usize>,
    script: &str,
) -> (Result<Outcome, SessionError>, String) {
    let mut output = Vec::new();
    let result = {
        let mut console = Console::new(Cursor::new(script), &mut output, *config.blank());
        play(&mut console, config, size)
    };
    (result, String::from_utf8(output).expect("utf8 output"))
}

fn winner(result: &Result<Outcome, SessionError>) -> Option<&str> {
    match result {
        Ok(outcome) => outcome.winner().map(Player::name),
        Err(error) => panic!("session failed: {error}"),
    }
}

#[test]
fn test_first_player_wins() {
    let config = GameConfig::default();
    let (result, output) = session(&config, None, "3\nAda\nGrace\n1,1\n2,2\n1,2\n3,3\n1,3\n");

    assert_eq!(winner(&result), Some("Ada"));

    let opening = concat!(
        "Enter the board size: ",
        "Prepare a 3x3 board …\n",
        "_ _ _\n_ _ _\n_ _ _\n\n",
        "Enter the first player name: ",
        "Player 1 is Ada !!!\n\n",
        "Enter the second player name: ",
        "Player 2 is Grace !!!\n\n",
        "Ada, enter a coordinate as row,col for X: ",
        "X _ _\n_ _ _\n_ _ _\n\n",
        "Grace, enter a coordinate as row,col for O: ",
        "X _ _\n_ O _\n_ _ _\n\n",
    );
    assert!(output.starts_with(opening), "{output}");
    assert!(output.ends_with("X X X\n_ O _\n_ _ O\n\nAda wins the game !!!!\n"));
}

#[test]
fn test_second_player_wins_on_larger_board() {
    let config = GameConfig::default();
    let script = "5\nP\nQ\n3,3\n5,2\n2,4\n5,3\n1,1\n5,4\n";
    let (result, output) = session(&config, None, script);

    assert_eq!(winner(&result), Some("Q"));
    assert!(output.contains("Prepare a 5x5 board …"));
    assert!(output.ends_with("Q wins the game !!!!\n"));
}

#[test]
fn test_draw() {
    let config = GameConfig::default();
    let script = "3\nA\nB\n1,1\n2,2\n1,2\n1,3\n3,1\n2,1\n2,3\n3,2\n3,3\n";
    let (result, output) = session(&config, None, script);

    assert_eq!(result.ok(), Some(Outcome::Draw));
    assert!(output.ends_with("X X O\nO O X\nX O X\n\nNo one wins the game !!!!\n"));
}

#[test]
fn test_invalid_sizes_are_asked_again() {
    let config = GameConfig::default();
    let script = "7\nabc\n\n1\n2\nA\nB\n1,1\n1,2\n2,1\n2,2\n";
    let (result, output) = session(&config, None, script);

    assert_eq!(output.matches("Board size invalid!").count(), 4);
    assert_eq!(output.matches("Enter the board size: ").count(), 5);
    assert!(output.contains("Prepare a 2x2 board …"));
    // A 2×2 board cannot hold three in a row.
    assert_eq!(result.ok(), Some(Outcome::Draw));
}

#[test]
fn test_invalid_coordinates_are_asked_again() {
    let config = GameConfig::default();
    let script = "3\nA\nB\n1,1\n1,1\n0,1\n1\nx,y\n2,2\n1,2\n3,3\n1,3\n";
    let (result, output) = session(&config, None, script);

    assert_eq!(winner(&result), Some("A"));
    assert_eq!(
        output
            .matches("B, A has already put X in this position, please enter a new coordinate: ")
            .count(),
        1
    );
    assert_eq!(
        output
            .matches("B, the coordinate cannot be identified, please enter a new coordinate: ")
            .count(),
        3
    );
    // Rejections never redraw the board: five accepted moves, one empty grid.
    assert_eq!(output.matches("\n\n").count(), 6 + 2);
}

#[test]
fn test_closed_input_mid_game() {
    let config = GameConfig::default();
    let (result, output) = session(&config, None, "3\nA\nB\n1,1\n");

    match result {
        Err(SessionError::Game(GameError::InputFailed { player, .. })) => {
            assert_eq!(player.name(), "B");
        }
        other => panic!("expected input failure, got {other:?}"),
    }
    assert!(!output.contains("wins the game"));
}

#[test]
fn test_closed_input_during_setup() {
    let config = GameConfig::default();
    let (result, _) = session(&config, None, "3\nA\n");
    assert!(matches!(result, Err(SessionError::InputClosed)));
}

#[test]
fn test_size_flag_skips_prompt() {
    let config = GameConfig::default();
    let (result, output) = session(&config, Some(3), "A\nB\n1,1\n2,1\n1,2\n2,2\n1,3\n");

    assert_eq!(winner(&result), Some("A"));
    assert!(!output.contains("Enter the board size"));
    assert!(output.starts_with("Prepare a 3x3 board …\n"));

    let (result, _) = session(&config, Some(9), "A\nB\n");
    assert!(matches!(
        result,
        Err(SessionError::Game(GameError::InvalidSize { size: 9, .. }))
    ));
}

#[test]
fn test_config_file_changes_the_game() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("grid.toml");
    fs::write(
        &path,
        r#"allowed_sizes = [4]
blank = "."

[[marks]]
index = 1
mark = "A"

[[marks]]
index = 2
mark = "B"

[[marks]]
index = 3
mark = "C"
"#,
    )
    .expect("Failed to write TOML");

    let cli = Cli::try_parse_from([
        "strictly_grid",
        "--config",
        path.to_str().expect("utf8 path"),
        "--win-length",
        "2",
    ])
    .expect("parse");
    let config = cli.game_config().expect("config");

    let script = "4\nann\nbob\ncy\n1,1\n2,1\n3,1\n1,2\n";
    let (result, output) = session(&config, None, script);

    assert_eq!(winner(&result), Some("ann"));
    assert!(output.contains("Enter the third player name: "));
    assert!(output.contains("cy, enter a coordinate as row,col for C: "));
    assert!(output.contains("A A . .\nB . . .\nC . . .\n. . . .\n"));
}

#[test]
fn test_replay_prints_result() {
    let config = GameConfig::default();
    let mut output = Vec::new();
    let outcome = replay(
        &mut output,
        &config,
        3,
        &["1,1", "2,2", "1,2", "3,3", "1,3"],
    )
    .expect("replay");
    assert_eq!(outcome.winner().map(Player::name), Some("Player 1"));
    let output = String::from_utf8(output).expect("utf8");
    assert_eq!(
        output,
        "X X X\n_ O _\n_ _ O\n\nPlayer 1 wins the game !!!!\n"
    );
}

#[test]
fn test_replay_failures() {
    let config = GameConfig::default();

    let result = replay(Vec::new(), &config, 3, &["1,1", "one,two"]);
    assert!(matches!(result, Err(SessionError::BadMove { input }) if input == "one,two"));

    let result = replay(Vec::new(), &config, 3, &["1,1", "1,1"]);
    assert!(matches!(
        result,
        Err(SessionError::Game(GameError::PositionOccupied { .. }))
    ));

    let result = replay(Vec::new(), &config, 3, &["1,1", "2,2"]);
    assert!(matches!(result, Err(SessionError::Unfinished { moves: 2 })));
}
