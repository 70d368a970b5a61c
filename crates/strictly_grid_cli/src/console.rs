//! Line-oriented console: prompts on one stream, answers from another.

use crate::messages;
use crate::parse::parse_coordinates;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use strictly_grid::{BoardObserver, GameError, Grid, MoveInput, MoveSource, Player, Retry};
use tracing::{debug, instrument};

/// Console over any reader and writer.
///
/// Acts as both the move source and the board observer of a game.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
    blank: char,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console that draws empty squares as `blank`.
    pub fn new(input: R, output: W, blank: char) -> Self {
        Self {
            input,
            output,
            blank,
        }
    }

    /// Reads one line without its line ending. `None` at end of input.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Prints `text` without a newline and reads the answer.
    #[instrument(skip(self))]
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let answer = self.read_line()?;
        debug!(?answer, "Prompt answered");
        Ok(answer)
    }

    /// Prints one line.
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    /// Prints the grid followed by an empty line.
    pub fn render(&mut self, grid: &Grid) -> io::Result<()> {
        writeln!(self.output, "{}", grid.render(self.blank))?;
        writeln!(self.output)?;
        self.output.flush()
    }

    /// Gives back the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    #[instrument(skip(self, retry), fields(player = %player, retry = retry.is_some()))]
    fn request_move(
        &mut self,
        player: &Player,
        retry: Option<&Retry>,
    ) -> Result<MoveInput, GameError> {
        let text = match retry {
            Some(retry) => messages::retry_prompt(player, retry),
            None => messages::move_prompt(player),
        };
        match self.prompt(&text) {
            Ok(Some(line)) => Ok(parse_coordinates(&line)),
            Ok(None) => Err(GameError::InputFailed {
                player: player.clone(),
                reason: "input closed".to_string(),
            }),
            Err(err) => Err(GameError::InputFailed {
                player: player.clone(),
                reason: err.to_string(),
            }),
        }
    }
}

impl<R: BufRead, W: Write> BoardObserver for Console<R, W> {
    fn board_changed(&mut self, grid: &Grid) -> Result<(), GameError> {
        self.render(grid).map_err(|err| GameError::OutputFailed {
            reason: err.to_string(),
        })
    }
}
