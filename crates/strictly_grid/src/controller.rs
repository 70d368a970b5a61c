//! Turn controller: sequences players and drives each move to evaluation.

use crate::board::Board;
use crate::config::ConfigError;
use crate::error::GameError;
use crate::grid::Grid;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{Outcome, TurnPhase};
use crate::position::Position;
use crate::turn_queue::TurnQueue;
use crate::types::Player;
use tracing::{debug, info, instrument, warn};

/// What the input collaborator produced for one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInput {
    /// A parsed 1-based `(row, col)` pair.
    Coordinates(Position),
    /// Text that could not be read as a coordinate pair.
    Malformed(String),
}

impl From<Position> for MoveInput {
    fn from(position: Position) -> Self {
        MoveInput::Coordinates(position)
    }
}

/// Why the same player is being asked again.
#[derive(Debug, Clone, PartialEq, Eq, derive_new::new)]
pub struct Retry {
    /// The rejection.
    pub error: GameError,
    /// For an occupied square, the player owning the mark found there;
    /// otherwise the player who moved last.
    pub previous: Player,
}

/// Supplies moves for the active player.
pub trait MoveSource {
    /// Asks `player` for a move. `retry` is set when the previous attempt by
    /// the same player was rejected.
    ///
    /// # Errors
    ///
    /// Any error returned here is fatal and ends [`TurnController::run`].
    fn request_move(&mut self, player: &Player, retry: Option<&Retry>)
    -> Result<MoveInput, GameError>;
}

/// Receives the grid after every accepted move.
pub trait BoardObserver {
    /// Called once per accepted move, terminal moves included.
    ///
    /// # Errors
    ///
    /// Any error returned here is fatal and ends [`TurnController::run`].
    fn board_changed(&mut self, grid: &Grid) -> Result<(), GameError>;
}

impl BoardObserver for () {
    fn board_changed(&mut self, _grid: &Grid) -> Result<(), GameError> {
        Ok(())
    }
}

/// Owns the board and the turn queue and moves the game through its phases.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    queue: TurnQueue,
    phase: TurnPhase,
}

impl TurnController {
    /// Starts a game with the head of `queue` to move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Config`] if a player's mark is not one the board
    /// counts toward a win.
    #[instrument(skip_all, fields(size = board.size(), players = queue.player_count()))]
    pub fn new(board: Board, queue: TurnQueue) -> Result<Self, GameError> {
        if let Some(stranger) = queue
            .players()
            .find(|player| !board.marks().contains(&player.mark()))
        {
            return Err(ConfigError::new(format!(
                "{} plays {}, which is not a configured mark",
                stranger.name(),
                stranger.mark()
            ))
            .into());
        }
        let phase = TurnPhase::AwaitingMove(queue.current().clone());
        Ok(Self {
            board,
            queue,
            phase,
        })
    }

    /// Plays `moves` in order from a fresh controller.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move, and returns
    /// [`GameError::GameAlreadyOver`] if moves remain after the game ends.
    #[instrument(skip(board, queue))]
    pub fn replay(board: Board, queue: TurnQueue, moves: &[Position]) -> Result<Self, GameError> {
        let mut controller = Self::new(board, queue)?;
        for &position in moves {
            controller.submit(MoveInput::Coordinates(position))?;
        }
        Ok(controller)
    }

    /// Advances the machine by one attempted move from the current player.
    ///
    /// Rejected input leaves everything as it was: same phase, same player,
    /// same grid. An accepted move is evaluated; the game then either ends
    /// or the turn passes to the next player.
    ///
    /// # Errors
    ///
    /// - Recoverable rejections ([`GameError::is_recoverable`]).
    /// - [`GameError::GameAlreadyOver`] once terminal.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit(&mut self, input: MoveInput) -> Result<TurnPhase, GameError> {
        if self.phase.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }
        let player = self.queue.current().clone();

        let position = match input {
            MoveInput::Coordinates(position) => position,
            MoveInput::Malformed(input) => {
                debug!(%player, %input, "Malformed move input");
                return Err(GameError::MalformedInput { input, player });
            }
        };

        self.board.apply_move(position, &player)?;

        self.phase = TurnPhase::Evaluating;
        self.phase = match self.board.evaluate(&player) {
            Ok(()) => {
                self.queue.rotate();
                TurnPhase::AwaitingMove(self.queue.current().clone())
            }
            Err(over) => {
                info!(%over, "Game finished");
                TurnPhase::Terminal(over.outcome())
            }
        };

        debug_assert!(
            BoardInvariants::check_all(&self.board).is_ok(),
            "board invariants violated after {}",
            position
        );

        Ok(self.phase.clone())
    }

    /// Drives the game to its end.
    ///
    /// Rejections are handed back to `io` as a [`Retry`] for the same
    /// player. Any other error ends the loop and is returned as is.
    #[instrument(skip_all)]
    pub fn run<C>(&mut self, io: &mut C) -> Result<Outcome, GameError>
    where
        C: MoveSource + BoardObserver + ?Sized,
    {
        let mut retry: Option<Retry> = None;
        loop {
            if let TurnPhase::Terminal(outcome) = &self.phase {
                return Ok(outcome.clone());
            }

            let player = self.queue.current().clone();
            let input = io.request_move(&player, retry.as_ref())?;

            match self.submit(input) {
                Ok(_) => {
                    retry = None;
                    io.board_changed(self.board.grid())
                        .inspect_err(|error| warn!(%error, "Stopping game"))?;
                }
                Err(error) if error.is_recoverable() => {
                    debug!(%error, "Move rejected, asking again");
                    let previous = self.blame(&error).clone();
                    retry = Some(Retry::new(error, previous));
                }
                Err(error) => {
                    warn!(%error, "Stopping game");
                    return Err(error);
                }
            }
        }
    }

    fn blame(&self, error: &GameError) -> &Player {
        match error {
            GameError::PositionOccupied { occupant, .. } => self
                .queue
                .owner_of(*occupant)
                .unwrap_or_else(|| self.queue.previous()),
            _ => self.queue.previous(),
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The turn queue.
    pub fn queue(&self) -> &TurnQueue {
        &self.queue
    }

    /// Current phase.
    pub fn phase(&self) -> &TurnPhase {
        &self.phase
    }

    /// Player to move, `None` once the game is over.
    pub fn current_player(&self) -> Option<&Player> {
        match &self.phase {
            TurnPhase::AwaitingMove(player) => Some(player),
            _ => None,
        }
    }

    /// The outcome, once terminal.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.phase.outcome()
    }
}
