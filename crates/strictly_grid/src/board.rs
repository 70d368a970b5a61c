//! The board: grid ownership, move validation and win/draw evaluation.

use crate::action::Move;
use crate::config::{GameConfig, MAX_BOARD_SIZE};
use crate::error::{GameError, GameOver};
use crate::grid::Grid;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, Mark, Player, Square};
use tracing::{debug, info, instrument};

/// An N×N board with its game state.
///
/// Moves are applied with [`Board::apply_move`] and must each be followed by
/// [`Board::evaluate`], which is the only thing that changes [`GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    state: GameState,
    win_length: usize,
    marks: Vec<Mark>,
    history: Vec<Move>,
    game_over: Option<GameOver>,
}

impl Board {
    /// Creates an empty `size`×`size` board.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidSize`] unless `size` is one of the
    /// configured allowed sizes and at most [`MAX_BOARD_SIZE`].
    #[instrument(skip(config), fields(win_length = *config.win_length()))]
    pub fn new(size: usize, config: &GameConfig) -> Result<Self, GameError> {
        let grid = if config.allows_size(size) && size <= MAX_BOARD_SIZE {
            Grid::new(size)
        } else {
            None
        };
        let Some(grid) = grid else {
            debug!(size, "Rejected board size");
            return Err(GameError::InvalidSize {
                size,
                allowed: config.allowed_sizes().clone(),
            });
        };
        info!(size, "Prepared board");
        Ok(Self {
            grid,
            state: GameState::Live,
            win_length: *config.win_length(),
            marks: config.known_marks(),
            history: Vec::new(),
            game_over: None,
        })
    }

    /// Stamps `player`'s mark at a 1-based position.
    ///
    /// Touches exactly one square and records the move. Does not evaluate;
    /// call [`Board::evaluate`] afterwards.
    ///
    /// # Errors
    ///
    /// - [`GameError::PositionOutOfRange`] if either coordinate is outside
    ///   `[1, size]`.
    /// - [`GameError::PositionOccupied`] if the square already holds a mark.
    /// - [`GameError::GameAlreadyOver`] once the state is terminal.
    ///
    /// The grid is unchanged on every error.
    #[instrument(skip(self, player), fields(player = %player, mark = %player.mark()))]
    pub fn apply_move(&mut self, position: Position, player: &Player) -> Result<(), GameError> {
        if self.state.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let Some(coord) = position.to_coord(self.size()) else {
            debug!("Position out of range");
            return Err(GameError::PositionOutOfRange {
                position,
                player: player.clone(),
            });
        };

        if let Square::Occupied(occupant) = self.grid.square(coord) {
            debug!(%occupant, "Position already taken");
            return Err(GameError::PositionOccupied {
                position,
                player: player.clone(),
                occupant,
            });
        }

        self.grid.set(coord, Square::Occupied(player.mark()));
        self.history.push(Move::new(player.clone(), position));
        debug!(moves = self.history.len(), "Move applied");
        Ok(())
    }

    /// Classifies the grid after `mover`'s accepted move.
    ///
    /// A win is checked before fullness, so a move that completes a run on
    /// the last open square is a win. The new state is committed before the
    /// signal is returned. On a board that is already terminal the committed
    /// signal is returned again without rescanning.
    ///
    /// # Errors
    ///
    /// Returns [`GameOver`] when the board reaches `Win` or `Draw`.
    #[instrument(skip(self, mover), fields(mover = %mover, state = %self.state))]
    pub fn evaluate(&mut self, mover: &Player) -> Result<(), GameOver> {
        if let Some(over) = &self.game_over {
            return Err(over.clone());
        }

        if let Some(found) = rules::find_winning_line(&self.grid, &self.marks, self.win_length) {
            info!(winner = %mover, direction = %found.direction, "Board won");
            return Err(self.commit(GameOver::win(mover.clone())));
        }

        if rules::is_full(&self.grid) {
            info!("Board drawn");
            return Err(self.commit(GameOver::draw()));
        }

        Ok(())
    }

    fn commit(&mut self, over: GameOver) -> GameOver {
        self.state = over.state();
        self.game_over = Some(over.clone());
        over
    }

    /// Read-only snapshot of the squares.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Consecutive marks needed to win.
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Marks the detector counts, in slot order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The committed game-over signal, once terminal.
    pub fn game_over(&self) -> Option<&GameOver> {
        self.game_over.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}
