//! Cyclic rotation of players.

use crate::config::{ConfigError, GameConfig};
use crate::types::{Mark, Player};
use std::collections::{HashSet, VecDeque};
use tracing::{debug, instrument};

/// Ordered, cyclic sequence of players. The head is the current player.
///
/// Never empty: the head is held apart from the players still waiting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnQueue {
    current: Player,
    waiting: VecDeque<Player>,
}

impl TurnQueue {
    /// Builds a queue from players in turn order.
    ///
    /// # Errors
    ///
    /// Fails if `players` is empty or two players share a mark.
    #[instrument(skip(players))]
    pub fn new(players: impl IntoIterator<Item = Player>) -> Result<Self, ConfigError> {
        let mut waiting: VecDeque<Player> = players.into_iter().collect();

        let mut seen = HashSet::new();
        if let Some(dup) = waiting.iter().find(|p| !seen.insert(p.mark())) {
            return Err(ConfigError::new(format!(
                "{} reuses mark {}",
                dup.name(),
                dup.mark()
            )));
        }

        let current = waiting
            .pop_front()
            .ok_or_else(|| ConfigError::new("at least one player is required".to_string()))?;
        debug!(first = %current, players = waiting.len() + 1, "Turn queue ready");
        Ok(Self { current, waiting })
    }

    /// Binds the i-th name to the i-th configured mark slot.
    ///
    /// # Errors
    ///
    /// Fails unless exactly one name is given per slot.
    #[instrument(skip(names, config))]
    pub fn from_names<S: AsRef<str>>(
        names: impl IntoIterator<Item = S>,
        config: &GameConfig,
    ) -> Result<Self, ConfigError> {
        let names: Vec<S> = names.into_iter().collect();
        if names.len() != config.marks().len() {
            return Err(ConfigError::new(format!(
                "expected {} player names, got {}",
                config.marks().len(),
                names.len()
            )));
        }
        Self::new(
            names
                .iter()
                .zip(config.marks())
                .map(|(name, slot)| Player::new(name, slot.mark, slot.index)),
        )
    }

    /// Player whose turn it is.
    pub fn current(&self) -> &Player {
        &self.current
    }

    /// Player who moved last: the back of the queue.
    ///
    /// With a single player that is the current player.
    pub fn previous(&self) -> &Player {
        self.waiting.back().unwrap_or(&self.current)
    }

    /// Player holding `mark`, if any.
    pub fn owner_of(&self, mark: Mark) -> Option<&Player> {
        self.players().find(|player| player.mark() == mark)
    }

    /// Moves the current player to the back; the next in line becomes current.
    #[instrument(skip(self), fields(from = %self.current))]
    pub fn rotate(&mut self) {
        if let Some(next) = self.waiting.pop_front() {
            let done = std::mem::replace(&mut self.current, next);
            self.waiting.push_back(done);
        }
        debug!(to = %self.current, "Rotated turn");
    }

    /// Players in turn order, starting with the current one.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        std::iter::once(&self.current).chain(self.waiting.iter())
    }

    /// Number of players, never zero.
    pub fn player_count(&self) -> usize {
        self.waiting.len() + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(queue: &TurnQueue) -> Vec<&str> {
        queue.players().map(Player::name).collect()
    }

    #[test]
    fn test_from_names_binds_slots() {
        let queue = TurnQueue::from_names(["A", "B"], &GameConfig::default()).expect("two names");
        assert_eq!(queue.current().name(), "A");
        assert_eq!(queue.current().mark(), Mark::new('X'));
        assert_eq!(queue.current().index(), 1);
        assert_eq!(queue.previous().name(), "B");
        assert_eq!(queue.previous().mark(), Mark::new('O'));
    }

    #[test]
    fn test_from_names_requires_one_name_per_slot() {
        let config = GameConfig::default();
        assert!(TurnQueue::from_names(["A"], &config).is_err());
        assert!(TurnQueue::from_names(["A", "B", "C"], &config).is_err());
    }

    #[test]
    fn test_rotate_is_cyclic() {
        let queue = TurnQueue::new([
            Player::new("A", Mark::new('X'), 1),
            Player::new("B", Mark::new('O'), 2),
            Player::new("C", Mark::new('Z'), 3),
        ]);
        let mut queue = queue.expect("distinct marks");
        assert_eq!(names(&queue), ["A", "B", "C"]);
        queue.rotate();
        assert_eq!(names(&queue), ["B", "C", "A"]);
        assert_eq!(queue.previous().name(), "A");
        queue.rotate();
        queue.rotate();
        assert_eq!(names(&queue), ["A", "B", "C"]);
        assert_eq!(queue.player_count(), 3);
    }

    #[test]
    fn test_rejects_empty_and_duplicate_marks() {
        assert!(TurnQueue::new(Vec::new()).is_err());
        let clash = TurnQueue::new([
            Player::new("A", Mark::new('X'), 1),
            Player::new("B", Mark::new('X'), 2),
        ]);
        assert!(clash.is_err());
    }

    #[test]
    fn test_owner_of() {
        let queue = TurnQueue::from_names(["A", "B"], &GameConfig::default()).expect("two names");
        assert_eq!(queue.owner_of(Mark::new('O')).map(Player::name), Some("B"));
        assert_eq!(queue.owner_of(Mark::new('Q')), None);
    }
}
