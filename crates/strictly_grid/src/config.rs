//! Game configuration: allowed sizes, win length, blank symbol, marks.

use crate::types::Mark;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Side lengths accepted when nothing else is configured.
pub const DEFAULT_ALLOWED_SIZES: [usize; 5] = [2, 3, 4, 5, 6];

/// Consecutive marks needed to win when nothing else is configured.
pub const DEFAULT_WIN_LENGTH: usize = 3;

/// Largest side length any configuration may allow.
pub const MAX_BOARD_SIZE: usize = 1024;

/// Symbol drawn for empty squares when nothing else is configured.
pub const DEFAULT_BLANK: char = '_';

/// Binding of a player slot to its mark.
///
/// Resolved once at setup; the engine never derives marks any other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct MarkSlot {
    /// 1-based slot number, shown as "Player {index}".
    pub index: usize,
    /// Mark stamped by the player in this slot.
    pub mark: Mark,
}

/// Configuration surface of the engine.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board sizes accepted at construction.
    allowed_sizes: BTreeSet<usize>,

    /// Consecutive identical marks required to win.
    win_length: usize,

    /// Display symbol of the empty sentinel.
    blank: char,

    /// Ordered mark assignment, one slot per player.
    marks: Vec<MarkSlot>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            allowed_sizes: DEFAULT_ALLOWED_SIZES.into_iter().collect(),
            win_length: DEFAULT_WIN_LENGTH,
            blank: DEFAULT_BLANK,
            marks: vec![
                MarkSlot::new(1, Mark::new('X')),
                MarkSlot::new(2, Mark::new('O')),
            ],
        }
    }
}

impl GameConfig {
    /// Creates and validates a configuration.
    #[instrument(skip(allowed_sizes, marks))]
    pub fn new(
        allowed_sizes: impl IntoIterator<Item = usize>,
        win_length: usize,
        blank: char,
        marks: Vec<MarkSlot>,
    ) -> Result<Self, ConfigError> {
        let config = Self {
            allowed_sizes: allowed_sizes.into_iter().collect(),
            win_length,
            blank,
            marks,
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file. Missing keys keep their defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!(
            win_length = config.win_length,
            players = config.marks.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Returns a copy with a different win length.
    #[instrument(skip(self))]
    pub fn with_win_length(mut self, win_length: usize) -> Result<Self, ConfigError> {
        self.win_length = win_length;
        self.validate()?;
        Ok(self)
    }

    /// Checks the invariants every other component relies on.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.allowed_sizes.is_empty() {
            return Err(ConfigError::new("allowed_sizes must not be empty".to_string()));
        }
        if self.allowed_sizes.contains(&0) {
            return Err(ConfigError::new("allowed_sizes must not contain 0".to_string()));
        }
        if let Some(&too_big) = self.allowed_sizes.range(MAX_BOARD_SIZE + 1..).next() {
            return Err(ConfigError::new(format!(
                "allowed size {too_big} exceeds the maximum of {MAX_BOARD_SIZE}"
            )));
        }
        if self.win_length == 0 {
            return Err(ConfigError::new("win_length must be at least 1".to_string()));
        }
        if self.marks.len() < 2 {
            return Err(ConfigError::new(format!(
                "at least two mark slots are required, found {}",
                self.marks.len()
            )));
        }

        let mut seen_marks = HashSet::new();
        let mut seen_indices = HashSet::new();
        for slot in &self.marks {
            if slot.mark.symbol() == self.blank {
                return Err(ConfigError::new(format!(
                    "mark {} is the blank symbol",
                    slot.mark
                )));
            }
            if !seen_marks.insert(slot.mark) {
                return Err(ConfigError::new(format!("mark {} is assigned twice", slot.mark)));
            }
            if !seen_indices.insert(slot.index) {
                return Err(ConfigError::new(format!(
                    "slot index {} is assigned twice",
                    slot.index
                )));
            }
        }
        Ok(())
    }

    /// True if boards of this side length may be built.
    pub fn allows_size(&self, size: usize) -> bool {
        self.allowed_sizes.contains(&size)
    }

    /// Marks in slot order.
    pub fn known_marks(&self) -> Vec<Mark> {
        self.marks.iter().map(|slot| slot.mark).collect()
    }
}

/// Configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xo() -> Vec<MarkSlot> {
        vec![MarkSlot::new(1, Mark::new('X')), MarkSlot::new(2, Mark::new('O'))]
    }

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(*config.win_length(), 3);
        assert_eq!(*config.blank(), '_');
        assert!(config.allows_size(2));
        assert!(config.allows_size(6));
        assert!(!config.allows_size(1));
        assert!(!config.allows_size(7));
        assert_eq!(config.known_marks(), vec![Mark::new('X'), Mark::new('O')]);
    }

    #[test]
    fn test_rejects_zero_win_length() {
        assert!(GameConfig::new([3], 0, '_', xo()).is_err());
    }

    #[test]
    fn test_rejects_bad_sizes() {
        assert!(GameConfig::new(Vec::<usize>::new(), 3, '_', xo()).is_err());
        assert!(GameConfig::new([0, 3], 3, '_', xo()).is_err());
    }

    #[test]
    fn test_rejects_sizes_past_maximum() {
        assert!(GameConfig::new([3, MAX_BOARD_SIZE], 3, '_', xo()).is_ok());
        assert!(GameConfig::new([3, MAX_BOARD_SIZE + 1], 3, '_', xo()).is_err());

        let err = GameConfig::from_toml_str("allowed_sizes = [5000000000]\n")
            .expect_err("oversized board");
        assert!(err.message.contains("5000000000"), "{err}");
    }

    #[test]
    fn test_rejects_bad_marks() {
        let single = vec![MarkSlot::new(1, Mark::new('X'))];
        assert!(GameConfig::new([3], 3, '_', single).is_err());

        let duplicate = vec![MarkSlot::new(1, Mark::new('X')), MarkSlot::new(2, Mark::new('X'))];
        assert!(GameConfig::new([3], 3, '_', duplicate).is_err());

        let blank = vec![MarkSlot::new(1, Mark::new('X')), MarkSlot::new(2, Mark::new('_'))];
        assert!(GameConfig::new([3], 3, '_', blank).is_err());

        let same_slot = vec![MarkSlot::new(1, Mark::new('X')), MarkSlot::new(1, Mark::new('O'))];
        assert!(GameConfig::new([3], 3, '_', same_slot).is_err());
    }

    #[test]
    fn test_win_length_longer_than_board_is_allowed() {
        let config = GameConfig::new([2, 3], 5, '.', xo()).expect("valid config");
        assert_eq!(*config.win_length(), 5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("win_length = 4\n").expect("valid toml");
        assert_eq!(*config.win_length(), 4);
        assert_eq!(config.marks(), &xo());
        assert_eq!(*config.blank(), '_');
    }

    #[test]
    fn test_toml_marks() {
        let content = r#"
allowed_sizes = [3, 4]
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
"#;
        let config = GameConfig::from_toml_str(content).expect("valid toml");
        assert_eq!(config.marks().len(), 3);
        assert_eq!(*config.blank(), '.');
        assert_eq!(config.allowed_sizes(), &BTreeSet::from([3, 4]));
    }

    #[test]
    fn test_invalid_toml_reports_location() {
        let err = GameConfig::from_toml_str("win_length = 0\n").expect_err("zero win length");
        assert!(err.message.contains("win_length"));
        assert!(err.file.ends_with("config.rs"));
    }
}
