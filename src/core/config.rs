//! Game configuration.
//!
//! `KnockOutConfig` carries the construction parameters of a game. The only
//! rule variants are the knockout number range and the win threshold;
//! everything else sizes the table (players, die, random source).

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::die::{DEFAULT_FACES, MAX_FACES};
use super::error::KnockOutError;

/// Knock Out! configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnockOutConfig {
    /// Number of players (at least 1).
    pub player_count: usize,

    /// Faces on the die (at least 1).
    pub die_faces: u32,

    /// Range of the random source behind the die.
    pub source_range: RangeInclusive<u32>,

    /// Range knockout numbers are drawn from.
    pub knockout_range: RangeInclusive<u32>,

    /// Score at which a player wins.
    pub win_threshold: u32,

    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for KnockOutConfig {
    fn default() -> Self {
        Self {
            player_count: 5,
            die_faces: DEFAULT_FACES,
            source_range: 1..=10,
            knockout_range: 6..=9,
            win_threshold: 100,
            seed: None,
        }
    }
}

impl KnockOutConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of players.
    pub fn with_player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    /// Set the number of die faces.
    pub fn with_die_faces(mut self, faces: u32) -> Self {
        self.die_faces = faces;
        self
    }

    /// Set the random source range behind the die.
    pub fn with_source_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.source_range = range;
        self
    }

    /// Set the knockout number range.
    pub fn with_knockout_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.knockout_range = range;
        self
    }

    /// Set the winning score.
    pub fn with_win_threshold(mut self, threshold: u32) -> Self {
        self.win_threshold = threshold;
        self
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every parameter before a game is built from this config.
    pub fn validate(&self) -> Result<(), KnockOutError> {
        if self.player_count == 0 {
            return Err(KnockOutError::invalid("player count must be at least 1"));
        }
        if u32::try_from(self.player_count).is_err() {
            return Err(KnockOutError::invalid(format!(
                "player count {} is too large",
                self.player_count
            )));
        }
        if self.die_faces == 0 {
            return Err(KnockOutError::invalid("die must have at least 1 face"));
        }
        if self.die_faces > MAX_FACES {
            return Err(KnockOutError::invalid(format!(
                "die has {} faces, at most {} supported",
                self.die_faces, MAX_FACES
            )));
        }
        if self.source_range.is_empty() {
            return Err(KnockOutError::invalid("source range is empty"));
        }
        if self.knockout_range.is_empty() {
            return Err(KnockOutError::invalid("knockout range is empty"));
        }
        if self.win_threshold == 0 {
            return Err(KnockOutError::invalid("win threshold must be positive"));
        }
        Ok(())
    }
}
