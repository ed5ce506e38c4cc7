//! A die backed by a `RandomSource`.
//!
//! Rolls map the source's value onto the faces with `value % faces + 1`.
//! That mapping is only exactly uniform when the source's range size is a
//! multiple of the face count; the default `[1, 10]` source on a six-sided
//! die lands on faces 2 to 5 twice as often as on 1 or 6.

use super::error::KnockOutError;
use super::rng::RandomSource;

/// Default number of faces.
pub const DEFAULT_FACES: u32 = 6;

/// Largest face count whose roll pair still fits in a `u32`.
pub const MAX_FACES: u32 = u32::MAX / 2;

/// A die with a fixed number of faces.
#[derive(Debug)]
pub struct Die {
    faces: u32,
    source: Box<dyn RandomSource>,
}

impl Die {
    /// Create a die with `faces` faces drawing from `source`.
    ///
    /// Fails with `InvalidConfiguration` when `faces` is zero or above
    /// `MAX_FACES`.
    pub fn new(faces: u32, source: impl RandomSource + 'static) -> Result<Self, KnockOutError> {
        Self::from_boxed(faces, Box::new(source))
    }

    /// Create a die from an already boxed source.
    pub fn from_boxed(faces: u32, source: Box<dyn RandomSource>) -> Result<Self, KnockOutError> {
        if faces == 0 {
            return Err(KnockOutError::invalid("die must have at least 1 face"));
        }
        if faces > MAX_FACES {
            return Err(KnockOutError::invalid(format!(
                "die has {} faces, at most {} supported",
                faces, MAX_FACES
            )));
        }
        Ok(Self { faces, source })
    }

    /// Number of faces.
    #[must_use]
    pub fn faces(&self) -> u32 {
        self.faces
    }

    /// Roll once. Always in `1..=faces`.
    pub fn roll(&mut self) -> u32 {
        self.source.next_value() % self.faces + 1
    }

    /// Roll twice and sum. Always in `2..=2 * faces`.
    pub fn roll_pair(&mut self) -> u32 {
        self.roll() + self.roll()
    }
}
