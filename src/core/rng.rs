//! Random number sources.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Forkable**: Create independent per-game streams for batch simulation
//! - **Context streams**: Independent sequences for different purposes
//!   (die rolls vs knockout number draws)
//! - **Injectable**: Dice and players sample through the `RandomSource`
//!   trait, so tests can substitute a fixed sequence
//!
//! ## Usage
//!
//! ```
//! use knockout_dice::core::{GameRng, RandomSource, UniformSource};
//!
//! let rng = GameRng::new(42);
//! let mut source = UniformSource::one_through_ten(rng.for_context("die"));
//!
//! let value = source.next_value();
//! assert!((1..=10).contains(&value));
//! ```

use std::fmt;
use std::ops::RangeInclusive;

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::error::KnockOutError;

/// Produces integers over a fixed inclusive range on demand.
///
/// Implementations should sample uniformly over `range()`. The die maps the
/// value onto its faces with a modulo, so the source's range only has to be
/// large enough, not aligned with the face count.
pub trait RandomSource: fmt::Debug {
    /// Draw the next value.
    fn next_value(&mut self) -> u32;

    /// The inclusive range values are drawn from.
    fn range(&self) -> RangeInclusive<u32>;
}

/// Deterministic RNG with forking for batch simulation.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from operating system entropy.
    ///
    /// Panics if the OS entropy source is unavailable; there is no degraded
    /// mode to fall back to.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(OsRng.next_u64())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed,
    /// on every platform and toolchain, so recorded seeds replay exactly.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        // FNV-1a over the context name.
        let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
        for byte in context.bytes() {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
        }

        Self::new(splitmix64(self.seed ^ hash))
    }

    /// Generate a random integer in the given inclusive range.
    ///
    /// Panics if the range is empty.
    pub fn gen_range(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

/// SplitMix64 finalizer.
fn splitmix64(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Uniform source over an inclusive range, backed by a `GameRng`.
#[derive(Clone, Debug)]
pub struct UniformSource {
    rng: GameRng,
    range: RangeInclusive<u32>,
}

impl UniformSource {
    /// Create a source sampling uniformly from `range`.
    pub fn new(range: RangeInclusive<u32>, rng: GameRng) -> Result<Self, KnockOutError> {
        if range.is_empty() {
            return Err(KnockOutError::invalid(format!(
                "random source range {}..={} is empty",
                range.start(),
                range.end()
            )));
        }
        Ok(Self { rng, range })
    }

    /// The classic `[1, 10]` source used by the default die.
    #[must_use]
    pub fn one_through_ten(rng: GameRng) -> Self {
        Self { rng, range: 1..=10 }
    }
}

impl RandomSource for UniformSource {
    fn next_value(&mut self) -> u32 {
        self.rng.gen_range(self.range.clone())
    }

    fn range(&self) -> RangeInclusive<u32> {
        self.range.clone()
    }
}

/// Cycles through a fixed list of values.
///
/// Used to script dice and knockout numbers in tests and replays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SequenceSource {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceSource {
    /// Create a source that yields `values` in order, wrapping around.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "SequenceSource needs at least one value");
        Self { values, cursor: 0 }
    }

    /// A source that always yields `value`.
    pub fn constant(value: u32) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceSource {
    fn next_value(&mut self) -> u32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }

    fn range(&self) -> RangeInclusive<u32> {
        let min = self.values.iter().copied().min().unwrap_or(0);
        let max = self.values.iter().copied().max().unwrap_or(0);
        min..=max
    }
}
