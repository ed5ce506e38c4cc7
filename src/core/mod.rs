//! Core engine types: randomness, dice, players, configuration, errors.
//!
//! These are the leaves of the engine. Nothing here knows about rounds,
//! turns or observers.

pub mod config;
pub mod die;
pub mod error;
pub mod player;
pub mod rng;

pub use config::KnockOutConfig;
pub use die::{Die, DEFAULT_FACES, MAX_FACES};
pub use error::KnockOutError;
pub use player::{Player, PlayerId};
pub use rng::{GameRng, RandomSource, SequenceSource, UniformSource};
