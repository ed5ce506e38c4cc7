//! # knockout-dice
//!
//! A deterministic engine for the *Knock Out!* dice elimination game.
//!
//! ## Rules
//!
//! 1. Each player gets a knockout number: 6, 7, 8 or 9.
//! 2. Players take turns rolling the die twice and adding the sum to their score.
//! 3. A player who rolls their own knockout number is knocked out.
//! 4. Play ends when every player is knocked out, or one player reaches 100.
//!
//! ## Design Principles
//!
//! 1. **Injectable Randomness**: Dice and knockout numbers sample through
//!    `RandomSource`. Games are reproducible from a seed, and tests can script
//!    every roll.
//!
//! 2. **Observer, Not Output**: The engine reports its lifecycle to a
//!    `GameObserver`; it never prints.
//!
//! 3. **Fail At Construction**: Bad configuration is rejected before the first
//!    roll. Once a game starts it cannot fail.
//!
//! ## Modules
//!
//! - `core`: RNG, random sources, dice, players, configuration, errors
//! - `rules`: `DiceGame` view trait, game phases and outcomes
//! - `observer`: `GameObserver` trait and stock observers
//! - `games`: the Knock Out! engine
//! - `simulation`: batch runs over many seeded games
//!
//! ## Example
//!
//! ```
//! use knockout_dice::{DiceGame, EventRecorder, KnockOut};
//!
//! let mut recorder = EventRecorder::new();
//! let mut game = KnockOut::builder().player_count(3).seed(42).build().unwrap();
//! game.set_observer(&mut recorder);
//!
//! let outcome = game.play().unwrap();
//! assert_eq!(game.outcome(), Some(&outcome));
//! ```

pub mod core;
pub mod games;
pub mod observer;
pub mod rules;
pub mod simulation;

// Re-export commonly used types
pub use crate::core::{
    Die, GameRng, KnockOutConfig, KnockOutError, Player, PlayerId, RandomSource, SequenceSource,
    UniformSource,
};

pub use crate::games::knockout::{KnockOut, KnockOutBuilder};

pub use crate::observer::{EventRecorder, GameEvent, GameObserver, TurnTracker};

pub use crate::rules::{DiceGame, GameOutcome, GamePhase};

pub use crate::simulation::{run_simulation, SimulationConfig, SimulationStats};
