//! Game view trait and outcomes.
//!
//! `DiceGame` is the read-only face a game shows its observers:
//! - The die and its face count
//! - The roster, with scores and elimination status
//! - The lifecycle phase and, once ended, the outcome

pub mod engine;

pub use engine::{DiceGame, GameOutcome, GamePhase};
