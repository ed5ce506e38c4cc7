//! Knock Out! dice game.
//!
//! Rules:
//! - Each player gets a knockout number between 6 and 9
//! - Players take turns rolling the die twice and adding the sum to their score
//! - Rolling your own knockout number knocks you out of the game
//! - Play ends when every player is knocked out, or when one player
//!   reaches 100 points
//!
//! The first player in seating order to trigger either ending ends the game
//! at once; the rest of that round is not played.

mod game;

pub use game::{KnockOut, KnockOutBuilder};
