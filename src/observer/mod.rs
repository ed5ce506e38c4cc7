//! Lifecycle observers.
//!
//! A game notifies its observer synchronously, in event order:
//! exactly one `on_game_start`, one `on_turn` per roll pair, then exactly
//! one `on_game_end`. Nothing an observer returns flows back into the game.
//!
//! ## Provided observers
//!
//! - `TurnTracker`: counts turns and logs a summary
//! - `EventRecorder`: keeps every notification as a `GameEvent`

mod recorder;
mod tracker;

pub use recorder::{EventRecorder, GameEvent};
pub use tracker::TurnTracker;

use crate::rules::DiceGame;

/// Receives lifecycle notifications from a game.
pub trait GameObserver {
    /// The game is about to roll its first turn.
    fn on_game_start(&mut self, game: &dyn DiceGame);

    /// A player rolled the die pair. `roll` is the sum.
    fn on_turn(&mut self, game: &dyn DiceGame, roll: u32);

    /// The game has ended; `game.outcome()` is set.
    fn on_game_end(&mut self, game: &dyn DiceGame);
}
