use tracing::info;

use super::GameObserver;
use crate::rules::DiceGame;

/// Counts turns and logs a start/end summary.
#[derive(Clone, Debug, Default)]
pub struct TurnTracker {
    turns: u32,
}

impl TurnTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turns seen since the last game start.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }
}

impl GameObserver for TurnTracker {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        self.turns = 0;
        info!("Started a new game of {}", game.name());
        info!("The game is using a {}-sided die", game.die().faces());
    }

    fn on_turn(&mut self, _game: &dyn DiceGame, roll: u32) {
        self.turns += 1;
        info!("Rolled a {}", roll);
    }

    fn on_game_end(&mut self, _game: &dyn DiceGame) {
        info!("The game lasted for {} turns", self.turns);
    }
}
