use serde::{Deserialize, Serialize};

use super::GameObserver;
use crate::rules::{DiceGame, GameOutcome};

/// A recorded lifecycle notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Game started with this many players and die faces.
    Started { players: usize, die_faces: u32 },
    /// A roll pair was made.
    Turn { roll: u32 },
    /// Game ended after `turns` roll pairs.
    Ended { turns: u32, outcome: Option<GameOutcome> },
}

/// Observer that keeps every notification in order.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    events: Vec<GameEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events seen so far.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Roll sums in the order they were made.
    pub fn rolls(&self) -> impl Iterator<Item = u32> + '_ {
        self.events.iter().filter_map(|e| match e {
            GameEvent::Turn { roll } => Some(*roll),
            _ => None,
        })
    }

    /// Drop everything recorded.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl GameObserver for EventRecorder {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        self.events.push(GameEvent::Started {
            players: game.players().len(),
            die_faces: game.die().faces(),
        });
    }

    fn on_turn(&mut self, _game: &dyn DiceGame, roll: u32) {
        self.events.push(GameEvent::Turn { roll });
    }

    fn on_game_end(&mut self, game: &dyn DiceGame) {
        self.events.push(GameEvent::Ended {
            turns: game.turns_taken(),
            outcome: game.outcome().cloned(),
        });
    }
}
