//! Read-only game view and game outcome types.

use serde::{Deserialize, Serialize};

use crate::core::die::Die;
use crate::core::player::{Player, PlayerId};

/// How a finished game ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every player rolled their own knockout number.
    AllEliminated,
    /// A player reached the win threshold.
    ScoreThresholdReached { winner: PlayerId, final_score: u32 },
}

impl GameOutcome {
    /// The winning player, if there is one.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        match self {
            GameOutcome::ScoreThresholdReached { winner, .. } => Some(*winner),
            GameOutcome::AllEliminated => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winner() == Some(player)
    }
}

/// Lifecycle of a single game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    NotStarted,
    InProgress,
    Ended(GameOutcome),
}

impl GamePhase {
    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self, GamePhase::Ended(_))
    }
}

/// Read-only view of a dice game, handed to observers.
///
/// Observers may inspect the die and the roster between notifications but
/// can never mutate the game.
pub trait DiceGame {
    /// Human-readable game name.
    fn name(&self) -> &str;

    /// The die the game rolls.
    fn die(&self) -> &Die;

    /// All players in seating order, eliminated ones included.
    fn players(&self) -> &[Player];

    /// Current lifecycle phase.
    fn phase(&self) -> &GamePhase;

    /// Roll pairs made so far.
    fn turns_taken(&self) -> u32;

    // === Convenience Methods ===

    /// Look up a player by ID.
    fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players().iter().find(|p| p.id() == id)
    }

    /// Players still in the game.
    fn active_players(&self) -> Vec<PlayerId> {
        self.players()
            .iter()
            .filter(|p| !p.is_eliminated())
            .map(Player::id)
            .collect()
    }

    /// The outcome, once the game has ended.
    fn outcome(&self) -> Option<&GameOutcome> {
        match self.phase() {
            GamePhase::Ended(outcome) => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_outcome_is_winner() {
        let result = GameOutcome::ScoreThresholdReached {
            winner: PlayerId::new(2),
            final_score: 104,
        };
        assert!(!result.is_winner(PlayerId::new(1)));
        assert!(result.is_winner(PlayerId::new(2)));
        assert_eq!(result.winner(), Some(PlayerId::new(2)));

        let wipe = GameOutcome::AllEliminated;
        assert!(!wipe.is_winner(PlayerId::new(1)));
        assert_eq!(wipe.winner(), None);
    }

    #[test]
    fn test_phase_default_and_ended() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
        assert!(!GamePhase::InProgress.is_ended());
        assert!(GamePhase::Ended(GameOutcome::AllEliminated).is_ended());
    }

    #[test]
    fn test_outcome_serde() {
        let outcome = GameOutcome::ScoreThresholdReached {
            winner: PlayerId::new(1),
            final_score: 108,
        };
        let json = serde_json::to_string(&outcome).unwrap();
        let deserialized: GameOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, deserialized);
    }
}
