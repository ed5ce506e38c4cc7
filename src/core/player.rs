//! Player identification and per-player game data.
//!
//! ## PlayerId
//!
//! Players are numbered from 1 in seating order.
//!
//! ## Player
//!
//! Holds a player's knockout number, running score and elimination status.
//! Only the engine mutates players during turn resolution.

use serde::{Deserialize, Serialize};

use super::rng::RandomSource;

/// Player identifier. The first player is `PlayerId(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position in the roster (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 as usize).saturating_sub(1)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use knockout_dice::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(1));
    /// assert_eq!(players[3], PlayerId::new(4));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (1..=player_count as u32).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A seat in a Knock Out! game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    knockout_number: u32,
    score: u32,
    eliminated: bool,
}

impl Player {
    /// Create a player with a known knockout number.
    #[must_use]
    pub fn new(id: PlayerId, knockout_number: u32) -> Self {
        Self {
            id,
            knockout_number,
            score: 0,
            eliminated: false,
        }
    }

    /// Create a player whose knockout number is drawn from `source`.
    pub fn draw(id: PlayerId, source: &mut dyn RandomSource) -> Self {
        Self::new(id, source.next_value())
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// The roll sum that knocks this player out.
    #[must_use]
    pub fn knockout_number(&self) -> u32 {
        self.knockout_number
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }

    /// Add a roll to the running score.
    pub fn add_to_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Knock the player out. Calling it again has no effect.
    pub fn eliminate(&mut self) {
        self.eliminated = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rng::SequenceSource;

    #[test]
    fn test_player_id_basics() {
        let p1 = PlayerId::new(1);
        let p2 = PlayerId::new(2);

        assert_eq!(p1.index(), 0);
        assert_eq!(p2.index(), 1);
        assert_eq!(format!("{}", p1), "Player 1");
    }

    #[test]
    fn test_player_id_all() {
        let players: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(players, vec![PlayerId(1), PlayerId(2), PlayerId(3)]);
        assert_eq!(PlayerId::all(0).count(), 0);
    }

    #[test]
    fn test_new_player() {
        let player = Player::new(PlayerId(1), 7);
        assert_eq!(player.id(), PlayerId(1));
        assert_eq!(player.knockout_number(), 7);
        assert_eq!(player.score(), 0);
        assert!(!player.is_eliminated());
    }

    #[test]
    fn test_draw_uses_source() {
        let mut source = SequenceSource::new(vec![8, 6]);
        let a = Player::draw(PlayerId(1), &mut source);
        let b = Player::draw(PlayerId(2), &mut source);
        assert_eq!(a.knockout_number(), 8);
        assert_eq!(b.knockout_number(), 6);
    }

    #[test]
    fn test_add_to_score() {
        let mut player = Player::new(PlayerId(1), 6);
        player.add_to_score(12);
        player.add_to_score(0);
        player.add_to_score(5);
        assert_eq!(player.score(), 17);
    }

    #[test]
    fn test_eliminate_is_idempotent() {
        let mut player = Player::new(PlayerId(1), 6);
        player.eliminate();
        player.eliminate();
        assert!(player.is_eliminated());
        assert_eq!(player.score(), 0);
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new(PlayerId(3), 9);
        player.add_to_score(42);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
