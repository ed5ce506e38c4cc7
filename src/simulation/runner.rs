//! Batch simulation of independent games.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{GameRng, KnockOutConfig, KnockOutError, PlayerId};
use crate::games::knockout::KnockOut;
use crate::rules::{DiceGame, GameOutcome};

/// Configuration for a batch of games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to play.
    pub games: usize,

    /// Rules and table size for every game. `game.seed` is ignored;
    /// each game gets its own seed forked from `seed`.
    pub game: KnockOutConfig,

    /// Master seed. Same seed produces the same batch.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            game: KnockOutConfig::default(),
            seed: 0,
        }
    }
}

impl SimulationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game configuration.
    pub fn with_game(mut self, game: KnockOutConfig) -> Self {
        self.game = game;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// Aggregate results of a batch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: u32,

    /// Games where everyone was knocked out.
    pub all_eliminated: u32,

    /// Wins per player, indexed by `PlayerId::index()`.
    pub wins: Vec<u32>,

    /// Roll pairs across all games.
    pub total_turns: u64,

    /// Fewest roll pairs in a single game.
    pub shortest_game: Option<u32>,

    /// Most roll pairs in a single game.
    pub longest_game: u32,
}

impl SimulationStats {
    /// Empty stats for `player_count` players.
    pub fn new(player_count: usize) -> Self {
        Self {
            wins: vec![0; player_count],
            ..Self::default()
        }
    }

    /// Fold one finished game into the totals.
    pub fn record(&mut self, outcome: &GameOutcome, turns: u32) {
        self.games += 1;
        self.total_turns += u64::from(turns);
        self.longest_game = self.longest_game.max(turns);
        self.shortest_game = Some(self.shortest_game.map_or(turns, |s| s.min(turns)));

        match outcome {
            GameOutcome::AllEliminated => self.all_eliminated += 1,
            GameOutcome::ScoreThresholdReached { winner, .. } => {
                if let Some(count) = self.wins.get_mut(winner.index()) {
                    *count += 1;
                }
            }
        }
    }

    /// Mean roll pairs per game (0 when no games were played).
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / f64::from(self.games)
        }
    }

    /// Fraction of games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        let wins = self.wins.get(player.index()).copied().unwrap_or(0);
        f64::from(wins) / f64::from(self.games)
    }
}

/// Play `config.games` independent games and aggregate the results.
///
/// Every game owns its die, players and RNG stream; nothing is shared
/// between games.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationStats, KnockOutError> {
    config.game.validate()?;

    let mut master = GameRng::new(config.seed);
    let mut stats = SimulationStats::new(config.game.player_count);

    for index in 0..config.games {
        let game_seed = master.fork().seed();
        let mut game = KnockOut::from_config(config.game.clone().with_seed(game_seed))?;
        let outcome = game.play()?;

        debug!(game = index, seed = game_seed, turns = game.turns_taken(), ?outcome, "game finished");
        stats.record(&outcome, game.turns_taken());
    }

    info!(
        games = stats.games,
        all_eliminated = stats.all_eliminated,
        average_turns = stats.average_turns(),
        "simulation complete"
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record() {
        let mut stats = SimulationStats::new(2);
        stats.record(&GameOutcome::AllEliminated, 4);
        stats.record(
            &GameOutcome::ScoreThresholdReached {
                winner: PlayerId(2),
                final_score: 101,
            },
            30,
        );

        assert_eq!(stats.games, 2);
        assert_eq!(stats.all_eliminated, 1);
        assert_eq!(stats.wins, vec![0, 1]);
        assert_eq!(stats.total_turns, 34);
        assert_eq!(stats.shortest_game, Some(4));
        assert_eq!(stats.longest_game, 30);
        assert!((stats.average_turns() - 17.0).abs() < f64::EPSILON);
        assert!((stats.win_rate(PlayerId(2)) - 0.5).abs() < f64::EPSILON);
        assert_eq!(stats.win_rate(PlayerId(1)), 0.0);
    }

    #[test]
    fn test_empty_stats() {
        let stats = SimulationStats::new(3);
        assert_eq!(stats.average_turns(), 0.0);
        assert_eq!(stats.win_rate(PlayerId(1)), 0.0);
        assert_eq!(stats.shortest_game, None);
    }

    #[test]
    fn test_simulation_counts_every_game() {
        let config = SimulationConfig::new()
            .with_games(50)
            .with_game(KnockOutConfig::new().with_player_count(3))
            .with_seed(7);

        let stats = run_simulation(&config).unwrap();
        assert_eq!(stats.games, 50);
        assert_eq!(stats.all_eliminated + stats.wins.iter().sum::<u32>(), 50);
        assert!(stats.shortest_game.unwrap() >= 1);
        assert!(stats.longest_game >= stats.shortest_game.unwrap());
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let config = SimulationConfig::new().with_games(20).with_seed(99);
        assert_eq!(run_simulation(&config).unwrap(), run_simulation(&config).unwrap());
    }

    #[test]
    fn test_simulation_rejects_bad_config() {
        let config = SimulationConfig::new().with_game(KnockOutConfig::new().with_player_count(0));
        assert!(matches!(
            run_simulation(&config),
            Err(KnockOutError::InvalidConfiguration(_))
        ));
    }
}
