//! Knock Out! game implementation.

use std::fmt;

use tracing::{debug, info, warn};

use crate::core::{
    Die, GameRng, KnockOutConfig, KnockOutError, Player, PlayerId, RandomSource, UniformSource,
};
use crate::observer::GameObserver;
use crate::rules::{DiceGame, GameOutcome, GamePhase};

/// A single game of Knock Out!.
///
/// Owns its die and players; borrows its observer for `'o`.
pub struct KnockOut<'o> {
    config: KnockOutConfig,
    die: Die,
    players: Vec<Player>,
    phase: GamePhase,
    turns: u32,
    observer: Option<&'o mut dyn GameObserver>,
}

/// Builder for creating a KnockOut game.
///
/// Without injected parts, the die and the knockout numbers draw from
/// independent streams of one seeded `GameRng`.
#[derive(Debug, Default)]
pub struct KnockOutBuilder {
    config: KnockOutConfig,
    die: Option<Die>,
    knockout_source: Option<Box<dyn RandomSource>>,
}

impl KnockOutBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: KnockOutConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn win_threshold(mut self, threshold: u32) -> Self {
        self.config.win_threshold = threshold;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Use this die instead of building one from the config.
    pub fn die(mut self, die: Die) -> Self {
        self.die = Some(die);
        self
    }

    /// Draw knockout numbers from this source instead of the seeded RNG.
    pub fn knockout_source(mut self, source: impl RandomSource + 'static) -> Self {
        self.knockout_source = Some(Box::new(source));
        self
    }

    /// Build the game.
    ///
    /// Fails with `InvalidConfiguration` before any player is seated if the
    /// config is invalid, or if a knockout number falls outside
    /// `knockout_range`.
    pub fn build<'o>(self) -> Result<KnockOut<'o>, KnockOutError> {
        let mut config = self.config;
        if let Some(die) = &self.die {
            config.die_faces = die.faces();
        }
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        config.seed = Some(rng.seed());

        let die = match self.die {
            Some(die) => die,
            None => Die::new(
                config.die_faces,
                UniformSource::new(config.source_range.clone(), rng.for_context("die"))?,
            )?,
        };

        let mut knockout_source: Box<dyn RandomSource> = match self.knockout_source {
            Some(source) => source,
            None => Box::new(UniformSource::new(
                config.knockout_range.clone(),
                rng.for_context("knockout"),
            )?),
        };

        let players: Vec<Player> = PlayerId::all(config.player_count)
            .map(|id| Player::draw(id, knockout_source.as_mut()))
            .collect();

        if let Some(player) = players
            .iter()
            .find(|p| !config.knockout_range.contains(&p.knockout_number()))
        {
            return Err(KnockOutError::invalid(format!(
                "{} drew knockout number {} outside {}..={}",
                player.id(),
                player.knockout_number(),
                config.knockout_range.start(),
                config.knockout_range.end()
            )));
        }

        debug!(
            players = players.len(),
            die_faces = die.faces(),
            seed = ?config.seed,
            "knock out game built"
        );

        Ok(KnockOut {
            config,
            die,
            players,
            phase: GamePhase::NotStarted,
            turns: 0,
            observer: None,
        })
    }
}

impl<'o> KnockOut<'o> {
    /// Create a game for `player_count` players with default rules.
    pub fn new(player_count: usize) -> Result<Self, KnockOutError> {
        KnockOutBuilder::new().player_count(player_count).build()
    }

    /// Create a game from a configuration.
    pub fn from_config(config: KnockOutConfig) -> Result<Self, KnockOutError> {
        KnockOutBuilder::new().config(config).build()
    }

    pub fn builder() -> KnockOutBuilder {
        KnockOutBuilder::new()
    }

    /// The configuration this game was built from. `seed` is always set.
    pub fn config(&self) -> &KnockOutConfig {
        &self.config
    }

    /// Attach an observer, replacing any previous one.
    pub fn set_observer(&mut self, observer: &'o mut dyn GameObserver) {
        self.observer = Some(observer);
    }

    /// Detach the observer.
    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    /// Play the game to completion.
    ///
    /// A game can only be played once. Later calls return
    /// `RepeatedPlayInvocation` without rolling or notifying the observer.
    pub fn play(&mut self) -> Result<GameOutcome, KnockOutError> {
        if self.phase != GamePhase::NotStarted {
            warn!("play() called on a game that has already been played");
            return Err(KnockOutError::RepeatedPlayInvocation);
        }
        self.phase = GamePhase::InProgress;

        // The observer is detached while it runs so it can borrow the game.
        let mut observer = self.observer.take();

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_game_start(&*self);
        }

        let outcome = self.run_rounds(&mut observer);
        self.phase = GamePhase::Ended(outcome.clone());

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_game_end(&*self);
        }

        self.observer = observer;
        Ok(outcome)
    }

    fn run_rounds(&mut self, observer: &mut Option<&'o mut dyn GameObserver>) -> GameOutcome {
        loop {
            for index in 0..self.players.len() {
                if self.players[index].is_eliminated() {
                    continue;
                }
                if let Some(outcome) = self.take_turn(index, observer) {
                    return outcome;
                }
            }
        }
    }

    /// Resolve one turn. Returns the outcome if this turn ends the game.
    fn take_turn(
        &mut self,
        index: usize,
        observer: &mut Option<&'o mut dyn GameObserver>,
    ) -> Option<GameOutcome> {
        let roll = self.die.roll_pair();
        self.turns += 1;
        debug!(player = %self.players[index].id(), roll, turn = self.turns, "turn");

        if let Some(obs) = observer.as_deref_mut() {
            obs.on_turn(&*self, roll);
        }

        let threshold = self.config.win_threshold;
        let player = &mut self.players[index];

        if roll == player.knockout_number() {
            player.eliminate();
            info!("{} is knocked out by rolling {}", player.id(), roll);

            if self.players.iter().all(Player::is_eliminated) {
                info!("All players have been knocked out");
                return Some(GameOutcome::AllEliminated);
            }
        } else {
            player.add_to_score(roll);

            if player.score() >= threshold {
                info!("{} has won with a final score of {}", player.id(), player.score());
                return Some(GameOutcome::ScoreThresholdReached {
                    winner: player.id(),
                    final_score: player.score(),
                });
            }
        }

        None
    }
}

impl DiceGame for KnockOut<'_> {
    fn name(&self) -> &str {
        "Knock Out!"
    }

    fn die(&self) -> &Die {
        &self.die
    }

    fn players(&self) -> &[Player] {
        &self.players
    }

    fn phase(&self) -> &GamePhase {
        &self.phase
    }

    fn turns_taken(&self) -> u32 {
        self.turns
    }
}

impl fmt::Debug for KnockOut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KnockOut")
            .field("config", &self.config)
            .field("die", &self.die)
            .field("players", &self.players)
            .field("phase", &self.phase)
            .field("turns", &self.turns)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
