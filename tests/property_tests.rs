//! Property tests over seeds, player counts and scripted dice.

use proptest::prelude::*;

use knockout_dice::{
    DiceGame, Die, GameObserver, GameOutcome, KnockOut, KnockOutConfig, SequenceSource,
};

/// Checks score monotonicity and permanent elimination at every turn.
#[derive(Default)]
struct InvariantChecker {
    last: Vec<(u32, bool)>,
    starts: u32,
    turns: u32,
    ends: u32,
    violations: Vec<String>,
}

impl InvariantChecker {
    fn check(&mut self, game: &dyn DiceGame) {
        let now: Vec<_> = game
            .players()
            .iter()
            .map(|p| (p.score(), p.is_eliminated()))
            .collect();

        for (i, (before, after)) in self.last.iter().zip(&now).enumerate() {
            if after.0 < before.0 {
                self.violations.push(format!("player {} score went down", i + 1));
            }
            if before.1 && !after.1 {
                self.violations.push(format!("player {} came back", i + 1));
            }
        }
        self.last = now;
    }
}

impl GameObserver for InvariantChecker {
    fn on_game_start(&mut self, game: &dyn DiceGame) {
        self.starts += 1;
        self.check(game);
    }

    fn on_turn(&mut self, game: &dyn DiceGame, roll: u32) {
        if self.starts != 1 || self.ends != 0 {
            self.violations.push("turn outside start/end".to_string());
        }
        if !(2..=2 * game.die().faces()).contains(&roll) {
            self.violations.push(format!("roll {} out of range", roll));
        }
        self.turns += 1;
        self.check(game);
    }

    fn on_game_end(&mut self, game: &dyn DiceGame) {
        self.ends += 1;
        self.check(game);
    }
}

proptest! {
    #[test]
    fn construction_seats_every_player(player_count in 1usize..50, seed in any::<u64>()) {
        let game = KnockOut::builder().player_count(player_count).seed(seed).build().unwrap();

        prop_assert_eq!(game.players().len(), player_count);
        for (i, player) in game.players().iter().enumerate() {
            prop_assert_eq!(player.id().0 as usize, i + 1);
            prop_assert!((6..=9).contains(&player.knockout_number()));
        }
    }

    #[test]
    fn die_rolls_stay_on_the_faces(
        faces in 1u32..40,
        values in prop::collection::vec(any::<u32>(), 1..50),
    ) {
        let mut die = Die::new(faces, SequenceSource::new(values.clone())).unwrap();
        for _ in 0..values.len() * 2 {
            let roll = die.roll();
            prop_assert!(roll >= 1 && roll <= faces);
        }
    }

    #[test]
    fn seeded_games_end_with_invariants_intact(player_count in 1usize..10, seed in any::<u64>()) {
        let mut checker = InvariantChecker::default();
        let turns;
        {
            let mut game = KnockOut::builder().player_count(player_count).seed(seed).build().unwrap();
            game.set_observer(&mut checker);
            let outcome = game.play().unwrap();
            turns = game.turns_taken();

            match outcome {
                GameOutcome::AllEliminated => {
                    prop_assert!(game.players().iter().all(|p| p.is_eliminated()));
                }
                GameOutcome::ScoreThresholdReached { winner, final_score } => {
                    prop_assert!(final_score >= 100);
                    prop_assert_eq!(game.player(winner).map(|p| p.score()), Some(final_score));
                }
            }
        }

        prop_assert!(checker.violations.is_empty(), "{:?}", checker.violations);
        prop_assert_eq!(checker.starts, 1);
        prop_assert_eq!(checker.ends, 1);
        prop_assert_eq!(checker.turns, turns);
    }

    #[test]
    fn scripted_games_always_terminate(
        player_count in 1usize..6,
        faces in 1u32..12,
        die_values in prop::collection::vec(0u32..1000, 1..20),
        knockouts in prop::collection::vec(2u32..=24, 1..6),
        win_threshold in 1u32..200,
    ) {
        let config = KnockOutConfig::new()
            .with_player_count(player_count)
            .with_knockout_range(2..=24)
            .with_win_threshold(win_threshold);
        let mut game = KnockOut::builder()
            .config(config)
            .die(Die::new(faces, SequenceSource::new(die_values)).unwrap())
            .knockout_source(SequenceSource::new(knockouts))
            .build()
            .unwrap();

        let outcome = game.play().unwrap();

        // Every turn either eliminates a player or adds at least 2 points.
        let bound = player_count as u32 * (win_threshold / 2 + 1);
        prop_assert!(game.turns_taken() <= bound);
        prop_assert_eq!(game.outcome(), Some(&outcome));
    }
}
