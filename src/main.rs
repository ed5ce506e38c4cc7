//! Knock Out! driver.
//!
//! Plays one game with a turn tracker attached, or a batch of seeded games
//! when `--games` is greater than 1.
//!
//! ```text
//! knockout [--players N] [--games N] [--seed N]
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use knockout_dice::{
    run_simulation, DiceGame, GameOutcome, GameRng, KnockOut, KnockOutConfig, PlayerId,
    SimulationConfig, TurnTracker,
};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    players: usize,
    games: usize,
    seed: Option<u64>,
}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, String> {
    match value.map(|v| v.parse()) {
        Some(Ok(parsed)) => Ok(parsed),
        _ => Err(format!("Invalid {} value: {:?}", flag, value)),
    }
}

/// Parse `--flag value` pairs. `args` excludes the program name.
fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut parsed = Args {
        players: 5,
        games: 1,
        seed: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--players" => {
                i += 1;
                parsed.players = parse_value("--players", args.get(i))?;
            }
            "--games" => {
                i += 1;
                parsed.games = parse_value("--games", args.get(i))?;
            }
            "--seed" => {
                i += 1;
                parsed.seed = Some(parse_value("--seed", args.get(i))?);
            }
            other => return Err(format!("Unknown argument: {}", other)),
        }
        i += 1;
    }

    if parsed.games == 0 {
        return Err("--games must be at least 1".to_string());
    }

    Ok(parsed)
}

/// The batch master seed: the one given, or a fresh one from OS entropy.
fn master_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| GameRng::from_entropy().seed())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let raw: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    let mut config = KnockOutConfig::new().with_player_count(args.players);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if args.games > 1 {
        simulate(config, args.games, master_seed(args.seed));
    } else {
        play_one(config);
    }
}

fn play_one(config: KnockOutConfig) {
    let mut tracker = TurnTracker::new();
    let mut game = match KnockOut::from_config(config) {
        Ok(game) => game,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Seed: {:?}", game.config().seed);
    game.set_observer(&mut tracker);

    match game.play() {
        Ok(GameOutcome::AllEliminated) => info!("Nobody won: every player was knocked out"),
        Ok(GameOutcome::ScoreThresholdReached { winner, final_score }) => {
            info!("{} wins with {} points", winner, final_score)
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }

    for player in game.players() {
        info!(
            "{}: knockout {}, score {}{}",
            player.id(),
            player.knockout_number(),
            player.score(),
            if player.is_eliminated() { " (knocked out)" } else { "" }
        );
    }
}

fn simulate(game: KnockOutConfig, games: usize, seed: u64) {
    info!("Master seed: {}", seed);
    let player_count = game.player_count;
    let config = SimulationConfig::new()
        .with_games(games)
        .with_game(game)
        .with_seed(seed);

    let stats = match run_simulation(&config) {
        Ok(stats) => stats,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    info!("Games: {}", stats.games);
    info!("All knocked out: {}", stats.all_eliminated);
    info!(
        "Turns: avg {:.1}, min {}, max {}",
        stats.average_turns(),
        stats.shortest_game.unwrap_or(0),
        stats.longest_game
    );
    for id in PlayerId::all(player_count) {
        info!("{} win rate: {:.1}%", id, stats.win_rate(id) * 100.0);
    }
}
