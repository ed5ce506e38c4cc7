//! Batch simulation.
//!
//! Runs many independent games from one master seed and aggregates win
//! counts and game lengths. Useful for checking how the knockout range and
//! win threshold shape a game.

mod runner;

pub use runner::{run_simulation, SimulationConfig, SimulationStats};
