//! Game balance simulator for Monte Carlo analysis.
//!
//! Run many simulated playthroughs to analyze:
//! - Mining pace and depth progression
//! - Money income versus upgrade pricing
//! - Gacha spend and collection growth
//! - Dungeon floor reach
//!
//! The simulator drives the real engines (`core::tick`, `mine`,
//! `gacha`, `dungeon`), so its numbers match actual gameplay.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
