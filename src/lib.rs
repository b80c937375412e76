//! Deepmine - Idle Mining Game Core
//!
//! Simulation engines for a voxel idle miner: a scrolling block grid,
//! an upgrade economy, hero summons with pity, a risk-banking dungeon
//! and checksummed saves. Everything is headless and deterministic
//! under a seeded RNG, so the same crate backs both gameplay and the
//! balance simulator.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod artifacts;
pub mod blocks;
pub mod build_info;
pub mod codes;
pub mod core;
pub mod dungeon;
pub mod economy;
pub mod gacha;
pub mod heroes;
pub mod mine;
pub mod save;
pub mod simulator;

pub use crate::core::game_state::GameState;
pub use crate::core::GameError;
