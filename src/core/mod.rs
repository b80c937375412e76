//! Core game state and the tick loop.

pub mod constants;
pub mod errors;
pub mod game_state;
pub mod tick;

pub use constants::*;
pub use errors::GameError;
pub use game_state::GameState;
pub use tick::{game_tick, TickEvent, TickRuntime};
