pub mod generation;
pub mod logic;
pub mod types;

pub use logic::{agent_strike, buy_agent, dig};
pub use types::{Block, DigSource, MineEvent, MineGrid};
