pub mod logic;
pub mod types;

pub use logic::{abandon_run, attack, claim_rewards, continue_descent, start_run, tick_run};
pub use types::{DungeonEvent, DungeonRun, RewardLedger, RunStatus};
