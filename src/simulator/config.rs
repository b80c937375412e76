//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated seconds per run
    pub duration_seconds: f64,

    /// Simulation step size in seconds
    pub tick_seconds: f64,

    /// Player clicks per second on the mine
    pub clicks_per_second: f64,

    /// Whether the policy buys upgrades greedily
    pub buy_upgrades: bool,

    /// Whether the policy spends spare money on summons
    pub simulate_gacha: bool,

    /// Whether the policy runs the dungeon whenever it is available
    pub simulate_dungeon: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            duration_seconds: 3600.0,
            tick_seconds: 0.1,
            clicks_per_second: 4.0,
            buy_upgrades: true,
            simulate_gacha: true,
            simulate_dungeon: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for checking early-game mining pace
    pub fn mining_pace_test() -> Self {
        Self {
            num_runs: 50,
            duration_seconds: 600.0,
            simulate_gacha: false,
            simulate_dungeon: false,
            ..Default::default()
        }
    }

    /// Quick config for gacha economy analysis
    pub fn gacha_analysis(num_runs: u32) -> Self {
        Self {
            num_runs,
            simulate_dungeon: false,
            ..Default::default()
        }
    }
}
