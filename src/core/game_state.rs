//! The persisted progression aggregate mutated by every engine.
//!
//! All fields are serde-defaulted so snapshots written by older versions
//! keep loading: unknown fields are ignored, missing fields fall back to
//! their defaults. An in-progress dungeon run is deliberately never
//! serialized.

use crate::core::constants::PITY_CEILING;
use crate::dungeon::types::DungeonRun;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameState {
    pub profile_id: String,
    pub resources: Resources,
    pub stats: Stats,
    pub upgrades: Upgrades,
    pub heroes: HeroInventory,
    pub artifacts: ArtifactInventory,
    pub pity_counters: HashMap<String, u32>,
    pub agent: AgentState,
    pub dungeon: DungeonState,
    pub used_codes: Vec<String>,
    /// Number of layers fully cleared and scrolled away. Monotonic.
    pub depth: u32,
    pub active_banner: Option<String>,
    pub last_save_time: i64,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds money and tracks it as earned. Negative deltas never go
    /// through this path; use [`GameState::spend`].
    pub fn earn_money(&mut self, amount: f64) {
        debug_assert!(amount >= 0.0);
        self.resources.money += amount;
        self.stats.money_earned += amount;
    }

    /// Deducts `cost` if affordable, tracking it as spent. Returns false
    /// (state unchanged) otherwise.
    pub fn spend(&mut self, cost: f64) -> bool {
        if self.resources.money < cost {
            return false;
        }
        self.resources.money = (self.resources.money - cost).max(0.0);
        self.stats.money_spent += cost;
        true
    }

    /// Current pity countdown for a banner, seeded at the ceiling on
    /// first access.
    pub fn pity_counter(&self, banner_id: &str) -> u32 {
        self.pity_counters
            .get(banner_id)
            .copied()
            .unwrap_or(PITY_CEILING)
    }

    pub fn set_pity_counter(&mut self, banner_id: &str, value: u32) {
        self.pity_counters.insert(banner_id.to_string(), value);
    }

    pub fn record_mined_block(&mut self, kind_id: &str) {
        self.stats.blocks_mined += 1;
        *self
            .stats
            .mined_block_counts
            .entry(kind_id.to_string())
            .or_insert(0) += 1;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            profile_id: Uuid::new_v4().to_string(),
            resources: Resources::default(),
            stats: Stats::default(),
            upgrades: Upgrades::default(),
            heroes: HeroInventory::default(),
            artifacts: ArtifactInventory::default(),
            pity_counters: default_pity_counters(),
            agent: AgentState::default(),
            dungeon: DungeonState::default(),
            used_codes: Vec::new(),
            depth: 0,
            active_banner: None,
            last_save_time: 0,
        }
    }
}

fn default_pity_counters() -> HashMap<String, u32> {
    crate::gacha::banners::all_banners()
        .iter()
        .map(|b| (b.id.to_string(), PITY_CEILING))
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Resources {
    pub money: f64,
    pub shards: u64,
}

impl Default for Resources {
    fn default() -> Self {
        // New saves start with seed capital so the first banner is reachable.
        Self {
            money: 200_000.0,
            shards: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub time_played_seconds: f64,
    pub blocks_mined: u64,
    pub money_earned: f64,
    pub money_spent: f64,
    /// Destroyed-block tallies keyed by block kind id.
    pub mined_block_counts: HashMap<String, u64>,
    pub gacha_pulls: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Upgrades {
    pub click_power: u32,
    pub multi_mine_level: u32,
    pub auto_mine_level: u32,
    pub miner_count: u32,
    pub miner_power_level: u32,
    pub super_miner_level: u32,
    pub miner_stamina_level: u32,
}

impl Default for Upgrades {
    fn default() -> Self {
        Self {
            click_power: 1,
            multi_mine_level: 0,
            auto_mine_level: 0,
            miner_count: 0,
            miner_power_level: 1,
            super_miner_level: 0,
            miner_stamina_level: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroInventory {
    pub collection: Vec<String>,
    pub equipped: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactInventory {
    pub collection: Vec<String>,
    pub equipped: Vec<String>,
}

/// The demolition specialist: a one-shot block destroyer on a cooldown.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentState {
    pub owned: bool,
    pub cooldown: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonState {
    pub highest_floor: u32,
    pub cooldown: f64,
    /// In-progress run. Excluded from snapshots: a reload forfeits the run.
    #[serde(skip)]
    pub current_run: Option<DungeonRun>,
}
