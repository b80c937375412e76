//! Dungeon run state. A run is transient: it lives only for the session
//! and is never written to disk, so abandoning the game mid-run forfeits
//! everything that was not banked.

/// Rewards accumulated during a run. `banked` holds a snapshot of this
/// ledger taken after each boss kill; `total` keeps growing until the
/// player claims or loses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RewardLedger {
    pub money: f64,
    pub shards: u64,
    pub artifacts: Vec<String>,
}

impl RewardLedger {
    pub fn is_empty(&self) -> bool {
        self.money == 0.0 && self.shards == 0 && self.artifacts.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Combat timer is running; attacks land on the current enemy.
    Fighting,
    /// A boss just fell; the player chooses to bank-and-leave or press on.
    PhaseClear,
}

#[derive(Debug, Clone)]
pub struct DungeonRun {
    pub floor: u32,
    /// Damage per attack, frozen when the run starts. Equipment changes
    /// mid-run do not affect an ongoing descent.
    pub player_damage: f64,
    pub enemy_hp: f64,
    pub max_enemy_hp: f64,
    /// Seconds left to defeat the current enemy.
    pub timer: f64,
    pub status: RunStatus,
    pub last_completed_phase: u32,
    pub banked: RewardLedger,
    pub total: RewardLedger,
}

impl DungeonRun {
    pub fn is_boss_floor(&self) -> bool {
        self.floor % crate::core::constants::DUNGEON_BOSS_FLOOR_INTERVAL == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DungeonEvent {
    EnemyDamaged { hp: f64, max_hp: f64 },
    FloorCleared { floor: u32 },
    PhaseCleared { phase: u32, money: f64, shards: u64, artifact: Option<String> },
    RewardsClaimed { money: f64, shards: u64, artifacts: Vec<String> },
    RunLost { floor: u32, banked_money: f64, banked_shards: u64 },
    RunEnded { highest_floor: u32 },
}
