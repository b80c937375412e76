// Mine grid dimensions
pub const MINE_COLS: usize = 8;
pub const MINE_ROWS: usize = 8;
pub const MINE_HEIGHT: usize = 10;

// Depth thresholds
pub const DEEP_DEPTH: u32 = 100;
pub const DEEP_HEALTH_BONUS: f64 = 5000.0;
pub const DEEP_REALM_DEPTH: u32 = 250;
pub const DEEP_REALM_FILLER_CHANCE: f64 = 0.99;

// Ore spawn chances
pub const ORE_IN_RANGE_CHANCE: f64 = 0.01;
pub const ORE_OUT_OF_RANGE_CHANCE: f64 = 0.00006;
pub const DEEP_ORE_CHANCE: f64 = 0.01;
pub const SHALLOW_STONE_CHANCE: f64 = 0.6;

// Selling bonuses
pub const COMMON_FLAT_BONUS: f64 = 50.0;
pub const ORE_FLAT_BONUS: f64 = 300.0;
pub const DEEP_FLAT_BONUS: f64 = 400.0;
pub const DEPTH_BONUS_PER_10_LAYERS: f64 = 0.01;

// Splash damage (multi-mine / super-miner)
pub const SPLASH_POWER_FACTOR: f64 = 0.25;

// Auto-mine and miner crew timing
pub const AUTO_MINE_RATE_PER_LEVEL: f64 = 1.3;
pub const MINER_BASE_DIG_RATE: f64 = 1.3;
pub const MINER_DIG_RATE_PER_STAMINA: f64 = 0.3;
pub const MINER_REST_BASE_ODDS: f64 = 5.0;
pub const MINER_REST_ODDS_PER_STAMINA: f64 = 0.5;
pub const MINER_REST_BASE_SECONDS: f64 = 3.0;
pub const MINER_REST_REDUCTION_PER_STAMINA: f64 = 0.5;
pub const MINER_MIN_REST_SECONDS: f64 = 0.5;

// Upgrade caps
pub const MAX_MINER_COUNT: u32 = 5;
pub const MAX_SUPER_MINER_LEVEL: u32 = 5;

// Equipment caps
pub const MAX_EQUIPPED_HEROES: usize = 3;
pub const MAX_EQUIPPED_ARTIFACTS: usize = 2;

// Gacha
pub const PITY_CEILING: u32 = 80;

// Demolition agent
pub const AGENT_COST: f64 = 50_000.0;
pub const AGENT_COOLDOWN_SECONDS: f64 = 60.0;

// Dungeon
pub const DUNGEON_BASE_ENEMY_HP: f64 = 300.0;
pub const DUNGEON_BOSS_FLOOR_INTERVAL: u32 = 5;
pub const DUNGEON_BOSS_HP_GROWTH: f64 = 1.30;
pub const DUNGEON_NORMAL_HP_GROWTH: f64 = 1.07;
pub const DUNGEON_NORMAL_TIMER_SECONDS: f64 = 10.0;
pub const DUNGEON_BOSS_TIMER_SECONDS: f64 = 15.0;
pub const DUNGEON_COOLDOWN_SECONDS: f64 = 60.0;
pub const PHASE_BASE_MONEY: f64 = 100_000.0;
pub const PHASE_MONEY_GROWTH: f64 = 1.20;
pub const PHASE_BASE_ARTIFACT_CHANCE: f64 = 0.05;
pub const PHASE_ARTIFACT_CHANCE_STEP: f64 = 0.01;
pub const PHASE_SHARD_CHANCE: f64 = 0.05;
pub const PHASE_SHARD_PITY_INTERVAL: u32 = 5;
pub const PHASE_AUTO_CLAIM_INTERVAL: u32 = 25;

// Save system
pub const SAVE_VERSION_MAGIC: u64 = 0x444545504D494E45; // "DEEPMINE"
pub const AUTOSAVE_INTERVAL_SECONDS: u64 = 30;
