//! Economic computation: block rewards, upgrade cost curves and the
//! dungeon damage formula.

use crate::artifacts::equipped_damage_bonus;
use crate::blocks::BlockKind;
use crate::core::constants::{
    COMMON_FLAT_BONUS, DEEP_DEPTH, DEEP_FLAT_BONUS, DEPTH_BONUS_PER_10_LAYERS, MAX_MINER_COUNT,
    MAX_SUPER_MINER_LEVEL, ORE_FLAT_BONUS,
};
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use crate::heroes::{equipped_heroes, Hero, HeroBonus};

/// Sums flat bonuses and multiplies multiplier bonuses across a loadout.
pub fn hero_bonus_totals(heroes: &[&Hero]) -> (f64, f64) {
    let mut flat = 0.0;
    let mut multiplier = 1.0;
    for hero in heroes {
        match hero.bonus {
            HeroBonus::Flat(v) => flat += v,
            HeroBonus::Multiplier(v) => multiplier *= v,
        }
    }
    (flat, multiplier)
}

/// Money awarded for destroying a block.
///
/// `block_depth` is the block's absolute depth (it picks the flat band);
/// `mine_depth` is the grid's scroll depth (it drives the percentage
/// bonus). They differ by the block's layer index.
pub fn compute_reward(
    kind: BlockKind,
    block_depth: u32,
    mine_depth: u32,
    heroes: &[&Hero],
) -> f64 {
    let mut reward = kind.sell_value();
    reward += if block_depth < DEEP_DEPTH {
        if kind.is_common() {
            COMMON_FLAT_BONUS
        } else {
            ORE_FLAT_BONUS
        }
    } else {
        DEEP_FLAT_BONUS
    };

    let depth_bonus = 1.0 + (mine_depth / 10) as f64 * DEPTH_BONUS_PER_10_LAYERS;
    reward *= depth_bonus;

    let (flat, multiplier) = hero_bonus_totals(heroes);
    ((reward + flat) * multiplier).round()
}

/// Damage dealt per dungeon attack: 1 + hero income bonuses treated as
/// combat power, plus artifact damage.
pub fn player_damage(state: &GameState) -> f64 {
    let heroes = equipped_heroes(state);
    let (flat, multiplier) = hero_bonus_totals(&heroes);
    1.0 + flat * multiplier + equipped_damage_bonus(state)
}

/// The seven purchasable upgrade tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradeKind {
    ClickPower,
    MultiMine,
    AutoMine,
    HireMiner,
    MinerPower,
    SuperMiner,
    MinerStamina,
}

impl UpgradeKind {
    pub fn all() -> &'static [UpgradeKind] {
        use UpgradeKind::*;
        &[
            ClickPower, MultiMine, AutoMine, HireMiner, MinerPower, SuperMiner, MinerStamina,
        ]
    }

    pub fn current_level(&self, state: &GameState) -> u32 {
        let u = &state.upgrades;
        match self {
            UpgradeKind::ClickPower => u.click_power,
            UpgradeKind::MultiMine => u.multi_mine_level,
            UpgradeKind::AutoMine => u.auto_mine_level,
            UpgradeKind::HireMiner => u.miner_count,
            UpgradeKind::MinerPower => u.miner_power_level,
            UpgradeKind::SuperMiner => u.super_miner_level,
            UpgradeKind::MinerStamina => u.miner_stamina_level,
        }
    }

    /// Purchase price at a given current level. Exponential curves; the
    /// two tracks that start at level 1 are shifted so the first buy is
    /// the base price.
    pub fn cost_at(&self, level: u32) -> f64 {
        let (base, growth, exponent): (f64, f64, u32) = match self {
            UpgradeKind::ClickPower => (15.0, 1.22, level.saturating_sub(1)),
            UpgradeKind::MultiMine => (450.0, 2.8, level),
            UpgradeKind::AutoMine => (80.0, 2.4, level),
            UpgradeKind::HireMiner => (40.0, 1.55, level),
            UpgradeKind::MinerPower => (150.0, 1.65, level.saturating_sub(1)),
            UpgradeKind::SuperMiner => (1800.0, 3.8, level),
            UpgradeKind::MinerStamina => (250.0, 1.9, level),
        };
        (base * growth.powi(exponent as i32)).ceil()
    }

    pub fn cap(&self) -> Option<u32> {
        match self {
            UpgradeKind::HireMiner => Some(MAX_MINER_COUNT),
            UpgradeKind::SuperMiner => Some(MAX_SUPER_MINER_LEVEL),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            UpgradeKind::ClickPower => "click power",
            UpgradeKind::MultiMine => "multi-mine",
            UpgradeKind::AutoMine => "auto-mine",
            UpgradeKind::HireMiner => "miner crew",
            UpgradeKind::MinerPower => "miner power",
            UpgradeKind::SuperMiner => "super miner",
            UpgradeKind::MinerStamina => "miner stamina",
        }
    }
}

/// Buys one level of an upgrade. Returns the new level.
pub fn purchase_upgrade(state: &mut GameState, kind: UpgradeKind) -> Result<u32, GameError> {
    let level = kind.current_level(state);
    if let Some(cap) = kind.cap() {
        if level >= cap {
            return Err(GameError::CapacityReached {
                what: kind.name(),
                cap,
            });
        }
    }

    let cost = kind.cost_at(level);
    if !state.spend(cost) {
        return Err(GameError::InsufficientFunds {
            needed: cost,
            available: state.resources.money,
        });
    }

    let u = &mut state.upgrades;
    let new_level = match kind {
        UpgradeKind::ClickPower => {
            u.click_power += 1;
            u.click_power
        }
        UpgradeKind::MultiMine => {
            u.multi_mine_level += 1;
            u.multi_mine_level
        }
        UpgradeKind::AutoMine => {
            u.auto_mine_level += 1;
            u.auto_mine_level
        }
        UpgradeKind::HireMiner => {
            u.miner_count += 1;
            u.miner_count
        }
        UpgradeKind::MinerPower => {
            u.miner_power_level += 1;
            u.miner_power_level
        }
        UpgradeKind::SuperMiner => {
            u.super_miner_level += 1;
            u.super_miner_level
        }
        UpgradeKind::MinerStamina => {
            u.miner_stamina_level += 1;
            u.miner_stamina_level
        }
    };
    Ok(new_level)
}
