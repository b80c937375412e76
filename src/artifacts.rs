//! Artifact catalog and equip management.
//!
//! Artifacts drop from dungeon boss phases and add flat damage to the
//! dungeon attack.

use crate::core::constants::MAX_EQUIPPED_ARTIFACTS;
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use crate::heroes::Rarity;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Artifact {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub damage_bonus: f64,
}

#[rustfmt::skip]
pub fn all_artifacts() -> &'static [Artifact] {
    use Rarity::*;
    &[
        Artifact { id: "rusty_sword", name: "Rusty Sword", rarity: Common, damage_bonus: 2.0 },
        Artifact { id: "wooden_shield", name: "Wooden Shield", rarity: Common, damage_bonus: 1.0 },
        Artifact { id: "iron_sword", name: "Iron Sword", rarity: Rare, damage_bonus: 5.0 },
        Artifact { id: "magic_ring", name: "Magic Ring", rarity: Epic, damage_bonus: 10.0 },
        Artifact { id: "dragon_scale", name: "Dragon Scale", rarity: Legend, damage_bonus: 25.0 },
    ]
}

pub fn artifact_by_id(id: &str) -> Option<&'static Artifact> {
    all_artifacts().iter().find(|a| a.id == id)
}

/// Equips an artifact into one of the two slots. Unowned or already
/// equipped ids are silent no-ops.
pub fn equip_artifact(state: &mut GameState, id: &str) -> Result<(), GameError> {
    if !state.artifacts.collection.iter().any(|a| a == id) {
        return Ok(());
    }
    if state.artifacts.equipped.iter().any(|a| a == id) {
        return Ok(());
    }
    if state.artifacts.equipped.len() >= MAX_EQUIPPED_ARTIFACTS {
        return Err(GameError::CapacityReached {
            what: "equipped artifacts",
            cap: MAX_EQUIPPED_ARTIFACTS as u32,
        });
    }
    state.artifacts.equipped.push(id.to_string());
    Ok(())
}

pub fn unequip_artifact(state: &mut GameState, id: &str) {
    state.artifacts.equipped.retain(|a| a != id);
}

/// Total flat damage from equipped artifacts, skipping unknown ids.
pub fn equipped_damage_bonus(state: &GameState) -> f64 {
    state
        .artifacts
        .equipped
        .iter()
        .filter_map(|id| artifact_by_id(id))
        .map(|a| a.damage_bonus)
        .sum()
}
