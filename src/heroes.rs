//! Hero catalog, rarity tiers and equip management.
//!
//! Heroes are earned from gacha banners and boost mining income: a hero
//! carries either a flat per-block bonus or a multiplier over the whole
//! reward, never both.

use crate::core::constants::MAX_EQUIPPED_HEROES;
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rarity tiers, declared lowest to highest so `Ord` matches draw quality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legend,
    Mythic,
    Secret,
}

impl Rarity {
    /// All tiers in the order the gacha weight walk visits them.
    pub fn all() -> &'static [Rarity] {
        &[
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legend,
            Rarity::Mythic,
            Rarity::Secret,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legend => "Legend",
            Rarity::Mythic => "Mythic",
            Rarity::Secret => "Secret",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A hero's income bonus. Exactly one variant per hero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeroBonus {
    /// Added to the reward after the depth multiplier.
    Flat(f64),
    /// Multiplies the whole reward. Always >= 1 in the catalog.
    Multiplier(f64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hero {
    pub id: &'static str,
    pub name: &'static str,
    pub rarity: Rarity,
    pub bonus: HeroBonus,
}

impl Hero {
    /// Loadout score used by quick-equip. Multipliers dominate flat
    /// bonuses so they are always preferred when available.
    pub fn power(&self) -> f64 {
        match self.bonus {
            HeroBonus::Flat(v) => v,
            HeroBonus::Multiplier(v) => 10_000.0 + v * 100.0,
        }
    }
}

/// The full hero roster across all banners.
#[rustfmt::skip]
pub fn all_heroes() -> &'static [Hero] {
    use HeroBonus::{Flat, Multiplier};
    use Rarity::*;
    &[
        // Banner 1: Emberfall
        Hero { id: "flint", name: "Flint", rarity: Common, bonus: Flat(2.0) },
        Hero { id: "sable", name: "Sable", rarity: Common, bonus: Flat(2.0) },
        Hero { id: "garnet", name: "Garnet", rarity: Rare, bonus: Flat(5.0) },
        Hero { id: "orin", name: "Orin", rarity: Rare, bonus: Flat(5.0) },
        Hero { id: "thorne", name: "Thorne", rarity: Epic, bonus: Flat(10.0) },
        Hero { id: "isolde", name: "Isolde", rarity: Legend, bonus: Flat(20.0) },
        Hero { id: "aurelius", name: "Aurelius", rarity: Mythic, bonus: Multiplier(1.5) },
        Hero { id: "nyx", name: "Nyx", rarity: Secret, bonus: Flat(50.0) },
        // Banner 2: All Stars
        Hero { id: "borin", name: "Borin", rarity: Common, bonus: Flat(15.0) },
        Hero { id: "tessa", name: "Tessa", rarity: Common, bonus: Flat(17.0) },
        Hero { id: "ragnar", name: "Ragnar", rarity: Rare, bonus: Flat(25.0) },
        Hero { id: "mira", name: "Mira", rarity: Rare, bonus: Flat(28.0) },
        Hero { id: "kael", name: "Kael", rarity: Epic, bonus: Flat(40.0) },
        Hero { id: "sylas", name: "Sylas", rarity: Legend, bonus: Flat(60.0) },
        Hero { id: "ignatius", name: "Ignatius", rarity: Mythic, bonus: Multiplier(2.0) },
        Hero { id: "vesper", name: "Vesper", rarity: Secret, bonus: Flat(500.0) },
        // Banner 3: Ultimate Saga
        Hero { id: "durga", name: "Durga", rarity: Common, bonus: Flat(60.0) },
        Hero { id: "hollis", name: "Hollis", rarity: Common, bonus: Flat(62.0) },
        Hero { id: "lazlo", name: "Lazlo", rarity: Rare, bonus: Flat(84.0) },
        Hero { id: "seraphine", name: "Seraphine", rarity: Epic, bonus: Flat(120.0) },
        Hero { id: "aldric", name: "Aldric", rarity: Legend, bonus: Flat(240.0) },
        Hero { id: "morwen", name: "Morwen", rarity: Legend, bonus: Flat(240.0) },
        Hero { id: "pyrrhus", name: "Pyrrhus", rarity: Mythic, bonus: Multiplier(2.5) },
        Hero { id: "umbra", name: "Umbra", rarity: Secret, bonus: Flat(1000.0) },
        // Banner 4: Titan Era
        Hero { id: "petra", name: "Petra", rarity: Common, bonus: Flat(70.0) },
        Hero { id: "galen", name: "Galen", rarity: Common, bonus: Flat(75.0) },
        Hero { id: "rook", name: "Rook", rarity: Rare, bonus: Flat(90.0) },
        Hero { id: "wren", name: "Wren", rarity: Rare, bonus: Flat(95.0) },
        Hero { id: "castor", name: "Castor", rarity: Rare, bonus: Flat(100.0) },
        Hero { id: "onyxia", name: "Onyxia", rarity: Epic, bonus: Flat(150.0) },
        Hero { id: "stellan", name: "Stellan", rarity: Legend, bonus: Flat(300.0) },
        Hero { id: "branwen", name: "Branwen", rarity: Legend, bonus: Flat(320.0) },
        Hero { id: "titania", name: "Titania", rarity: Mythic, bonus: Multiplier(3.0) },
        Hero { id: "erebus", name: "Erebus", rarity: Secret, bonus: Flat(1500.0) },
        Hero { id: "nocturne", name: "Nocturne", rarity: Secret, bonus: Flat(1200.0) },
    ]
}

/// Catalog lookup. Missing ids (stale save data) return `None`.
pub fn hero_by_id(id: &str) -> Option<&'static Hero> {
    all_heroes().iter().find(|h| h.id == id)
}

/// Equips a hero into one of the three slots.
///
/// Equipping an unowned hero is a silent no-op (the UI never offers it,
/// but a stale click must not corrupt state).
pub fn equip_hero(state: &mut GameState, id: &str) -> Result<(), GameError> {
    if !state.heroes.collection.iter().any(|h| h == id) {
        return Ok(());
    }
    if state.heroes.equipped.iter().any(|h| h == id) {
        return Ok(());
    }
    if state.heroes.equipped.len() >= MAX_EQUIPPED_HEROES {
        return Err(GameError::CapacityReached {
            what: "equipped heroes",
            cap: MAX_EQUIPPED_HEROES as u32,
        });
    }
    state.heroes.equipped.push(id.to_string());
    Ok(())
}

pub fn unequip_hero(state: &mut GameState, id: &str) {
    state.heroes.equipped.retain(|h| h != id);
}

/// Resolves the currently equipped hero descriptors, skipping ids the
/// catalog no longer knows.
pub fn equipped_heroes(state: &GameState) -> Vec<&'static Hero> {
    state
        .heroes
        .equipped
        .iter()
        .filter_map(|id| hero_by_id(id))
        .collect()
}

/// Picks the loadout (up to three owned heroes) that maximizes
/// `flat total * multiplier product` and equips it, replacing the current
/// loadout. Exhaustive over all combinations; the roster is small.
pub fn quick_equip_heroes(state: &mut GameState) {
    let owned: Vec<&'static Hero> = state
        .heroes
        .collection
        .iter()
        .filter_map(|id| hero_by_id(id))
        .collect();
    if owned.is_empty() {
        return;
    }

    let mut best: Vec<&'static Hero> = Vec::new();
    let mut best_score = 0.0;
    for k in 1..=MAX_EQUIPPED_HEROES.min(owned.len()) {
        for combo in combinations(&owned, k) {
            let mut flat = 0.0;
            let mut mult = 1.0;
            for hero in &combo {
                match hero.bonus {
                    HeroBonus::Flat(v) => flat += v,
                    HeroBonus::Multiplier(v) => mult *= v,
                }
            }
            let score = flat * mult;
            if score > best_score {
                best_score = score;
                best = combo;
            }
        }
    }

    state.heroes.equipped = best.iter().map(|h| h.id.to_string()).collect();
}

fn combinations<'a>(items: &[&'a Hero], k: usize) -> Vec<Vec<&'a Hero>> {
    fn rec<'a>(
        items: &[&'a Hero],
        k: usize,
        start: usize,
        prefix: &mut Vec<&'a Hero>,
        out: &mut Vec<Vec<&'a Hero>>,
    ) {
        if prefix.len() == k {
            out.push(prefix.clone());
            return;
        }
        for i in start..items.len() {
            prefix.push(items[i]);
            rec(items, k, i + 1, prefix, out);
            prefix.pop();
        }
    }
    let mut out = Vec::new();
    let mut prefix = Vec::new();
    rec(items, k, 0, &mut prefix, &mut out);
    out
}
