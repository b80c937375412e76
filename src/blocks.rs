//! Static block catalog: every minable block kind with its base stats.
//!
//! Health and sell values are the game's primary balance levers; the
//! spawn-depth bands that decide where each ore appears live in
//! [`crate::mine::generation`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Every block kind that can appear in the mine grid.
///
/// `Voidstone` is the deep-realm filler that replaces ordinary stone
/// below the deep-realm threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    Copper,
    Coal,
    Lapis,
    Gold,
    Ruby,
    Emerald,
    Rossara,
    Diamond,
    Obsidian,
    Crystal,
    Uranious,
    Bonreus,
    Darkium,
    Voidstone,
}

impl BlockKind {
    /// All kinds, in catalog order.
    pub fn all() -> &'static [BlockKind] {
        use BlockKind::*;
        &[
            Grass, Dirt, Stone, Copper, Coal, Lapis, Gold, Ruby, Emerald, Rossara, Diamond,
            Obsidian, Crystal, Uranious, Bonreus, Darkium, Voidstone,
        ]
    }

    /// Stable string id used in save files and stat counters.
    pub fn id(&self) -> &'static str {
        match self {
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Stone => "stone",
            BlockKind::Copper => "copper",
            BlockKind::Coal => "coal",
            BlockKind::Lapis => "lapis",
            BlockKind::Gold => "gold",
            BlockKind::Ruby => "ruby",
            BlockKind::Emerald => "emerald",
            BlockKind::Rossara => "rossara",
            BlockKind::Diamond => "diamond",
            BlockKind::Obsidian => "obsidian",
            BlockKind::Crystal => "crystal",
            BlockKind::Uranious => "uranious",
            BlockKind::Bonreus => "bonreus",
            BlockKind::Darkium => "darkium",
            BlockKind::Voidstone => "voidstone",
        }
    }

    /// Reverse of [`BlockKind::id`]. Unknown ids resolve to `None` so stale
    /// save data is skipped rather than crashing.
    pub fn from_id(id: &str) -> Option<BlockKind> {
        BlockKind::all().iter().copied().find(|k| k.id() == id)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BlockKind::Grass => "Grass",
            BlockKind::Dirt => "Dirt",
            BlockKind::Stone => "Stone",
            BlockKind::Copper => "Copper",
            BlockKind::Coal => "Coal",
            BlockKind::Lapis => "Lapis",
            BlockKind::Gold => "Gold",
            BlockKind::Ruby => "Ruby",
            BlockKind::Emerald => "Emerald",
            BlockKind::Rossara => "Rossara",
            BlockKind::Diamond => "Diamond",
            BlockKind::Obsidian => "Obsidian",
            BlockKind::Crystal => "Crystal",
            BlockKind::Uranious => "Uranious",
            BlockKind::Bonreus => "Bonreus",
            BlockKind::Darkium => "Darkium",
            BlockKind::Voidstone => "Voidstone",
        }
    }

    /// Hit points before any depth scaling is applied.
    pub fn base_health(&self) -> f64 {
        match self {
            BlockKind::Grass => 54.0,
            BlockKind::Dirt => 36.0,
            BlockKind::Stone => 50.0,
            BlockKind::Copper => 180.0,
            BlockKind::Coal => 288.0,
            BlockKind::Lapis => 432.0,
            BlockKind::Gold => 720.0,
            BlockKind::Ruby => 1080.0,
            BlockKind::Emerald => 1440.0,
            BlockKind::Rossara => 2160.0,
            BlockKind::Diamond => 2880.0,
            BlockKind::Obsidian => 7200.0,
            BlockKind::Crystal => 7000.0,
            BlockKind::Uranious => 8000.0,
            BlockKind::Bonreus => 9000.0,
            BlockKind::Darkium => 11000.0,
            BlockKind::Voidstone => 120.0,
        }
    }

    /// Raw sell value before depth and hero modifiers.
    pub fn sell_value(&self) -> f64 {
        match self {
            BlockKind::Grass => 7.2,
            BlockKind::Dirt => 7.2,
            BlockKind::Stone => 14.4,
            BlockKind::Copper => 25.2,
            BlockKind::Coal => 43.2,
            BlockKind::Lapis => 108.0,
            BlockKind::Gold => 216.0,
            BlockKind::Ruby => 432.0,
            BlockKind::Emerald => 756.0,
            BlockKind::Rossara => 1296.0,
            BlockKind::Diamond => 2160.0,
            BlockKind::Obsidian => 1500.0,
            BlockKind::Crystal => 12000.0,
            BlockKind::Uranious => 14000.0,
            BlockKind::Bonreus => 15000.0,
            BlockKind::Darkium => 17500.0,
            BlockKind::Voidstone => 28.8,
        }
    }

    /// Common kinds get the smaller flat depth bonus when sold.
    pub fn is_common(&self) -> bool {
        matches!(self, BlockKind::Grass | BlockKind::Dirt | BlockKind::Stone)
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_round_trip() {
        for kind in BlockKind::all() {
            assert_eq!(BlockKind::from_id(kind.id()), Some(*kind));
        }
        assert_eq!(BlockKind::from_id("bedrock"), None);
    }

    #[test]
    fn test_common_kinds() {
        assert!(BlockKind::Grass.is_common());
        assert!(BlockKind::Dirt.is_common());
        assert!(BlockKind::Stone.is_common());
        assert!(!BlockKind::Copper.is_common());
        assert!(!BlockKind::Voidstone.is_common());
    }

    #[test]
    fn test_all_kinds_have_positive_stats() {
        for kind in BlockKind::all() {
            assert!(kind.base_health() > 0.0, "{kind} has no health");
            assert!(kind.sell_value() > 0.0, "{kind} has no sell value");
        }
    }
}
