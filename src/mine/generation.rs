//! Layer generation: depth-banded ore distribution and block creation.
//!
//! The kind chooser is a fixed priority cascade, so rarer checks
//! short-circuit cheaper ones and overlapping bands resolve in
//! enumeration order.

use super::types::{Block, MineGrid};
use crate::blocks::BlockKind;
use crate::core::constants::{
    DEEP_DEPTH, DEEP_HEALTH_BONUS, DEEP_ORE_CHANCE, DEEP_REALM_DEPTH, DEEP_REALM_FILLER_CHANCE,
    MINE_COLS, MINE_HEIGHT, MINE_ROWS, ORE_IN_RANGE_CHANCE, ORE_OUT_OF_RANGE_CHANCE,
    SHALLOW_STONE_CHANCE,
};
use rand::Rng;

/// Deep ores: only rolled at depth >= 100, 1% within their band.
const DEEP_ORE_BANDS: &[(BlockKind, u32, u32)] = &[
    (BlockKind::Darkium, 125, 150),
    (BlockKind::Bonreus, 125, 150),
    (BlockKind::Uranious, 100, 125),
    (BlockKind::Crystal, 100, 125),
];

/// Standard ores in priority order: 1% inside the band, a long-tail
/// 0.006% anywhere else.
const ORE_BANDS: &[(BlockKind, u32, u32)] = &[
    (BlockKind::Diamond, 80, 100),
    (BlockKind::Ruby, 80, 100),
    (BlockKind::Rossara, 50, 75),
    (BlockKind::Emerald, 50, 75),
    (BlockKind::Obsidian, 40, 120),
    (BlockKind::Gold, 40, 100),
    (BlockKind::Lapis, 20, 40),
    (BlockKind::Copper, 20, 40),
    (BlockKind::Coal, 30, 80),
];

/// Picks the block kind for a freshly generated cell at `depth`.
pub fn choose_block_kind(depth: u32, rng: &mut impl Rng) -> BlockKind {
    // Past the deep realm, almost everything is voidstone.
    if depth > DEEP_REALM_DEPTH && rng.gen::<f64>() < DEEP_REALM_FILLER_CHANCE {
        return BlockKind::Voidstone;
    }

    if depth >= DEEP_DEPTH {
        for (kind, min, max) in DEEP_ORE_BANDS {
            if depth >= *min && depth <= *max && rng.gen::<f64>() < DEEP_ORE_CHANCE {
                return *kind;
            }
        }
    }

    for (kind, min, max) in ORE_BANDS {
        let chance = if depth >= *min && depth <= *max {
            ORE_IN_RANGE_CHANCE
        } else {
            ORE_OUT_OF_RANGE_CHANCE
        };
        if rng.gen::<f64>() < chance {
            return *kind;
        }
    }

    if depth > DEEP_DEPTH {
        return BlockKind::Stone;
    }
    if depth > 5 || (depth > 2 && rng.gen::<f64>() < SHALLOW_STONE_CHANCE) {
        BlockKind::Stone
    } else {
        BlockKind::Dirt
    }
}

/// Builds a block of the given kind. Blocks at deep depths get a flat
/// health boost on top of the catalog value.
pub fn create_block(kind: BlockKind, depth: u32) -> Block {
    let mut health = kind.base_health();
    if depth >= DEEP_DEPTH {
        health += DEEP_HEALTH_BONUS;
    }
    Block {
        kind,
        health,
        max_health: health,
    }
}

/// Generates one full layer at an absolute depth. The top layer of a
/// fresh grid is always grass.
pub fn generate_layer(depth: u32, is_top: bool, rng: &mut impl Rng) -> Vec<Option<Block>> {
    let mut layer = Vec::with_capacity(MINE_COLS * MINE_ROWS);
    for _ in 0..MINE_COLS * MINE_ROWS {
        let kind = if is_top {
            BlockKind::Grass
        } else {
            choose_block_kind(depth, rng)
        };
        layer.push(Some(create_block(kind, depth)));
    }
    layer
}

impl MineGrid {
    /// Builds a full grid whose layer `y` sits at absolute depth
    /// `depth + y`.
    pub fn generate(depth: u32, rng: &mut impl Rng) -> Self {
        let layers = (0..MINE_HEIGHT)
            .map(|y| generate_layer(depth + y as u32, y == 0, rng))
            .collect();
        Self {
            layers,
            auto_mine_cursor: 0,
        }
    }
}
