//! Mine grid data structures.

use crate::blocks::BlockKind;
use crate::core::constants::{MINE_COLS, MINE_HEIGHT, MINE_ROWS};

/// A single live grid cell. Destroyed cells are removed from the grid,
/// never resurrected.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub health: f64,
    pub max_health: f64,
}

impl Block {
    /// Remaining health as a 0..=1 fraction, for presentation.
    pub fn health_ratio(&self) -> f64 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}

/// Who performed a dig. Decides which splash upgrade applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigSource {
    /// Manual click or auto-mine (both use click power and multi-mine splash).
    Player,
    /// Hired miner without the super-miner upgrade. Never splashes.
    AutoMiner,
    /// Hired miner with the super-miner upgrade active.
    SuperMiner,
}

/// Events emitted by dig resolution, consumed by the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum MineEvent {
    BlockDamaged {
        x: usize,
        y: usize,
        z: usize,
        health_ratio: f64,
    },
    BlockDestroyed {
        x: usize,
        y: usize,
        z: usize,
        kind: BlockKind,
        reward: f64,
    },
    RowCleared {
        new_depth: u32,
    },
}

/// The 3D block grid: exactly [`MINE_HEIGHT`] layers, each a flattened
/// cols x rows array indexed `z * MINE_COLS + x`. Layer 0 is the
/// minable top layer.
#[derive(Debug, Clone)]
pub struct MineGrid {
    pub layers: Vec<Vec<Option<Block>>>,
    /// Round-robin position for the auto-mine sweep over layer 0.
    /// Reset whenever the grid scrolls.
    pub auto_mine_cursor: usize,
}

impl MineGrid {
    pub fn cell_index(x: usize, z: usize) -> usize {
        z * MINE_COLS + x
    }

    pub fn in_bounds(x: usize, y: usize, z: usize) -> bool {
        x < MINE_COLS && y < MINE_HEIGHT && z < MINE_ROWS
    }

    pub fn block_at(&self, x: usize, y: usize, z: usize) -> Option<&Block> {
        if !Self::in_bounds(x, y, z) {
            return None;
        }
        self.layers[y][Self::cell_index(x, z)].as_ref()
    }

    /// Count of live cells on the top layer.
    pub fn live_top_blocks(&self) -> usize {
        self.layers[0].iter().filter(|c| c.is_some()).count()
    }

    pub fn top_layer_cleared(&self) -> bool {
        self.layers[0].iter().all(|c| c.is_none())
    }
}
