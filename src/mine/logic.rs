//! Dig resolution: damage application, destruction rewards, splash
//! propagation and the row-clear scroll.

use super::generation::generate_layer;
use super::types::{DigSource, MineEvent, MineGrid};
use crate::core::constants::{
    AGENT_COOLDOWN_SECONDS, AGENT_COST, MINE_COLS, MINE_HEIGHT, MINE_ROWS, SPLASH_POWER_FACTOR,
};
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use crate::economy::compute_reward;
use crate::heroes::equipped_heroes;
use rand::Rng;

/// Applies `power` damage to the cell at (x, y, z).
///
/// Out-of-range coordinates and empty cells are silent no-ops: digs come
/// straight from the input path where stale clicks are normal.
/// `f64::INFINITY` is a valid power and destroys the block outright.
///
/// Splash: when the source's splash upgrade (multi-mine for the player,
/// super-miner for the crew) is active and the target sits on layer 0,
/// the 8 surrounding cells take `power * 0.25 * level`. Splash digs run
/// through the same path but never splash again, so the cascade is
/// depth-1 by construction and fully resolved before this call returns.
pub fn dig(
    state: &mut GameState,
    grid: &mut MineGrid,
    x: usize,
    y: usize,
    z: usize,
    power: f64,
    source: DigSource,
    rng: &mut impl Rng,
) -> Vec<MineEvent> {
    let splash_level = match source {
        DigSource::Player => state.upgrades.multi_mine_level,
        DigSource::SuperMiner => state.upgrades.super_miner_level,
        DigSource::AutoMiner => 0,
    };
    let mut events = Vec::new();
    dig_cell(state, grid, x, y, z, power, splash_level, rng, &mut events);
    events
}

#[allow(clippy::too_many_arguments)]
fn dig_cell(
    state: &mut GameState,
    grid: &mut MineGrid,
    x: usize,
    y: usize,
    z: usize,
    power: f64,
    splash_level: u32,
    rng: &mut impl Rng,
    events: &mut Vec<MineEvent>,
) {
    if !MineGrid::in_bounds(x, y, z) {
        return;
    }
    let index = MineGrid::cell_index(x, z);

    let destroyed_kind = {
        let Some(block) = grid.layers[y][index].as_mut() else {
            return;
        };
        block.health -= power;
        if block.health <= 0.0 {
            Some(block.kind)
        } else {
            events.push(MineEvent::BlockDamaged {
                x,
                y,
                z,
                health_ratio: block.health_ratio(),
            });
            None
        }
    };

    if let Some(kind) = destroyed_kind {
        let block_depth = state.depth + y as u32;
        let heroes = equipped_heroes(state);
        let reward = compute_reward(kind, block_depth, state.depth, &heroes);
        state.earn_money(reward);
        state.record_mined_block(kind.id());
        grid.layers[y][index] = None;
        events.push(MineEvent::BlockDestroyed {
            x,
            y,
            z,
            kind,
            reward,
        });
        check_row_cleared(state, grid, rng, events);
    }

    // Splash resolves after any row clear, matching the order blocks
    // scroll in: neighbors are hit on whatever is layer 0 now.
    if splash_level > 0 && y == 0 {
        let splash_power = power * SPLASH_POWER_FACTOR * splash_level as f64;
        for dz in -1i32..=1 {
            for dx in -1i32..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                let nx = x as i32 + dx;
                let nz = z as i32 + dz;
                if nx < 0 || nx >= MINE_COLS as i32 || nz < 0 || nz >= MINE_ROWS as i32 {
                    continue;
                }
                dig_cell(
                    state,
                    grid,
                    nx as usize,
                    0,
                    nz as usize,
                    splash_power,
                    0,
                    rng,
                    events,
                );
            }
        }
    }
}

/// Scrolls the grid when the top layer is fully depleted: depth
/// advances by one, the old top layer is dropped and a fresh bottom
/// layer is generated. The grid always keeps exactly [`MINE_HEIGHT`]
/// layers.
fn check_row_cleared(
    state: &mut GameState,
    grid: &mut MineGrid,
    rng: &mut impl Rng,
    events: &mut Vec<MineEvent>,
) {
    if !grid.top_layer_cleared() {
        return;
    }
    state.depth += 1;
    grid.layers.remove(0);
    let bottom_depth = state.depth + MINE_HEIGHT as u32 - 1;
    grid.layers.push(generate_layer(bottom_depth, false, rng));
    grid.auto_mine_cursor = 0;
    events.push(MineEvent::RowCleared {
        new_depth: state.depth,
    });
}

/// Buys the demolition specialist. Buying twice is a no-op.
pub fn buy_agent(state: &mut GameState) -> Result<(), GameError> {
    if state.agent.owned {
        return Ok(());
    }
    if !state.spend(AGENT_COST) {
        return Err(GameError::InsufficientFunds {
            needed: AGENT_COST,
            available: state.resources.money,
        });
    }
    state.agent.owned = true;
    Ok(())
}

/// One-shot strike that destroys the targeted block instantly, then
/// puts the agent on cooldown. Strikes on empty cells are silent no-ops
/// and do not consume the cooldown.
pub fn agent_strike(
    state: &mut GameState,
    grid: &mut MineGrid,
    x: usize,
    y: usize,
    z: usize,
    rng: &mut impl Rng,
) -> Result<Vec<MineEvent>, GameError> {
    if !state.agent.owned {
        return Ok(Vec::new());
    }
    if state.agent.cooldown > 0.0 {
        return Err(GameError::OnCooldown {
            remaining_seconds: state.agent.cooldown,
        });
    }
    let events = dig(state, grid, x, y, z, f64::INFINITY, DigSource::AutoMiner, rng);
    if !events.is_empty() {
        state.agent.cooldown = AGENT_COOLDOWN_SECONDS;
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::BlockKind;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn setup() -> (GameState, MineGrid, ChaCha8Rng) {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let state = GameState::new();
        let grid = MineGrid::generate(0, &mut rng);
        (state, grid, rng)
    }

    #[test]
    fn test_dig_reduces_health() {
        let (mut state, mut grid, mut rng) = setup();
        let before = grid.block_at(3, 0, 3).unwrap().health;
        let events = dig(&mut state, &mut grid, 3, 0, 3, 10.0, DigSource::Player, &mut rng);
        let after = grid.block_at(3, 0, 3).unwrap().health;
        assert_eq!(after, before - 10.0);
        assert!(matches!(events[0], MineEvent::BlockDamaged { .. }));
    }

    #[test]
    fn test_out_of_range_dig_is_silent_noop() {
        let (mut state, mut grid, mut rng) = setup();
        let events = dig(&mut state, &mut grid, 99, 0, 99, 10.0, DigSource::Player, &mut rng);
        assert!(events.is_empty());
        let events = dig(&mut state, &mut grid, 0, 99, 0, 10.0, DigSource::Player, &mut rng);
        assert!(events.is_empty());
    }

    #[test]
    fn test_destroy_grants_reward_and_stats() {
        let (mut state, mut grid, mut rng) = setup();
        // Top layer is grass: 54 health, reward 57 at depth 0.
        let events = dig(&mut state, &mut grid, 0, 0, 0, 54.0, DigSource::AutoMiner, &mut rng);
        assert!(matches!(
            events[0],
            MineEvent::BlockDestroyed {
                kind: BlockKind::Grass,
                reward,
                ..
            } if reward == 57.0
        ));
        assert_eq!(state.resources.money, 200_057.0);
        assert_eq!(state.stats.blocks_mined, 1);
        assert_eq!(state.stats.mined_block_counts.get("grass"), Some(&1));
        assert!(grid.block_at(0, 0, 0).is_none());
    }

    #[test]
    fn test_destroyed_cell_stays_empty() {
        let (mut state, mut grid, mut rng) = setup();
        dig(&mut state, &mut grid, 0, 0, 0, f64::INFINITY, DigSource::AutoMiner, &mut rng);
        assert!(grid.block_at(0, 0, 0).is_none());
        let events = dig(&mut state, &mut grid, 0, 0, 0, 100.0, DigSource::AutoMiner, &mut rng);
        assert!(events.is_empty());
        assert!(grid.block_at(0, 0, 0).is_none());
    }

    #[test]
    fn test_infinity_power_one_shots() {
        let (mut state, mut grid, mut rng) = setup();
        let events = dig(&mut state, &mut grid, 2, 0, 2, f64::INFINITY, DigSource::AutoMiner, &mut rng);
        assert!(matches!(events[0], MineEvent::BlockDestroyed { .. }));
    }

    #[test]
    fn test_splash_hits_moore_neighborhood() {
        let (mut state, mut grid, mut rng) = setup();
        state.upgrades.multi_mine_level = 1;
        let events = dig(&mut state, &mut grid, 3, 0, 3, 8.0, DigSource::Player, &mut rng);
        // Target plus all 8 neighbors damaged (none destroyed: grass has 54 hp).
        assert_eq!(events.len(), 9);
        let splash = 8.0 * SPLASH_POWER_FACTOR;
        for (dx, dz) in [(-1i32, -1i32), (0, -1), (1, 0), (1, 1)] {
            let block = grid
                .block_at((3 + dx) as usize, 0, (3 + dz) as usize)
                .unwrap();
            assert_eq!(block.health, 54.0 - splash);
        }
    }

    #[test]
    fn test_splash_clips_at_grid_edge() {
        let (mut state, mut grid, mut rng) = setup();
        state.upgrades.multi_mine_level = 1;
        let events = dig(&mut state, &mut grid, 0, 0, 0, 8.0, DigSource::Player, &mut rng);
        // Corner target: only 3 in-bounds neighbors.
        assert_eq!(events.len(), 4);
    }

    #[test]
    fn test_splash_does_not_apply_below_top_layer() {
        let (mut state, mut grid, mut rng) = setup();
        state.upgrades.multi_mine_level = 3;
        let events = dig(&mut state, &mut grid, 3, 1, 3, 5.0, DigSource::Player, &mut rng);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_auto_miner_never_splashes() {
        let (mut state, mut grid, mut rng) = setup();
        state.upgrades.multi_mine_level = 3;
        state.upgrades.super_miner_level = 3;
        let events = dig(&mut state, &mut grid, 3, 0, 3, 5.0, DigSource::AutoMiner, &mut rng);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_row_clear_scrolls_and_keeps_height() {
        let (mut state, mut grid, mut rng) = setup();
        // Remember what layer 1 held; it becomes the new top layer.
        let old_layer1 = grid.layers[1].clone();
        for z in 0..MINE_ROWS {
            for x in 0..MINE_COLS {
                dig(&mut state, &mut grid, x, 0, z, f64::INFINITY, DigSource::AutoMiner, &mut rng);
            }
        }
        assert_eq!(state.depth, 1);
        assert_eq!(grid.layers.len(), MINE_HEIGHT);
        assert_eq!(grid.layers[0], old_layer1);
        assert_eq!(grid.auto_mine_cursor, 0);
        // Fresh bottom layer fully populated.
        assert!(grid.layers[MINE_HEIGHT - 1].iter().all(|c| c.is_some()));
    }

    #[test]
    fn test_row_clear_event_emitted_once() {
        let (mut state, mut grid, mut rng) = setup();
        let mut clears = 0;
        for z in 0..MINE_ROWS {
            for x in 0..MINE_COLS {
                let events =
                    dig(&mut state, &mut grid, x, 0, z, f64::INFINITY, DigSource::AutoMiner, &mut rng);
                clears += events
                    .iter()
                    .filter(|e| matches!(e, MineEvent::RowCleared { .. }))
                    .count();
            }
        }
        assert_eq!(clears, 1);
    }

    #[test]
    fn test_agent_strike_and_cooldown() {
        let (mut state, mut grid, mut rng) = setup();
        buy_agent(&mut state).unwrap();
        assert_eq!(state.resources.money, 150_000.0);

        let events = agent_strike(&mut state, &mut grid, 1, 0, 1, &mut rng).unwrap();
        assert!(matches!(events[0], MineEvent::BlockDestroyed { .. }));
        assert_eq!(state.agent.cooldown, AGENT_COOLDOWN_SECONDS);

        let err = agent_strike(&mut state, &mut grid, 2, 0, 2, &mut rng).unwrap_err();
        assert!(matches!(err, GameError::OnCooldown { .. }));
    }

    #[test]
    fn test_agent_strike_on_empty_cell_keeps_cooldown_free() {
        let (mut state, mut grid, mut rng) = setup();
        buy_agent(&mut state).unwrap();
        dig(&mut state, &mut grid, 1, 0, 1, f64::INFINITY, DigSource::AutoMiner, &mut rng);
        let events = agent_strike(&mut state, &mut grid, 1, 0, 1, &mut rng).unwrap();
        assert!(events.is_empty());
        assert_eq!(state.agent.cooldown, 0.0);
    }
}
