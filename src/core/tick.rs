//! Per-frame simulation step: cooldown decay, the auto-mine sweep, the
//! hired miner crew and the dungeon combat timer.

use crate::core::constants::{
    AUTO_MINE_RATE_PER_LEVEL, MINE_COLS, MINE_ROWS, MINER_BASE_DIG_RATE, MINER_DIG_RATE_PER_STAMINA,
    MINER_MIN_REST_SECONDS, MINER_REST_BASE_ODDS, MINER_REST_BASE_SECONDS,
    MINER_REST_ODDS_PER_STAMINA, MINER_REST_REDUCTION_PER_STAMINA,
};
use crate::core::game_state::GameState;
use crate::dungeon::logic::tick_run;
use crate::dungeon::types::DungeonEvent;
use crate::mine::logic::dig;
use crate::mine::types::{DigSource, MineEvent, MineGrid};
use rand::Rng;

#[derive(Debug, Clone, PartialEq)]
pub enum TickEvent {
    Mine(MineEvent),
    Dungeon(DungeonEvent),
}

/// Session-local automation timers. Not part of the save: a fresh
/// runtime starts every worker from a clean timer, which only costs a
/// fraction of one dig interval on load.
#[derive(Debug, Default)]
pub struct TickRuntime {
    auto_mine_timer: f64,
    miners: Vec<MinerRuntime>,
}

#[derive(Debug, Default, Clone)]
struct MinerRuntime {
    dig_timer: f64,
    /// Seconds of rest remaining; zero means the miner is working.
    rest_timer: f64,
}

/// Advances the whole simulation by `dt` seconds.
pub fn game_tick(
    state: &mut GameState,
    grid: &mut MineGrid,
    runtime: &mut TickRuntime,
    rng: &mut impl Rng,
    dt: f64,
) -> Vec<TickEvent> {
    let mut events = Vec::new();
    state.stats.time_played_seconds += dt;
    state.agent.cooldown = (state.agent.cooldown - dt).max(0.0);
    state.dungeon.cooldown = (state.dungeon.cooldown - dt).max(0.0);

    tick_auto_mine(state, grid, runtime, rng, dt, &mut events);
    tick_miners(state, grid, runtime, rng, dt, &mut events);

    events.extend(tick_run(state, dt).into_iter().map(TickEvent::Dungeon));
    events
}

/// The auto-mine upgrade sweeps the top layer in round-robin order,
/// digging with the player's click power. Its digs count as player
/// actions, so multi-mine splash applies.
fn tick_auto_mine(
    state: &mut GameState,
    grid: &mut MineGrid,
    runtime: &mut TickRuntime,
    rng: &mut impl Rng,
    dt: f64,
    events: &mut Vec<TickEvent>,
) {
    let level = state.upgrades.auto_mine_level;
    if level == 0 {
        return;
    }
    let interval = 1.0 / (AUTO_MINE_RATE_PER_LEVEL * level as f64);
    runtime.auto_mine_timer += dt;
    while runtime.auto_mine_timer >= interval {
        runtime.auto_mine_timer -= interval;
        let Some((x, z)) = next_auto_mine_target(grid) else {
            break;
        };
        let power = state.upgrades.click_power as f64;
        events.extend(
            dig(state, grid, x, 0, z, power, DigSource::Player, rng)
                .into_iter()
                .map(TickEvent::Mine),
        );
    }
}

/// Next live cell on the top layer at or after the cursor, wrapping
/// once. The cursor then points past the chosen cell.
fn next_auto_mine_target(grid: &mut MineGrid) -> Option<(usize, usize)> {
    let cells = MINE_COLS * MINE_ROWS;
    for step in 0..cells {
        let index = (grid.auto_mine_cursor + step) % cells;
        if grid.layers[0][index].is_some() {
            grid.auto_mine_cursor = (index + 1) % cells;
            return Some((index % MINE_COLS, index / MINE_COLS));
        }
    }
    None
}

/// Hired miners each dig a random live top-layer block on their own
/// timer, and occasionally take a stamina-dependent rest.
fn tick_miners(
    state: &mut GameState,
    grid: &mut MineGrid,
    runtime: &mut TickRuntime,
    rng: &mut impl Rng,
    dt: f64,
    events: &mut Vec<TickEvent>,
) {
    runtime
        .miners
        .resize(state.upgrades.miner_count as usize, MinerRuntime::default());
    if runtime.miners.is_empty() {
        return;
    }

    let stamina = state.upgrades.miner_stamina_level as f64;
    let interval = 1.0 / (MINER_BASE_DIG_RATE + MINER_DIG_RATE_PER_STAMINA * stamina);
    let rest_chance = 1.0 / (MINER_REST_BASE_ODDS - MINER_REST_ODDS_PER_STAMINA * stamina).max(1.0);
    let rest_duration =
        (MINER_REST_BASE_SECONDS - MINER_REST_REDUCTION_PER_STAMINA * stamina).max(MINER_MIN_REST_SECONDS);
    let power = state.upgrades.miner_power_level as f64;
    let source = if state.upgrades.super_miner_level > 0 {
        DigSource::SuperMiner
    } else {
        DigSource::AutoMiner
    };

    for slot in 0..runtime.miners.len() {
        if runtime.miners[slot].rest_timer > 0.0 {
            runtime.miners[slot].rest_timer -= dt;
            continue;
        }
        runtime.miners[slot].dig_timer += dt;
        while runtime.miners[slot].dig_timer >= interval {
            runtime.miners[slot].dig_timer -= interval;
            let Some((x, z)) = random_top_target(grid, rng) else {
                break;
            };
            events.extend(
                dig(state, grid, x, 0, z, power, source, rng)
                    .into_iter()
                    .map(TickEvent::Mine),
            );
            if rng.gen::<f64>() < rest_chance {
                runtime.miners[slot].rest_timer = rest_duration;
                break;
            }
        }
    }
}

fn random_top_target(grid: &MineGrid, rng: &mut impl Rng) -> Option<(usize, usize)> {
    let live = grid.live_top_blocks();
    if live == 0 {
        return None;
    }
    let pick = rng.gen_range(0..live);
    let index = grid
        .layers[0]
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_some())
        .nth(pick)
        .map(|(i, _)| i)?;
    Some((index % MINE_COLS, index / MINE_COLS))
}
