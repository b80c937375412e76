//! Dungeon descent: a timed floor-clearing gauntlet with risk-banked
//! rewards. Everything earned stays in the run's ledger until a boss
//! kill snapshots it; losing only pays out the last snapshot.

use super::types::{DungeonEvent, DungeonRun, RewardLedger, RunStatus};
use crate::artifacts::all_artifacts;
use crate::core::constants::{
    DUNGEON_BASE_ENEMY_HP, DUNGEON_BOSS_FLOOR_INTERVAL, DUNGEON_BOSS_HP_GROWTH,
    DUNGEON_BOSS_TIMER_SECONDS, DUNGEON_COOLDOWN_SECONDS, DUNGEON_NORMAL_HP_GROWTH,
    DUNGEON_NORMAL_TIMER_SECONDS, PHASE_ARTIFACT_CHANCE_STEP, PHASE_AUTO_CLAIM_INTERVAL,
    PHASE_BASE_ARTIFACT_CHANCE, PHASE_BASE_MONEY, PHASE_MONEY_GROWTH, PHASE_SHARD_CHANCE,
    PHASE_SHARD_PITY_INTERVAL,
};
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use crate::economy::player_damage;
use rand::Rng;

/// Starts a descent on floor 1. Damage per attack is snapshotted here;
/// swapping heroes or artifacts mid-run has no effect until the next run.
pub fn start_run(state: &mut GameState) -> Result<(), GameError> {
    if state.dungeon.cooldown > 0.0 {
        return Err(GameError::OnCooldown {
            remaining_seconds: state.dungeon.cooldown,
        });
    }
    let damage = player_damage(state);
    state.dungeon.current_run = Some(DungeonRun {
        floor: 1,
        player_damage: damage,
        enemy_hp: DUNGEON_BASE_ENEMY_HP,
        max_enemy_hp: DUNGEON_BASE_ENEMY_HP,
        timer: DUNGEON_NORMAL_TIMER_SECONDS,
        status: RunStatus::Fighting,
        last_completed_phase: 0,
        banked: RewardLedger::default(),
        total: RewardLedger::default(),
    });
    Ok(())
}

/// Advances the combat timer. Running out of time loses the run and
/// pays out only what was banked at the last boss.
pub fn tick_run(state: &mut GameState, dt: f64) -> Vec<DungeonEvent> {
    let timed_out = match state.dungeon.current_run.as_mut() {
        Some(run) if run.status == RunStatus::Fighting => {
            run.timer -= dt;
            run.timer <= 0.0
        }
        _ => false,
    };
    if timed_out {
        lose_run(state)
    } else {
        Vec::new()
    }
}

/// One attack against the current enemy.
pub fn attack(state: &mut GameState, rng: &mut impl Rng) -> Vec<DungeonEvent> {
    let defeated = match state.dungeon.current_run.as_mut() {
        Some(run) if run.status == RunStatus::Fighting => {
            run.enemy_hp -= run.player_damage;
            if run.enemy_hp <= 0.0 {
                true
            } else {
                return vec![DungeonEvent::EnemyDamaged {
                    hp: run.enemy_hp,
                    max_hp: run.max_enemy_hp,
                }];
            }
        }
        _ => return Vec::new(),
    };
    debug_assert!(defeated);
    win_floor(state, rng)
}

fn win_floor(state: &mut GameState, rng: &mut impl Rng) -> Vec<DungeonEvent> {
    let mut events = Vec::new();
    let Some(run) = state.dungeon.current_run.as_mut() else {
        return events;
    };
    state.dungeon.highest_floor = state.dungeon.highest_floor.max(run.floor);
    events.push(DungeonEvent::FloorCleared { floor: run.floor });

    if run.floor % DUNGEON_BOSS_FLOOR_INTERVAL != 0 {
        advance_floor(run);
        return events;
    }

    let phase = run.floor / DUNGEON_BOSS_FLOOR_INTERVAL;
    let (money, artifact_chance) = phase_rewards(phase);
    run.total.money += money;

    let artifact = if rng.gen::<f64>() < artifact_chance {
        let catalog = all_artifacts();
        let id = catalog[rng.gen_range(0..catalog.len())].id.to_string();
        run.total.artifacts.push(id.clone());
        Some(id)
    } else {
        None
    };

    let shards = if phase % PHASE_SHARD_PITY_INTERVAL == 0 {
        1
    } else if rng.gen::<f64>() < PHASE_SHARD_CHANCE {
        1
    } else {
        0
    };
    run.total.shards += shards;

    run.last_completed_phase = phase;
    run.banked = run.total.clone();
    events.push(DungeonEvent::PhaseCleared {
        phase,
        money,
        shards,
        artifact,
    });

    run.status = RunStatus::PhaseClear;
    if phase % PHASE_AUTO_CLAIM_INTERVAL == 0 {
        events.extend(claim_rewards(state, true));
    }
    events
}

/// Money and artifact odds for a cleared phase, compounding per phase.
fn phase_rewards(phase: u32) -> (f64, f64) {
    let mut money = PHASE_BASE_MONEY;
    let mut chance = PHASE_BASE_ARTIFACT_CHANCE;
    for _ in 2..=phase {
        money *= PHASE_MONEY_GROWTH;
        chance += PHASE_ARTIFACT_CHANCE_STEP;
    }
    (money.floor(), chance)
}

/// Enemy HP for a floor, rebuilt from the base each time so boss and
/// normal growth interleave in floor order.
fn enemy_hp_for_floor(floor: u32) -> f64 {
    let mut hp = DUNGEON_BASE_ENEMY_HP;
    for i in 2..=floor {
        if i % DUNGEON_BOSS_FLOOR_INTERVAL == 0 {
            hp *= DUNGEON_BOSS_HP_GROWTH;
        } else {
            hp *= DUNGEON_NORMAL_HP_GROWTH;
        }
    }
    hp.floor()
}

fn advance_floor(run: &mut DungeonRun) {
    run.floor += 1;
    run.max_enemy_hp = enemy_hp_for_floor(run.floor);
    run.enemy_hp = run.max_enemy_hp;
    run.timer = if run.is_boss_floor() {
        DUNGEON_BOSS_TIMER_SECONDS
    } else {
        DUNGEON_NORMAL_TIMER_SECONDS
    };
    run.status = RunStatus::Fighting;
}

/// Presses on past a cleared phase without claiming. The full ledger
/// stays at risk; only the banked snapshot survives a loss.
pub fn continue_descent(state: &mut GameState) -> Vec<DungeonEvent> {
    match state.dungeon.current_run.as_mut() {
        Some(run) if run.status == RunStatus::PhaseClear => {
            advance_floor(run);
            vec![DungeonEvent::FloorCleared { floor: run.floor - 1 }]
        }
        _ => Vec::new(),
    }
}

/// Claims the full reward ledger. With `continue_run` the ledgers reset
/// and the descent resumes on the next floor; otherwise the run ends
/// and the dungeon goes on cooldown. Only available at a phase clear;
/// mid-fight the ledger stays at risk.
pub fn claim_rewards(state: &mut GameState, continue_run: bool) -> Vec<DungeonEvent> {
    let Some(run) = state.dungeon.current_run.as_mut() else {
        return Vec::new();
    };
    if run.status != RunStatus::PhaseClear {
        return Vec::new();
    }
    let ledger = run.total.clone();
    run.total = RewardLedger::default();
    run.banked = RewardLedger::default();

    let mut events = vec![DungeonEvent::RewardsClaimed {
        money: ledger.money,
        shards: ledger.shards,
        artifacts: ledger.artifacts.clone(),
    }];

    if continue_run {
        if let Some(run) = state.dungeon.current_run.as_mut() {
            advance_floor(run);
        }
    } else {
        state.dungeon.current_run = None;
        state.dungeon.cooldown = DUNGEON_COOLDOWN_SECONDS;
        events.push(DungeonEvent::RunEnded {
            highest_floor: state.dungeon.highest_floor,
        });
    }
    grant_ledger(state, &ledger);
    events
}

/// Abandons the run. Treated exactly like a timeout: the banked
/// snapshot pays out and the unbanked remainder is lost.
pub fn abandon_run(state: &mut GameState) -> Vec<DungeonEvent> {
    lose_run(state)
}

fn lose_run(state: &mut GameState) -> Vec<DungeonEvent> {
    let Some(run) = state.dungeon.current_run.take() else {
        return Vec::new();
    };
    state.dungeon.cooldown = DUNGEON_COOLDOWN_SECONDS;
    let event = DungeonEvent::RunLost {
        floor: run.floor,
        banked_money: run.banked.money,
        banked_shards: run.banked.shards,
    };
    grant_ledger(state, &run.banked);
    vec![event]
}

fn grant_ledger(state: &mut GameState, ledger: &RewardLedger) {
    if ledger.money > 0.0 {
        state.earn_money(ledger.money);
    }
    state.resources.shards += ledger.shards;
    for id in &ledger.artifacts {
        if !state.artifacts.collection.contains(id) {
            state.artifacts.collection.push(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn run_state() -> GameState {
        let mut state = GameState::new();
        start_run(&mut state).unwrap();
        state
    }

    fn clear_floor(state: &mut GameState, rng: &mut ChaCha8Rng) -> Vec<DungeonEvent> {
        // Base damage with no equipment is 1; crank it so one hit kills.
        if let Some(run) = state.dungeon.current_run.as_mut() {
            run.player_damage = 1e12;
        }
        attack(state, rng)
    }

    #[test]
    fn test_start_run_snapshots_damage() {
        let state = run_state();
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.floor, 1);
        assert_eq!(run.enemy_hp, DUNGEON_BASE_ENEMY_HP);
        assert_eq!(run.timer, DUNGEON_NORMAL_TIMER_SECONDS);
        assert_eq!(run.player_damage, 1.0);
    }

    #[test]
    fn test_start_run_blocked_by_cooldown() {
        let mut state = GameState::new();
        state.dungeon.cooldown = 30.0;
        let err = start_run(&mut state).unwrap_err();
        assert!(matches!(
            err,
            GameError::OnCooldown { remaining_seconds } if remaining_seconds == 30.0
        ));
    }

    #[test]
    fn test_enemy_hp_growth_sequence() {
        assert_eq!(enemy_hp_for_floor(1), 300.0);
        assert_eq!(enemy_hp_for_floor(2), 321.0);
        assert_eq!(enemy_hp_for_floor(3), (300.0f64 * 1.07 * 1.07).floor());
        // Floor 5 is a boss: three normal steps then one boss step.
        let expected = (300.0f64 * 1.07 * 1.07 * 1.07 * 1.30).floor();
        assert_eq!(enemy_hp_for_floor(5), expected);
    }

    #[test]
    fn test_timeout_loses_run_and_pays_banked_only() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        let start_money = state.resources.money;
        // Clear through the first boss so something gets banked.
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        if let Some(run) = state.dungeon.current_run.as_mut() {
            assert_eq!(run.status, RunStatus::PhaseClear);
            run.banked.money = 100.0;
            run.total.money = 500.0;
        }
        continue_descent(&mut state);
        let events = tick_run(&mut state, 60.0);
        assert!(matches!(events[0], DungeonEvent::RunLost { .. }));
        assert!(state.dungeon.current_run.is_none());
        assert_eq!(state.dungeon.cooldown, DUNGEON_COOLDOWN_SECONDS);
        assert_eq!(state.resources.money, start_money + 100.0);
    }

    #[test]
    fn test_boss_kill_banks_snapshot() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.status, RunStatus::PhaseClear);
        assert_eq!(run.last_completed_phase, 1);
        assert_eq!(run.total.money, 100_000.0);
        assert_eq!(run.banked, run.total);
        assert_eq!(state.dungeon.highest_floor, 5);
    }

    #[test]
    fn test_phase_reward_compounding() {
        assert_eq!(phase_rewards(1).0, 100_000.0);
        assert_eq!(phase_rewards(2).0, 120_000.0);
        assert_eq!(phase_rewards(3).0, 144_000.0);
        assert!((phase_rewards(3).1 - 0.07).abs() < 1e-12);
    }

    #[test]
    fn test_shard_pity_on_fifth_phase() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        // Floors 1..=25: five phases, the fifth guarantees a shard.
        for _ in 0..25 {
            clear_floor(&mut state, &mut rng);
            continue_descent(&mut state);
        }
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert!(run.total.shards >= 1);
        assert_eq!(run.last_completed_phase, 5);
    }

    #[test]
    fn test_claim_and_leave_grants_full_ledger() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        let start_money = state.resources.money;
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        if let Some(run) = state.dungeon.current_run.as_mut() {
            run.total.money = 500.0;
            run.total.shards = 2;
            run.total.artifacts = vec!["iron_sword".to_string()];
        }
        let events = claim_rewards(&mut state, false);
        assert!(matches!(events[0], DungeonEvent::RewardsClaimed { .. }));
        assert!(matches!(events[1], DungeonEvent::RunEnded { .. }));
        assert_eq!(state.resources.money, start_money + 500.0);
        assert_eq!(state.resources.shards, 2);
        assert!(state.artifacts.collection.contains(&"iron_sword".to_string()));
        assert!(state.dungeon.current_run.is_none());
        assert_eq!(state.dungeon.cooldown, DUNGEON_COOLDOWN_SECONDS);
    }

    #[test]
    fn test_claim_and_continue_resets_ledgers() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        claim_rewards(&mut state, true);
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.floor, 6);
        assert_eq!(run.status, RunStatus::Fighting);
        assert!(run.total.is_empty());
        assert!(run.banked.is_empty());
    }

    #[test]
    fn test_claim_is_noop_mid_fight() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        let start_money = state.resources.money;
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        continue_descent(&mut state);

        // Back in combat the ledger cannot be cashed out early.
        let events = claim_rewards(&mut state, false);
        assert!(events.is_empty());
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.status, RunStatus::Fighting);
        assert!(!run.total.is_empty());
        assert_eq!(state.resources.money, start_money);
    }

    #[test]
    fn test_continue_descent_keeps_ledger_at_risk() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        for _ in 0..5 {
            clear_floor(&mut state, &mut rng);
        }
        let total_before = state.dungeon.current_run.as_ref().unwrap().total.clone();
        continue_descent(&mut state);
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.floor, 6);
        assert_eq!(run.timer, DUNGEON_NORMAL_TIMER_SECONDS);
        assert_eq!(run.total, total_before);
    }

    #[test]
    fn test_boss_floor_gets_long_timer() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let mut state = run_state();
        for _ in 0..4 {
            clear_floor(&mut state, &mut rng);
        }
        let run = state.dungeon.current_run.as_ref().unwrap();
        assert_eq!(run.floor, 5);
        assert!(run.is_boss_floor());
        assert_eq!(run.timer, DUNGEON_BOSS_TIMER_SECONDS);
    }

    #[test]
    fn test_duplicate_artifact_grants_dedupe() {
        let mut state = GameState::new();
        state.artifacts.collection.push("iron_sword".to_string());
        let ledger = RewardLedger {
            money: 0.0,
            shards: 0,
            artifacts: vec!["iron_sword".to_string(), "magic_ring".to_string()],
        };
        grant_ledger(&mut state, &ledger);
        assert_eq!(
            state.artifacts.collection,
            vec!["iron_sword".to_string(), "magic_ring".to_string()]
        );
    }
}
