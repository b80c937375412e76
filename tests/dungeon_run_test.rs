//! Integration test: dungeon descent
//!
//! Full runs through the risk-banking loop: phase ledgers, loss
//! payouts, claim choices, the auto-claim checkpoint and the cooldown
//! gate on restarting.

use deepmine::core::constants::{
    DUNGEON_COOLDOWN_SECONDS, PHASE_AUTO_CLAIM_INTERVAL, PHASE_BASE_MONEY,
};
use deepmine::dungeon::{self, DungeonEvent, RunStatus};
use deepmine::GameError;
use deepmine::GameState;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn one_shot_damage(state: &mut GameState) {
    if let Some(run) = state.dungeon.current_run.as_mut() {
        run.player_damage = 1e15;
    }
}

/// Clears floors until the given floor is done, pressing on past every
/// phase without claiming.
fn descend_to(state: &mut GameState, rng: &mut ChaCha8Rng, floors: u32) -> Vec<DungeonEvent> {
    let mut events = Vec::new();
    for _ in 0..floors {
        one_shot_damage(state);
        events.extend(dungeon::attack(state, rng));
        dungeon::continue_descent(state);
    }
    events
}

#[test]
fn test_two_phase_descent_then_loss_pays_banked() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let mut state = GameState::new();
    let start_money = state.resources.money;

    dungeon::start_run(&mut state).unwrap();
    descend_to(&mut state, &mut rng, 10);

    let banked = state.dungeon.current_run.as_ref().unwrap().banked.clone();
    // Two phases: 100000 + 120000.
    assert_eq!(banked.money, PHASE_BASE_MONEY + (PHASE_BASE_MONEY * 1.2).floor());

    // Die on floor 11 by timeout.
    let events = dungeon::tick_run(&mut state, 100.0);
    assert!(matches!(events[0], DungeonEvent::RunLost { .. }));
    assert_eq!(state.resources.money, start_money + banked.money);
    assert_eq!(state.resources.shards, banked.shards);
    assert!(state.dungeon.current_run.is_none());
    assert_eq!(state.dungeon.highest_floor, 10);
    assert_eq!(state.dungeon.cooldown, DUNGEON_COOLDOWN_SECONDS);

    // The cooldown gates the next run.
    assert!(matches!(
        dungeon::start_run(&mut state),
        Err(GameError::OnCooldown { .. })
    ));
}

#[test]
fn test_unbanked_phase_is_forfeited_on_loss() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);
    let mut state = GameState::new();
    let start_money = state.resources.money;

    dungeon::start_run(&mut state).unwrap();
    // One full phase, then four more floors whose boss never falls.
    descend_to(&mut state, &mut rng, 9);

    dungeon::tick_run(&mut state, 100.0);
    // Only phase 1 was banked.
    assert_eq!(state.resources.money, start_money + PHASE_BASE_MONEY);
}

#[test]
fn test_abandon_behaves_like_loss() {
    let mut rng = ChaCha8Rng::seed_from_u64(2);
    let mut state = GameState::new();
    let start_money = state.resources.money;

    dungeon::start_run(&mut state).unwrap();
    descend_to(&mut state, &mut rng, 5);

    let events = dungeon::abandon_run(&mut state);
    assert!(matches!(events[0], DungeonEvent::RunLost { .. }));
    assert_eq!(state.resources.money, start_money + PHASE_BASE_MONEY);
    assert_eq!(state.dungeon.cooldown, DUNGEON_COOLDOWN_SECONDS);
}

#[test]
fn test_claim_and_continue_restarts_ledger_risk() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut state = GameState::new();
    let start_money = state.resources.money;

    dungeon::start_run(&mut state).unwrap();
    descend_to(&mut state, &mut rng, 4);
    one_shot_damage(&mut state);
    dungeon::attack(&mut state, &mut rng);

    assert_eq!(
        state.dungeon.current_run.as_ref().unwrap().status,
        RunStatus::PhaseClear
    );
    dungeon::claim_rewards(&mut state, true);
    assert_eq!(state.resources.money, start_money + PHASE_BASE_MONEY);

    // A later timeout pays nothing extra: the ledgers restarted empty.
    dungeon::tick_run(&mut state, 100.0);
    assert_eq!(state.resources.money, start_money + PHASE_BASE_MONEY);
}

#[test]
fn test_auto_claim_checkpoint() {
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let mut state = GameState::new();
    let start_money = state.resources.money;

    dungeon::start_run(&mut state).unwrap();
    let floors = PHASE_AUTO_CLAIM_INTERVAL * 5;
    let events = descend_to(&mut state, &mut rng, floors);

    // Phase 25 claims automatically and the run keeps going.
    assert!(events
        .iter()
        .any(|e| matches!(e, DungeonEvent::RewardsClaimed { .. })));
    let run = state.dungeon.current_run.as_ref().unwrap();
    assert_eq!(run.floor, floors + 1);
    assert!(run.total.is_empty() || run.total.money < PHASE_BASE_MONEY * 2.0);
    assert!(state.resources.money > start_money);
}

#[test]
fn test_shards_guaranteed_every_fifth_phase() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut state = GameState::new();

    dungeon::start_run(&mut state).unwrap();
    let events = descend_to(&mut state, &mut rng, 25);

    let phase_five_shards = events.iter().find_map(|e| match e {
        DungeonEvent::PhaseCleared { phase: 5, shards, .. } => Some(*shards),
        _ => None,
    });
    assert_eq!(phase_five_shards, Some(1));
}
