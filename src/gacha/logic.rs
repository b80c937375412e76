//! Summon resolution: weighted rarity rolls, pity guarantee, duplicate
//! refunds.

use super::banners::{banner_by_id, Banner};
use crate::core::constants::PITY_CEILING;
use crate::core::errors::GameError;
use crate::core::game_state::GameState;
use crate::heroes::{hero_by_id, Hero, Rarity};
use rand::Rng;

/// Rarity granted when the pity counter runs out.
pub const PITY_GUARANTEED_RARITY: Rarity = Rarity::Mythic;

/// The outcome of one summon action (1..n draws).
#[derive(Debug, Clone)]
pub struct SummonOutcome {
    /// Drawn heroes in draw order, duplicates included.
    pub heroes: Vec<&'static Hero>,
    /// Money returned for duplicate pulls.
    pub refund: f64,
}

impl SummonOutcome {
    /// Highest-rarity draw, earliest draw winning ties. Presentation
    /// helper; not used by the engines themselves.
    pub fn best(&self) -> Option<&'static Hero> {
        let mut best: Option<&'static Hero> = None;
        for hero in &self.heroes {
            if best.map_or(true, |b| hero.rarity > b.rarity) {
                best = Some(hero);
            }
        }
        best
    }
}

/// Performs `count` sequential draws on a banner.
///
/// The full cost is checked up front; on `InsufficientFunds` nothing is
/// mutated. The pity rule is per-draw: a counter at 1 (or below) forces
/// the guaranteed rarity on that draw and resets the counter to the
/// ceiling. Duplicates refund `floor(cost * refund_rate)` each instead of
/// growing the collection.
pub fn summon(
    state: &mut GameState,
    banner_id: &str,
    count: u32,
    rng: &mut impl Rng,
) -> Result<SummonOutcome, GameError> {
    let banner =
        banner_by_id(banner_id).ok_or_else(|| GameError::UnknownBanner(banner_id.to_string()))?;

    let total_cost = banner.cost * count as f64;
    if state.resources.money < total_cost {
        return Err(GameError::InsufficientFunds {
            needed: total_cost,
            available: state.resources.money,
        });
    }
    state.spend(total_cost);

    let mut heroes = Vec::with_capacity(count as usize);
    let mut refund = 0.0;
    for _ in 0..count {
        let rarity = draw_rarity(state, banner, rng);
        let pool = banner.pool_for(rarity);
        debug_assert!(!pool.is_empty());
        let hero_id = pool[rng.gen_range(0..pool.len())];
        if state.heroes.collection.iter().any(|h| h == hero_id) {
            refund += (banner.cost * banner.refund_rate).floor();
        } else {
            state.heroes.collection.push(hero_id.to_string());
        }
        if let Some(hero) = hero_by_id(hero_id) {
            heroes.push(hero);
        }
    }

    state.resources.money += refund;
    state.stats.gacha_pulls += count as u64;

    Ok(SummonOutcome { heroes, refund })
}

/// Selects the banner later summons draw from.
pub fn select_banner(state: &mut GameState, banner_id: &str) -> Result<(), GameError> {
    let banner =
        banner_by_id(banner_id).ok_or_else(|| GameError::UnknownBanner(banner_id.to_string()))?;
    state.active_banner = Some(banner.id.to_string());
    Ok(())
}

/// Summons on the currently selected banner.
pub fn summon_active(
    state: &mut GameState,
    count: u32,
    rng: &mut impl Rng,
) -> Result<SummonOutcome, GameError> {
    let banner_id = state
        .active_banner
        .clone()
        .ok_or(GameError::NoBannerSelected)?;
    summon(state, &banner_id, count, rng)
}

fn draw_rarity(state: &mut GameState, banner: &Banner, rng: &mut impl Rng) -> Rarity {
    let pity = state.pity_counter(banner.id);
    if pity <= 1 {
        state.set_pity_counter(banner.id, PITY_CEILING);
        return PITY_GUARANTEED_RARITY;
    }

    let roll: f64 = rng.gen();
    let mut cumulative = 0.0;
    // Float rounding can leave the walk a hair short of 1.0, so the
    // fallthrough stays Common.
    let mut drawn = Rarity::Common;
    for (rarity, weight) in banner.rates {
        cumulative += weight;
        if roll < cumulative {
            drawn = *rarity;
            break;
        }
    }

    // A natural top-rarity hit counts the same as the guarantee.
    if drawn >= PITY_GUARANTEED_RARITY {
        state.set_pity_counter(banner.id, PITY_CEILING);
    } else {
        state.set_pity_counter(banner.id, pity - 1);
    }
    drawn
}
