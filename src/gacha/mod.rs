//! Gacha subsystem: banner catalog and summon resolution.

pub mod banners;
pub mod logic;

pub use banners::{all_banners, banner_by_id, Banner};
pub use logic::{select_banner, summon, summon_active, SummonOutcome, PITY_GUARANTEED_RARITY};
