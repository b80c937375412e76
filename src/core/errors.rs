//! Domain errors. Every variant is recoverable: the session surfaces the
//! message and stays playable. Out-of-range dig targets are not errors at
//! all (the grid silently ignores them, see [`crate::mine::logic::dig`]).

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// Purchase or summon attempted with too little money.
    InsufficientFunds { needed: f64, available: f64 },
    /// Action gated by a cooldown that has not expired.
    OnCooldown { remaining_seconds: f64 },
    /// Equip slot limit or upgrade cap reached.
    CapacityReached { what: &'static str, cap: u32 },
    /// Banner id not present in the catalog.
    UnknownBanner(String),
    /// Summon requested with no banner selected.
    NoBannerSelected,
    /// Gift code not recognized.
    InvalidCode,
    /// Gift code already redeemed on this save.
    CodeAlreadyUsed,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InsufficientFunds { needed, available } => {
                write!(f, "not enough money: need {needed:.0}, have {available:.0}")
            }
            GameError::OnCooldown { remaining_seconds } => {
                write!(f, "on cooldown for {remaining_seconds:.0}s")
            }
            GameError::CapacityReached { what, cap } => {
                write!(f, "{what} limit reached ({cap})")
            }
            GameError::UnknownBanner(id) => write!(f, "unknown banner '{id}'"),
            GameError::NoBannerSelected => write!(f, "no banner selected"),
            GameError::InvalidCode => write!(f, "invalid gift code"),
            GameError::CodeAlreadyUsed => write!(f, "gift code already used"),
        }
    }
}

impl Error for GameError {}
