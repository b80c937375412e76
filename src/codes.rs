//! Gift code redemption. Codes pay out once per profile.

use crate::core::errors::GameError;
use crate::core::game_state::GameState;

const CODES: &[(&str, f64)] = &[("deeprock", 25_000_000.0)];

/// Redeems a gift code. Matching is case-insensitive with surrounding
/// whitespace ignored.
pub fn redeem_code(state: &mut GameState, code: &str) -> Result<f64, GameError> {
    let normalized = code.trim().to_lowercase();
    let Some(&(id, amount)) = CODES.iter().find(|(id, _)| *id == normalized) else {
        return Err(GameError::InvalidCode);
    };
    if state.used_codes.iter().any(|used| used == id) {
        return Err(GameError::CodeAlreadyUsed);
    }
    state.used_codes.push(id.to_string());
    state.earn_money(amount);
    Ok(amount)
}
