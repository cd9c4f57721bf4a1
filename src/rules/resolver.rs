//! One-round resolution: apply the outcome table to both players.

use tracing::debug;

use crate::core::error::DuelError;
use crate::core::player::Player;

use super::outcome::Outcome;

/// Resolve one round between two players.
///
/// Reads both selected cards, looks up the outcome table, and applies
/// both health deltas unconditionally - exactly once each, every call.
/// Clamping and the termination check belong to the match loop and
/// happen immediately after.
///
/// Resolving while either player has no card selected is an internal
/// invariant violation and fails with [`DuelError::InvalidPlayerState`].
pub fn resolve_round(a: &mut Player, b: &mut Player) -> Result<Outcome, DuelError> {
    let card_a = a
        .card()
        .ok_or_else(|| DuelError::InvalidPlayerState(a.name().to_string()))?;
    let card_b = b
        .card()
        .ok_or_else(|| DuelError::InvalidPlayerState(b.name().to_string()))?;

    let outcome = Outcome::for_pair(card_a, card_b);
    a.apply_delta(outcome.delta_a);
    b.apply_delta(outcome.delta_b);

    debug!(
        card_a = %card_a,
        card_b = %card_b,
        delta_a = outcome.delta_a,
        delta_b = outcome.delta_b,
        "round resolved"
    );

    Ok(outcome)
}
