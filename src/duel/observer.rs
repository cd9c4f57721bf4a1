//! Display boundary for narrative, status and result rendering.
//!
//! All methods default to no-ops so an observer implements only what
//! it renders. The engine passes stable keys, never flavor text;
//! localization is entirely the observer's concern.

use crate::core::player::HealthBucket;
use crate::duel::state::MatchResult;
use crate::rules::outcome::NarrativeKey;

/// Receives display events from the match loop.
pub trait DuelObserver {
    /// A new round is about to collect moves.
    fn round_started(&mut self, round: u32) {
        let _ = round;
    }

    /// One round resolved. Names arrive pre-ordered to the key's
    /// narrative roles (see [`crate::rules::Outcome::roles`]).
    fn narrative(&mut self, key: NarrativeKey, first: &str, second: &str) {
        let _ = (key, first, second);
    }

    /// Post-clamp status for one player, once per player per round.
    fn status(&mut self, name: &str, bucket: HealthBucket, health: i32) {
        let _ = (name, bucket, health);
    }

    /// The match terminated.
    fn finished(&mut self, result: &MatchResult) {
        let _ = result;
    }
}

/// Observer that renders nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl DuelObserver for NullObserver {}
