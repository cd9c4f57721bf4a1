//! Player state and health classification.
//!
//! ## Player
//!
//! Mutable per-participant record: an immutable display name, current
//! health, and the card selected for the round in progress.
//!
//! ## HealthBucket
//!
//! Coarse health classification used for status reporting. Pure
//! function of current (clamped) health.

use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Maximum (and starting) health for both players.
pub const MAX_HEALTH: i32 = 6;

/// One duel participant.
///
/// Health starts at [`MAX_HEALTH`] and is mutated once per round by the
/// resolver. The upper-bound clamp is applied separately by the match
/// loop in its reporting phase; negative health is allowed to persist
/// until the termination check, which is what makes a double defeat
/// reachable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    health: i32,
    card: Option<Move>,
}

impl Player {
    /// Create a player at full health with no card selected.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Player name must be non-empty");
        Self {
            name,
            health: MAX_HEALTH,
            card: None,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current health. May be negative transiently within a round.
    #[must_use]
    pub fn health(&self) -> i32 {
        self.health
    }

    /// The card selected for the current round, if any.
    #[must_use]
    pub fn card(&self) -> Option<Move> {
        self.card
    }

    /// Select the card for the current round, replacing any previous one.
    pub fn select_card(&mut self, card: Move) {
        self.card = Some(card);
    }

    /// Apply a health delta from round resolution. No clamping here.
    pub(crate) fn apply_delta(&mut self, delta: i32) {
        self.health += delta;
    }

    /// Clamp health to the upper bound only.
    ///
    /// Idempotent. Never floors negative health; the termination check
    /// runs against the unfloored value.
    pub(crate) fn clamp_health(&mut self) {
        if self.health > MAX_HEALTH {
            self.health = MAX_HEALTH;
        }
    }

    /// Whether this player's health has reached zero or below.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Classify current health for status reporting.
    #[must_use]
    pub fn bucket(&self) -> HealthBucket {
        HealthBucket::classify(self.health)
    }
}

/// Coarse health classification for status display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthBucket {
    /// Health 5-6.
    Healthy,
    /// Health 3-4.
    Wounded,
    /// Health 1-2.
    Critical,
    /// Health 0 or below.
    Defeated,
}

impl HealthBucket {
    /// Classify a health value.
    ///
    /// Expects clamped health (at most [`MAX_HEALTH`]).
    #[must_use]
    pub fn classify(health: i32) -> Self {
        match health {
            h if h >= 5 => HealthBucket::Healthy,
            3..=4 => HealthBucket::Wounded,
            1..=2 => HealthBucket::Critical,
            _ => HealthBucket::Defeated,
        }
    }
}
