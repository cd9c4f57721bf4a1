//! # duel-engine
//!
//! A deterministic two-player card duel engine. Each round both players
//! secretly select one of five moves; the ordered pair is resolved
//! against a fixed 5x5 outcome table that yields a health delta for
//! each side and a narrative key. Rounds repeat until a player's health
//! reaches zero or below.
//!
//! ## Design Principles
//!
//! 1. **Total table**: every one of the 25 ordered move pairs has an
//!    explicit entry, checked exhaustively by the compiler. No derived
//!    mirror logic at lookup time.
//!
//! 2. **Keys, not text**: the engine emits stable narrative and status
//!    keys; rendering (and localization) happens behind the
//!    [`DuelObserver`] boundary.
//!
//! 3. **Injected input**: move acquisition is a [`MoveSource`]
//!    capability, keeping terminal and OS specifics out of the core.
//!
//! ## Modules
//!
//! - `core`: moves, player state, health buckets, errors
//! - `rules`: the outcome table and the round resolver
//! - `duel`: the match-loop state machine and its boundary traits

pub mod core;
pub mod duel;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{DuelError, HealthBucket, Move, Player, MAX_HEALTH};

pub use crate::rules::{resolve_round, NarrativeKey, Outcome};

pub use crate::duel::{
    Duel, DuelObserver, MatchPhase, MatchResult, MoveSource, NullObserver, PlayerStatus,
    RandomMoves, ScriptedMoves,
};
