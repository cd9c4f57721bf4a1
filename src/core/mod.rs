//! Core engine types: moves, players, errors.
//!
//! These are the leaf building blocks consumed by the resolution rules
//! and the match loop.

pub mod error;
pub mod moves;
pub mod player;

pub use error::DuelError;
pub use moves::Move;
pub use player::{HealthBucket, Player, MAX_HEALTH};
