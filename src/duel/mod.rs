//! Match orchestration: the round state machine and its boundaries.

pub mod observer;
pub mod source;
pub mod state;

pub use observer::{DuelObserver, NullObserver};
pub use source::{MoveSource, RandomMoves, ScriptedMoves};
pub use state::{Duel, MatchPhase, MatchResult, PlayerStatus};
