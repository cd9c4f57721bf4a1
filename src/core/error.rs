//! Error taxonomy for the duel engine.
//!
//! The engine's contract is strict: given two valid moves, resolution
//! always succeeds. Errors only arise at the input boundary
//! (`InvalidMove`, `ScriptExhausted`) or from internal invariant
//! violations (`InvalidPlayerState`), which are programmer errors and
//! not user-recoverable.

use thiserror::Error;

/// Errors produced by the duel engine.
#[derive(Debug, Error)]
pub enum DuelError {
    /// An input symbol did not map to any of the five moves.
    ///
    /// Surfaced immediately to the match-loop caller; the engine never
    /// substitutes a default move. Re-prompting is the input
    /// collaborator's concern.
    #[error("unrecognized move symbol '{0}'")]
    InvalidMove(char),

    /// A round was resolved while a player had no card selected.
    #[error("player '{0}' has no card selected")]
    InvalidPlayerState(String),

    /// A scripted move source ran out of moves.
    #[error("scripted move source ran out of moves")]
    ScriptExhausted,
}
