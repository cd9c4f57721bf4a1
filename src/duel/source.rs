//! Move acquisition boundary.
//!
//! The match loop never reads input itself; it asks a [`MoveSource`]
//! for one move per player per round. Console prompting, raw-symbol
//! sanitizing and re-prompting live behind this trait, outside the
//! engine. Two implementations ship with the crate for driving tests
//! and simulations.

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::error::DuelError;
use crate::core::moves::Move;

/// Supplies one move per player per round.
///
/// Implementations may block while awaiting input. Returning an error
/// aborts the match loop; the engine never substitutes a default move.
pub trait MoveSource {
    /// Acquire the next move for the named player.
    fn acquire(&mut self, player_name: &str) -> Result<Move, DuelError>;
}

/// A fixed sequence of moves, consumed in acquisition order.
///
/// Acquisition alternates A, B, A, B within the script. Running dry
/// fails with [`DuelError::ScriptExhausted`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    queue: VecDeque<Move>,
}

impl ScriptedMoves {
    /// Create a script from moves in acquisition order.
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            queue: moves.into_iter().collect(),
        }
    }

    /// Moves remaining in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn acquire(&mut self, _player_name: &str) -> Result<Move, DuelError> {
        self.queue.pop_front().ok_or(DuelError::ScriptExhausted)
    }
}

/// Uniformly random moves from a seeded ChaCha8 stream.
///
/// Same seed, same sequence, so simulated matches replay exactly.
#[derive(Clone, Debug)]
pub struct RandomMoves {
    rng: ChaCha8Rng,
}

impl RandomMoves {
    /// Create a random source with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl MoveSource for RandomMoves {
    fn acquire(&mut self, _player_name: &str) -> Result<Move, DuelError> {
        let idx = self.rng.gen_range(0..Move::ALL.len());
        Ok(Move::ALL[idx])
    }
}
