//! The outcome table: (Move, Move) -> health deltas + narrative key.
//!
//! ## Totality
//!
//! [`Outcome::for_pair`] is a single exhaustive 25-arm match with no
//! wildcard, so the compiler proves every ordered pair is defined. The
//! mirror arms are written out explicitly rather than derived, and
//! mirror consistency is verified by property tests.
//!
//! ## Narrative keys
//!
//! There are 15 distinct outcomes; a mirror pair reuses its canonical
//! key with `reversed` set and the deltas positionally swapped. The
//! engine exposes keys only - flavor text is a renderer concern.
//!
//! The magnitudes are deliberately asymmetric (Slash/Stab/Dodge/Block
//! form a lopsided counter cycle, and Potion is interrupted by Slash
//! but by nothing else), which is why there is no uniform formula.

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;

/// Identifier for the narrative text of one resolved round.
///
/// For asymmetric keys the narrative has two roles; the first role is
/// the actor of the first move named by the key. [`Outcome::roles`]
/// orders player names accordingly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NarrativeKey {
    /// Both slash; both are hit hard.
    MutualSlash,
    /// The stab lands first and stops the slash cold.
    SlashHaltedByStab,
    /// The dodge evades the slash and counters into an opening.
    SlashEvaded,
    /// The block absorbs the slash; chip damage only.
    SlashBlocked,
    /// The slash interrupts the potion mid-swallow.
    PotionInterrupted,
    /// Both stab; both are pierced.
    MutualStab,
    /// The stab catches the dodger before they can move.
    StabCatchesDodge,
    /// The block parries the stab and counters.
    StabParried,
    /// The potion completes despite a graze from the stab.
    PotionThroughGraze,
    /// Both dodge; nothing happens.
    MutualDodge,
    /// One dodges, one blocks; nothing happens.
    DodgeMeetsBlock,
    /// The dodge was wasted; the potion completes safely.
    DodgeWastedOnPotion,
    /// Both block; nothing happens.
    MutualBlock,
    /// The block was wasted; the potion completes safely.
    BlockWastedOnPotion,
    /// Both drink; both heal.
    MutualPotion,
}

/// Result of resolving one ordered pair of moves.
///
/// `delta_a` applies to the player who chose the first move of the
/// pair, `delta_b` to the second. Positive deltas heal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Health change for player A.
    pub delta_a: i32,
    /// Health change for player B.
    pub delta_b: i32,
    /// Which narrative this round produced.
    pub narrative: NarrativeKey,
    /// Whether the narrative's roles are (B, A) rather than (A, B).
    pub reversed: bool,
}

impl Outcome {
    const fn new(delta_a: i32, delta_b: i32, narrative: NarrativeKey) -> Self {
        Self {
            delta_a,
            delta_b,
            narrative,
            reversed: false,
        }
    }

    const fn mirror(delta_a: i32, delta_b: i32, narrative: NarrativeKey) -> Self {
        Self {
            delta_a,
            delta_b,
            narrative,
            reversed: true,
        }
    }

    /// Look up the outcome for an ordered pair of moves.
    ///
    /// `a` is player A's move, `b` player B's. Defined for all 25
    /// ordered pairs.
    #[must_use]
    pub const fn for_pair(a: Move, b: Move) -> Outcome {
        use Move::{Block, Dodge, Potion, Slash, Stab};
        use NarrativeKey::*;

        match (a, b) {
            // Canonical orientations (roles read in pair order).
            (Slash, Slash) => Outcome::new(-3, -3, MutualSlash),
            (Slash, Stab) => Outcome::new(-1, 0, SlashHaltedByStab),
            (Slash, Dodge) => Outcome::new(-3, 0, SlashEvaded),
            (Slash, Block) => Outcome::new(0, -1, SlashBlocked),
            (Slash, Potion) => Outcome::new(0, -3, PotionInterrupted),
            (Stab, Stab) => Outcome::new(-1, -1, MutualStab),
            (Stab, Dodge) => Outcome::new(0, -1, StabCatchesDodge),
            (Stab, Block) => Outcome::new(-2, 0, StabParried),
            (Stab, Potion) => Outcome::new(0, 1, PotionThroughGraze),
            (Dodge, Dodge) => Outcome::new(0, 0, MutualDodge),
            (Dodge, Block) => Outcome::new(0, 0, DodgeMeetsBlock),
            (Dodge, Potion) => Outcome::new(0, 2, DodgeWastedOnPotion),
            (Block, Block) => Outcome::new(0, 0, MutualBlock),
            (Block, Potion) => Outcome::new(0, 2, BlockWastedOnPotion),
            (Potion, Potion) => Outcome::new(2, 2, MutualPotion),

            // Positional mirrors: deltas swapped, same key, roles (B, A).
            (Stab, Slash) => Outcome::mirror(0, -1, SlashHaltedByStab),
            (Dodge, Slash) => Outcome::mirror(0, -3, SlashEvaded),
            (Block, Slash) => Outcome::mirror(-1, 0, SlashBlocked),
            (Potion, Slash) => Outcome::mirror(-3, 0, PotionInterrupted),
            (Dodge, Stab) => Outcome::mirror(-1, 0, StabCatchesDodge),
            (Block, Stab) => Outcome::mirror(0, -2, StabParried),
            (Potion, Stab) => Outcome::mirror(1, 0, PotionThroughGraze),
            (Block, Dodge) => Outcome::mirror(0, 0, DodgeMeetsBlock),
            (Potion, Dodge) => Outcome::mirror(2, 0, DodgeWastedOnPotion),
            (Potion, Block) => Outcome::mirror(2, 0, BlockWastedOnPotion),
        }
    }

    /// Order two player names by the narrative's roles.
    ///
    /// Returns `(name_a, name_b)` for canonical outcomes and the swap
    /// for mirrored ones, so renderers can substitute names without
    /// knowing which player chose which move.
    #[must_use]
    pub fn roles<'a>(&self, name_a: &'a str, name_b: &'a str) -> (&'a str, &'a str) {
        if self.reversed {
            (name_b, name_a)
        } else {
            (name_a, name_b)
        }
    }
}
