//! The five card moves and their symbolic input mapping.
//!
//! Each round both players independently select exactly one `Move`.
//! Moves have no ordering; their interactions are defined entirely by
//! the outcome table in `rules::outcome`.

use serde::{Deserialize, Serialize};

use super::error::DuelError;

/// One of the five cards a player can play in a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Heavy strike. High damage, countered by Stab and Dodge.
    Slash,
    /// Quick pierce. Beats Slash on initiative, parried by Block.
    Stab,
    /// Evade. Counters Slash hard, loses to Stab.
    Dodge,
    /// Guard. Absorbs Slash, punishes Stab.
    Block,
    /// Heal. +2 health unless interrupted by Slash.
    Potion,
}

impl Move {
    /// All five moves, for table enumeration and random selection.
    pub const ALL: [Move; 5] = [
        Move::Slash,
        Move::Stab,
        Move::Dodge,
        Move::Block,
        Move::Potion,
    ];

    /// Map a raw input symbol to a move.
    ///
    /// Symbols: `z` Slash, `c` Stab, `s` Dodge, `d` Block, `y` Potion.
    ///
    /// Anything else fails with [`DuelError::InvalidMove`]; the engine
    /// never substitutes a default move.
    pub fn from_symbol(symbol: char) -> Result<Move, DuelError> {
        match symbol {
            'z' => Ok(Move::Slash),
            'c' => Ok(Move::Stab),
            's' => Ok(Move::Dodge),
            'd' => Ok(Move::Block),
            'y' => Ok(Move::Potion),
            other => Err(DuelError::InvalidMove(other)),
        }
    }

    /// The input symbol for this move.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Move::Slash => 'z',
            Move::Stab => 'c',
            Move::Dodge => 's',
            Move::Block => 'd',
            Move::Potion => 'y',
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Move::Slash => "Slash",
            Move::Stab => "Stab",
            Move::Dodge => "Dodge",
            Move::Block => "Block",
            Move::Potion => "Potion",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_round_trip() {
        for mv in Move::ALL {
            assert_eq!(Move::from_symbol(mv.symbol()).unwrap(), mv);
        }
    }

    #[test]
    fn test_invalid_symbol() {
        let err = Move::from_symbol('q').unwrap_err();
        assert!(matches!(err, DuelError::InvalidMove('q')));
    }

    #[test]
    fn test_all_is_distinct() {
        for (i, a) in Move::ALL.iter().enumerate() {
            for b in &Move::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Move::Slash.to_string(), "Slash");
        assert_eq!(Move::Potion.to_string(), "Potion");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Move::Dodge).unwrap();
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Move::Dodge);
    }
}
