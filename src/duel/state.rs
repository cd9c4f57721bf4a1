//! The match loop: a round-phase state machine over two players.
//!
//! ## Phases
//!
//! `AwaitingMoves` -> `Resolving` -> `Reporting` -> back to
//! `AwaitingMoves`, or `Terminated` once either player's health is at
//! or below zero after a reporting clamp.
//!
//! The stepwise API (`submit_moves`, `resolve`, `report`) exposes each
//! transition; [`Duel::run`] drives the machine to completion against a
//! [`MoveSource`] and a [`DuelObserver`]. Calling a step outside its
//! phase is a programmer error and panics.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::error::DuelError;
use crate::core::moves::Move;
use crate::core::player::{HealthBucket, Player};
use crate::rules::outcome::Outcome;
use crate::rules::resolver::resolve_round;

use super::observer::DuelObserver;
use super::source::MoveSource;

/// Where the match loop currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Collecting one move per player.
    AwaitingMoves,
    /// Both moves captured; resolution pending.
    Resolving,
    /// Deltas applied; clamp, status and termination check pending.
    Reporting,
    /// The match is over; see [`Duel::result`].
    Terminated,
}

/// Terminal outcome of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    /// Exactly one player survived.
    Win { winner: String, loser: String },
    /// Both players reached zero or below in the same round.
    DoubleDefeat { first: String, second: String },
}

/// Post-clamp status for one player, produced in the reporting phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    /// Health classification on the clamped value.
    pub bucket: HealthBucket,
    /// Clamped health.
    pub health: i32,
}

/// One two-player match, owned state and round loop.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duel {
    players: [Player; 2],
    round: u32,
    phase: MatchPhase,
    result: Option<MatchResult>,
}

impl Duel {
    /// Start a match: both players at full health, round 1,
    /// awaiting moves.
    #[must_use]
    pub fn new(name_a: impl Into<String>, name_b: impl Into<String>) -> Self {
        Self {
            players: [Player::new(name_a), Player::new(name_b)],
            round: 1,
            phase: MatchPhase::AwaitingMoves,
            result: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Current round number (1-based).
    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Player A.
    #[must_use]
    pub fn player_a(&self) -> &Player {
        &self.players[0]
    }

    /// Player B.
    #[must_use]
    pub fn player_b(&self) -> &Player {
        &self.players[1]
    }

    /// Terminal result, once the match has terminated.
    #[must_use]
    pub fn result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Record both players' moves for this round.
    ///
    /// Transition: `AwaitingMoves` -> `Resolving`. Both moves are
    /// captured before any resolution begins, so acquisition order
    /// has no gameplay effect.
    pub fn submit_moves(&mut self, move_a: Move, move_b: Move) {
        assert_eq!(
            self.phase,
            MatchPhase::AwaitingMoves,
            "submit_moves() outside AwaitingMoves phase"
        );
        self.players[0].select_card(move_a);
        self.players[1].select_card(move_b);
        self.phase = MatchPhase::Resolving;
        debug!(round = self.round, %move_a, %move_b, "moves submitted");
    }

    /// Resolve the round: apply both deltas via the outcome table.
    ///
    /// Transition: `Resolving` -> `Reporting`. No clamping and no
    /// termination check here.
    pub fn resolve(&mut self) -> Result<Outcome, DuelError> {
        assert_eq!(
            self.phase,
            MatchPhase::Resolving,
            "resolve() outside Resolving phase"
        );
        let [a, b] = &mut self.players;
        let outcome = resolve_round(a, b)?;
        self.phase = MatchPhase::Reporting;
        Ok(outcome)
    }

    /// Clamp health, classify both players, and check termination.
    ///
    /// Transition: `Reporting` -> `AwaitingMoves` (round counter
    /// incremented) or `Terminated`. Buckets are evaluated on the
    /// clamped health; negative health is not floored, so a single
    /// round can defeat both players at once.
    pub fn report(&mut self) -> [PlayerStatus; 2] {
        assert_eq!(
            self.phase,
            MatchPhase::Reporting,
            "report() outside Reporting phase"
        );
        for player in &mut self.players {
            player.clamp_health();
        }

        let statuses = [
            PlayerStatus {
                bucket: self.players[0].bucket(),
                health: self.players[0].health(),
            },
            PlayerStatus {
                bucket: self.players[1].bucket(),
                health: self.players[1].health(),
            },
        ];

        let a_down = self.players[0].is_defeated();
        let b_down = self.players[1].is_defeated();

        if a_down || b_down {
            let result = if a_down && b_down {
                MatchResult::DoubleDefeat {
                    first: self.players[0].name().to_string(),
                    second: self.players[1].name().to_string(),
                }
            } else if b_down {
                MatchResult::Win {
                    winner: self.players[0].name().to_string(),
                    loser: self.players[1].name().to_string(),
                }
            } else {
                MatchResult::Win {
                    winner: self.players[1].name().to_string(),
                    loser: self.players[0].name().to_string(),
                }
            };
            info!(round = self.round, result = ?result, "duel terminated");
            self.result = Some(result);
            self.phase = MatchPhase::Terminated;
        } else {
            self.round += 1;
            self.phase = MatchPhase::AwaitingMoves;
        }

        statuses
    }

    /// Drive the match to completion.
    ///
    /// Each round: acquire both moves from `source` (player A first,
    /// sequentially), resolve, emit the narrative and both statuses to
    /// `observer`, then check termination. Acquisition errors abort
    /// immediately and surface to the caller.
    pub fn run(
        &mut self,
        source: &mut dyn MoveSource,
        observer: &mut dyn DuelObserver,
    ) -> Result<MatchResult, DuelError> {
        while self.phase != MatchPhase::Terminated {
            observer.round_started(self.round);

            let move_a = source.acquire(self.players[0].name())?;
            let move_b = source.acquire(self.players[1].name())?;
            self.submit_moves(move_a, move_b);

            let outcome = self.resolve()?;
            let (first, second) = outcome.roles(self.players[0].name(), self.players[1].name());
            observer.narrative(outcome.narrative, first, second);

            let statuses = self.report();
            for (player, status) in self.players.iter().zip(statuses) {
                observer.status(player.name(), status.bucket, status.health);
            }
        }

        let result = self
            .result
            .clone()
            .expect("terminated duel must have a result");
        observer.finished(&result);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::MAX_HEALTH;
    use crate::duel::observer::NullObserver;
    use crate::duel::source::ScriptedMoves;

    #[test]
    fn test_initial_state() {
        let duel = Duel::new("Aldric", "Beira");
        assert_eq!(duel.phase(), MatchPhase::AwaitingMoves);
        assert_eq!(duel.round(), 1);
        assert_eq!(duel.player_a().health(), MAX_HEALTH);
        assert_eq!(duel.player_b().health(), MAX_HEALTH);
        assert!(duel.result().is_none());
    }

    #[test]
    fn test_full_round_advances_counter() {
        let mut duel = Duel::new("Aldric", "Beira");
        duel.submit_moves(Move::Slash, Move::Slash);
        assert_eq!(duel.phase(), MatchPhase::Resolving);

        duel.resolve().unwrap();
        assert_eq!(duel.phase(), MatchPhase::Reporting);

        let statuses = duel.report();
        assert_eq!(duel.phase(), MatchPhase::AwaitingMoves);
        assert_eq!(duel.round(), 2);
        assert_eq!(statuses[0].health, 3);
        assert_eq!(statuses[0].bucket, HealthBucket::Wounded);
        assert_eq!(statuses[1].bucket, HealthBucket::Wounded);
    }

    #[test]
    fn test_report_clamps_overheal() {
        let mut duel = Duel::new("Aldric", "Beira");
        duel.submit_moves(Move::Potion, Move::Potion);
        duel.resolve().unwrap();

        let statuses = duel.report();
        assert_eq!(statuses[0].health, MAX_HEALTH);
        assert_eq!(statuses[1].health, MAX_HEALTH);
        assert_eq!(duel.phase(), MatchPhase::AwaitingMoves);
    }

    #[test]
    fn test_win_detection() {
        let mut duel = Duel::new("Aldric", "Beira");

        // Beira slashes into Aldric's dodge twice: 6 -> 3 -> 0.
        duel.submit_moves(Move::Dodge, Move::Slash);
        duel.resolve().unwrap();
        duel.report(); // Beira 3, Aldric 6
        duel.submit_moves(Move::Dodge, Move::Slash);
        duel.resolve().unwrap();
        duel.report(); // Beira 0

        assert_eq!(duel.phase(), MatchPhase::Terminated);
        assert_eq!(
            duel.result(),
            Some(&MatchResult::Win {
                winner: "Aldric".to_string(),
                loser: "Beira".to_string(),
            })
        );
    }

    #[test]
    fn test_double_defeat_in_same_round() {
        let mut duel = Duel::new("Aldric", "Beira");

        // Two rounds of mutual slash: 6 -> 3 -> 0 for both.
        duel.submit_moves(Move::Slash, Move::Slash);
        duel.resolve().unwrap();
        duel.report();

        duel.submit_moves(Move::Slash, Move::Slash);
        duel.resolve().unwrap();
        let statuses = duel.report();

        assert_eq!(statuses[0].bucket, HealthBucket::Defeated);
        assert_eq!(statuses[1].bucket, HealthBucket::Defeated);
        assert_eq!(duel.phase(), MatchPhase::Terminated);
        assert_eq!(
            duel.result(),
            Some(&MatchResult::DoubleDefeat {
                first: "Aldric".to_string(),
                second: "Beira".to_string(),
            })
        );
    }

    #[test]
    fn test_negative_health_still_double_defeat() {
        let mut duel = Duel::new("Aldric", "Beira");

        // Bring Aldric to 3 and Beira to 1, then mutual slash:
        // 0 and -2, both defeated in the same pass.
        duel.submit_moves(Move::Slash, Move::Slash); // 3 / 3
        duel.resolve().unwrap();
        duel.report();
        duel.submit_moves(Move::Slash, Move::Block); // 3 / 2
        duel.resolve().unwrap();
        duel.report();
        duel.submit_moves(Move::Slash, Move::Block); // 3 / 1
        duel.resolve().unwrap();
        duel.report();
        duel.submit_moves(Move::Slash, Move::Slash); // 0 / -2
        duel.resolve().unwrap();
        duel.report();

        assert_eq!(duel.player_a().health(), 0);
        assert_eq!(duel.player_b().health(), -2);
        assert!(matches!(
            duel.result(),
            Some(MatchResult::DoubleDefeat { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "resolve() outside Resolving phase")]
    fn test_resolve_requires_submitted_moves() {
        let mut duel = Duel::new("Aldric", "Beira");
        let _ = duel.resolve();
    }

    #[test]
    #[should_panic(expected = "report() outside Reporting phase")]
    fn test_report_requires_resolution() {
        let mut duel = Duel::new("Aldric", "Beira");
        duel.submit_moves(Move::Dodge, Move::Dodge);
        duel.report();
    }

    #[test]
    fn test_run_with_scripted_source() {
        let mut duel = Duel::new("Aldric", "Beira");
        let mut source = ScriptedMoves::new([
            Move::Slash,
            Move::Slash, // 3 / 3
            Move::Slash,
            Move::Slash, // 0 / 0
        ]);

        let result = duel.run(&mut source, &mut NullObserver).unwrap();
        assert!(matches!(result, MatchResult::DoubleDefeat { .. }));
        assert_eq!(duel.phase(), MatchPhase::Terminated);
    }

    #[test]
    fn test_run_surfaces_exhausted_script() {
        let mut duel = Duel::new("Aldric", "Beira");
        let mut source = ScriptedMoves::new([Move::Dodge, Move::Dodge]);

        // One harmless round, then the script runs dry.
        let err = duel.run(&mut source, &mut NullObserver).unwrap_err();
        assert!(matches!(err, DuelError::ScriptExhausted));
        assert_eq!(duel.phase(), MatchPhase::AwaitingMoves);
        assert_eq!(duel.round(), 2);
    }

    #[test]
    fn test_duel_serde_round_trip() {
        let mut duel = Duel::new("Aldric", "Beira");
        duel.submit_moves(Move::Stab, Move::Block);
        duel.resolve().unwrap();
        duel.report();

        let json = serde_json::to_string(&duel).unwrap();
        let back: Duel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, duel);
    }
}
