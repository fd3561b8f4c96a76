//! Event types for different topics.

use game_core::{Exchange, Health, Outcome, Side};
use serde::{Deserialize, Serialize};

use crate::api::Selection;

/// Events related to the round lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum RoundEvent {
    /// A selection phase opened.
    Started {
        round: u32,
        has_speed_advantage: bool,
    },

    /// Both selections were recorded and validated.
    SelectionsFrozen {
        round: u32,
        player: Selection,
        opponent: Selection,
        /// Hex-encoded round root for replay verification.
        root: String,
    },

    /// A provider did not answer in time and was treated as selecting nothing.
    SelectionTimedOut { round: u32, side: Side },
}

/// Events related to combat resolution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombatEvent {
    pub round: u32,
    pub exchange: Exchange,
    /// Outcomes actually applied, in strike order. A reply voided by a
    /// first-strike kill is absent.
    pub applied: Vec<AppliedOutcome>,
    pub player_health: Health,
    pub opponent_health: Health,
}

/// An outcome applied to the defender's health pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedOutcome {
    pub attacker: Side,
    pub outcome: Outcome,
}

/// Events related to the match as a whole
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    Finished {
        rounds: u32,
        /// `None` for a draw.
        winner: Option<Side>,
    },
}
