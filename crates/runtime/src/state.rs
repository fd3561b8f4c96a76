//! Match state owned by the runtime.
use game_core::{Exchange, Health, Round, Side};
use serde::{Deserialize, Serialize};

use crate::api::Selection;
use crate::events::AppliedOutcome;

/// Whether the match is still being played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchStatus {
    InProgress,
    /// `winner` is `None` for a draw.
    Finished { winner: Option<Side> },
}

impl MatchStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, MatchStatus::Finished { .. })
    }
}

/// The current round plus both health pools.
///
/// Owned by exactly one [`crate::Runtime`]; the round is replaced by value
/// on every transition.
#[derive(Clone, Debug)]
pub struct MatchState {
    pub round: Round,
    pub player_health: Health,
    pub opponent_health: Health,
    pub status: MatchStatus,
}

impl MatchState {
    pub fn new(round: Round, max_health: f64) -> Self {
        Self {
            round,
            player_health: Health::full(max_health),
            opponent_health: Health::full(max_health),
            status: MatchStatus::InProgress,
        }
    }

    pub fn health(&self, side: Side) -> Health {
        match side {
            Side::Player => self.player_health,
            Side::Opponent => self.opponent_health,
        }
    }

    pub fn health_mut(&mut self, side: Side) -> &mut Health {
        match side {
            Side::Player => &mut self.player_health,
            Side::Opponent => &mut self.opponent_health,
        }
    }

    /// Side with more remaining health, `None` when tied.
    pub fn leader(&self) -> Option<Side> {
        let (p, o) = (self.player_health.current, self.opponent_health.current);
        if p > o {
            Some(Side::Player)
        } else if o > p {
            Some(Side::Opponent)
        } else {
            None
        }
    }
}

/// What happened in one round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoundReport {
    pub round: u32,
    pub player: Selection,
    pub opponent: Selection,
    pub exchange: Exchange,
    pub applied: Vec<AppliedOutcome>,
    pub player_health: Health,
    pub opponent_health: Health,
    pub status: MatchStatus,
}

/// Final result of [`crate::Runtime::run`].
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchSummary {
    pub rounds: u32,
    pub winner: Option<Side>,
    pub player_health: Health,
    pub opponent_health: Health,
}
