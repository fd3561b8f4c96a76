use super::{DefensePosition, Move, MoveId, MoveState};

/// A defensive move.
///
/// Besides evading, a defense carries two multipliers:
/// - `damage_multiplier` scales the damage its owner deals this round
///   (counter-style defenses are above 1).
/// - `incoming_damage_multiplier` scales the damage its owner receives
///   (mitigating defenses are below 1).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Defense {
    pub id: MoveId,
    pub position: DefensePosition,
    /// Rounds the defense stays unavailable after use.
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default = "neutral"))]
    pub damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default = "neutral"))]
    pub incoming_damage_multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: MoveState,
}

#[cfg(feature = "serde")]
const fn neutral() -> f64 {
    1.0
}

impl Defense {
    pub fn new(id: MoveId, position: DefensePosition, cooldown: u32) -> Self {
        Self {
            id,
            position,
            cooldown,
            damage_multiplier: 1.0,
            incoming_damage_multiplier: 1.0,
            state: MoveState::Initial,
        }
    }

    #[must_use]
    pub fn with_damage_multiplier(mut self, multiplier: f64) -> Self {
        self.damage_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_incoming_damage_multiplier(mut self, multiplier: f64) -> Self {
        self.incoming_damage_multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: MoveState) -> Self {
        self.state = state;
        self
    }
}

impl Move for Defense {
    fn id(&self) -> MoveId {
        self.id
    }

    fn state(&self) -> MoveState {
        self.state
    }

    fn set_state(&mut self, state: MoveState) {
        self.state = state;
    }

    fn cooldown(&self) -> u32 {
        self.cooldown
    }
}
