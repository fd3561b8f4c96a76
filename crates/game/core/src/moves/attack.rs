use super::{AttackPosition, Move, MoveId, MoveState};

/// Boost sub-state an attack can carry into a round.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FireState {
    /// No boost; damage is unscaled.
    #[default]
    Idle,
    /// Boosted by the given multiplier.
    Boosted(f64),
}

impl FireState {
    /// Damage multiplier contributed by this sub-state (1 when idle).
    pub const fn boost_multiplier(&self) -> f64 {
        match self {
            Self::Idle => 1.0,
            Self::Boosted(multiplier) => *multiplier,
        }
    }
}

/// An offensive move.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub id: MoveId,
    pub position: AttackPosition,
    /// Base damage before any multiplier.
    pub damage: f64,
    /// Rounds the attack stays unavailable after use.
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fire: FireState,
    #[cfg_attr(feature = "serde", serde(default))]
    pub state: MoveState,
}

impl Attack {
    pub fn new(id: MoveId, position: AttackPosition, damage: f64, cooldown: u32) -> Self {
        Self {
            id,
            position,
            damage,
            cooldown,
            fire: FireState::Idle,
            state: MoveState::Initial,
        }
    }

    #[must_use]
    pub fn with_fire(mut self, fire: FireState) -> Self {
        self.fire = fire;
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: MoveState) -> Self {
        self.state = state;
        self
    }
}

impl Move for Attack {
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
