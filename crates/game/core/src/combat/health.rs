use super::Outcome;
use super::damage::apply_damage;

/// A participant's hit points as supplied by the health bookkeeper.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

impl Health {
    pub const fn full(max: f64) -> Self {
        Self { current: max, max }
    }

    pub fn is_defeated(&self) -> bool {
        self.current <= 0.0
    }

    /// Remaining hit points as a fraction of the maximum, in `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.max <= 0.0 {
            return 0.0;
        }
        (self.current / self.max).clamp(0.0, 1.0)
    }

    /// Returns the health left after receiving `outcome`.
    #[must_use]
    pub fn after(&self, outcome: &Outcome) -> Self {
        Self {
            current: apply_damage(self.current, outcome.damage()),
            max: self.max,
        }
    }
}
