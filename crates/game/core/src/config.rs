/// Combat constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Hit points each participant starts a match with.
    pub max_health: f64,
    /// Damage factor applied to the participant that strikes second when both
    /// attack in the same round. 1 leaves damage unchanged.
    pub second_attacker_reduction: f64,
}

impl CombatConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ATTACKS: usize = 8;
    pub const MAX_DEFENSES: usize = 8;
    pub const MAX_MOVE_ID_LEN: usize = 32;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_MAX_HEALTH: f64 = 100.0;
    pub const DEFAULT_SECOND_ATTACKER_REDUCTION: f64 = 1.0;

    pub fn new() -> Self {
        Self {
            max_health: Self::DEFAULT_MAX_HEALTH,
            second_attacker_reduction: Self::DEFAULT_SECOND_ATTACKER_REDUCTION,
        }
    }

    #[must_use]
    pub fn with_max_health(mut self, max_health: f64) -> Self {
        self.max_health = max_health;
        self
    }

    #[must_use]
    pub fn with_second_attacker_reduction(mut self, reduction: f64) -> Self {
        self.second_attacker_reduction = reduction;
        self
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
