//! Lateral and frontal placement of moves.
//!
//! Positions are what the dodge rule compares: a lateral defense evades an
//! attack thrown on the same side, frontal defenses never evade.

/// Side an attack is thrown from.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AttackPosition {
    Left,
    Right,
}

impl AttackPosition {
    #[inline]
    pub const fn is_left(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// Direction a defender moves to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DefensePosition {
    Left,
    Right,
    /// Steps into the attacker. Never evades, typically amplifies own damage.
    Forward,
    /// Steps away. Never evades, typically mitigates incoming damage.
    Backward,
}

impl DefensePosition {
    /// Returns true for positions that can evade a matching attack.
    #[inline]
    pub const fn is_lateral(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}
