//! Combat result types and attack resolution.

use crate::round::Loadout;

use super::damage::total_damage;
use super::hit::did_dodge;

/// Terminal classification of one attacker/defender pair in a round.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The attacker selected no attack.
    NoAttack,
    /// The defender evaded the attack.
    Miss,
    /// The attack landed without defeating the defender.
    Damage(f64),
    /// The attack dealt at least the defender's remaining health.
    Kill(f64),
}

impl Outcome {
    /// Damage to subtract from the defender's health (0 for misses).
    pub const fn damage(&self) -> f64 {
        match self {
            Self::NoAttack | Self::Miss => 0.0,
            Self::Damage(amount) | Self::Kill(amount) => *amount,
        }
    }

    pub const fn is_kill(&self) -> bool {
        matches!(self, Self::Kill(_))
    }

    /// Returns true if an attack connected.
    pub const fn landed(&self) -> bool {
        matches!(self, Self::Damage(_) | Self::Kill(_))
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoAttack => "no_attack",
            Self::Miss => "miss",
            Self::Damage(_) => "damage",
            Self::Kill(_) => "kill",
        }
    }
}

/// Resolve `attacker`'s selected attack against `defender`.
///
/// This is the main entry point for combat resolution.
///
/// 1. No selected attack yields [`Outcome::NoAttack`].
/// 2. A matching lateral defense yields [`Outcome::Miss`].
/// 3. Otherwise damage is computed with [`total_damage`]; it is a
///    [`Outcome::Kill`] when it reaches `defender_health` and an
///    [`Outcome::Damage`] below it.
///
/// An attack that lands for 0 (zero base, zero incoming multiplier or zero
/// reduction) is still `Damage(0.0)` against a living defender.
///
/// `second_attacker_reduction` is 1 unless the caller determined that this
/// attacker strikes second in a round where both participants attack.
///
/// Pure and deterministic: identical inputs always give identical outcomes.
pub fn resolve(
    attacker: &Loadout,
    defender: &Loadout,
    defender_health: f64,
    second_attacker_reduction: f64,
) -> Outcome {
    let Some(attack) = attacker.selected_attack() else {
        return Outcome::NoAttack;
    };

    let defense = defender.selected_defense().map(|d| d.position);
    if did_dodge(attack.position, defense) {
        return Outcome::Miss;
    }

    let damage = total_damage(attacker, defender, second_attacker_reduction);
    if damage >= defender_health {
        Outcome::Kill(damage)
    } else {
        Outcome::Damage(damage)
    }
}
