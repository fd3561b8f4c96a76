//! Damage calculation and application.

use crate::round::Loadout;

/// Intermediate terms of a damage calculation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageBreakdown {
    pub base: f64,
    /// Extra damage from the attacker's own defense choice.
    pub defend_delta: f64,
    /// Extra damage from the attack's fire boost.
    pub fire_delta: f64,
    /// Defender's incoming-damage multiplier.
    pub incoming_multiplier: f64,
    /// Second-attacker reduction supplied by the caller.
    pub reduction: f64,
}

impl DamageBreakdown {
    /// Base damage plus both additive deltas.
    pub fn subtotal(&self) -> f64 {
        self.base + self.defend_delta + self.fire_delta
    }

    /// Final damage after the defender's mitigation and the reduction factor.
    pub fn total(&self) -> f64 {
        self.subtotal() * self.incoming_multiplier * self.reduction
    }
}

/// Break down the damage `attacker` deals to `defender` this round.
///
/// # Formula
///
/// ```text
/// base         = selected attack damage                 (0 without an attack)
/// defend_delta = base × own defense damage_multiplier − base   (multiplier 1 without a defense)
/// fire_delta   = base × fire boost multiplier − base           (multiplier 1 when idle)
/// total        = (base + defend_delta + fire_delta)
///                × defender incoming_damage_multiplier          (1 without a defense)
///                × second_attacker_reduction                    (1 unless striking second)
/// ```
///
/// The dodge rule is not applied here; see [`super::resolve`].
pub fn damage_breakdown(
    attacker: &Loadout,
    defender: &Loadout,
    second_attacker_reduction: f64,
) -> DamageBreakdown {
    let attack = attacker.selected_attack();
    let base = attack.map_or(0.0, |a| a.damage);

    let defend_multiplier = attacker.selected_defense().map_or(1.0, |d| d.damage_multiplier);
    let fire_multiplier = attack.map_or(1.0, |a| a.fire.boost_multiplier());
    let incoming_multiplier = defender
        .selected_defense()
        .map_or(1.0, |d| d.incoming_damage_multiplier);

    DamageBreakdown {
        base,
        defend_delta: base * defend_multiplier - base,
        fire_delta: base * fire_multiplier - base,
        incoming_multiplier,
        reduction: second_attacker_reduction,
    }
}

/// Total damage `attacker` deals to `defender`, ignoring dodges.
pub fn total_damage(attacker: &Loadout, defender: &Loadout, second_attacker_reduction: f64) -> f64 {
    damage_breakdown(attacker, defender, second_attacker_reduction).total()
}

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: f64, damage: f64) -> f64 {
    (current_hp - damage).max(0.0)
}
