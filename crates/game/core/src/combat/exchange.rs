//! Two-way resolution of a round.

use crate::round::{Round, Side};

use super::result::{Outcome, resolve};

/// Both directions of one round's combat.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exchange {
    /// Outcome of the player's attack on the opponent.
    pub player: Outcome,
    /// Outcome of the opponent's attack on the player.
    pub opponent: Outcome,
    /// Side that struck first, when both attacked.
    pub first_striker: Option<Side>,
}

impl Exchange {
    /// Outcome of the attack thrown by `side`.
    pub fn by(&self, side: Side) -> Outcome {
        match side {
            Side::Player => self.player,
            Side::Opponent => self.opponent,
        }
    }

    /// Sides in the order their attacks take effect.
    pub fn order(&self) -> [Side; 2] {
        match self.first_striker {
            Some(first) => [first, first.other()],
            None => [Side::Player, Side::Opponent],
        }
    }
}

impl Round {
    /// Resolves both participants' attacks for this round.
    ///
    /// When both sides attack, the side without the speed advantage strikes
    /// second and its damage is scaled by `second_attacker_reduction`. Each
    /// direction is resolved against the defender's health at the start of
    /// the round; applying them (and deciding whether a first-strike kill
    /// voids the reply) is up to the caller.
    pub fn resolve_exchange(
        &self,
        player_health: f64,
        opponent_health: f64,
        second_attacker_reduction: f64,
    ) -> Exchange {
        let both_attack = self.selected_attack(Side::Player).is_some()
            && self.selected_attack(Side::Opponent).is_some();
        let first_striker = both_attack.then(|| self.faster_side());

        let reduction_for = |side: Side| match first_striker {
            Some(first) if first != side => second_attacker_reduction,
            _ => 1.0,
        };

        Exchange {
            player: resolve(
                self.loadout(Side::Player),
                self.loadout(Side::Opponent),
                opponent_health,
                reduction_for(Side::Player),
            ),
            opponent: resolve(
                self.loadout(Side::Opponent),
                self.loadout(Side::Player),
                player_health,
                reduction_for(Side::Opponent),
            ),
            first_striker,
        }
    }
}
