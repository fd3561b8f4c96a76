//! One participant's ordered attacks and defenses.

use arrayvec::ArrayVec;

use crate::config::CombatConfig;
use crate::error::{LoadoutError, MoveSlot, SelectionError};
use crate::moves::{Attack, Defense, Move, MoveState};

/// Collection of attacks owned by a participant.
pub type Attacks = ArrayVec<Attack, { CombatConfig::MAX_ATTACKS }>;

/// Collection of defenses owned by a participant.
pub type Defenses = ArrayVec<Defense, { CombatConfig::MAX_DEFENSES }>;

/// A participant's move collections for one round.
///
/// Index `n` names the same move kind in every round of a match; advancing
/// only ever touches move states.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    attacks: Attacks,
    defenses: Defenses,
}

impl Loadout {
    pub fn new(
        attacks: impl IntoIterator<Item = Attack>,
        defenses: impl IntoIterator<Item = Defense>,
    ) -> Result<Self, LoadoutError> {
        Ok(Self {
            attacks: collect_bounded(attacks, MoveSlot::Attack)?,
            defenses: collect_bounded(defenses, MoveSlot::Defense)?,
        })
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn defenses(&self) -> &[Defense] {
        &self.defenses
    }

    /// Returns the selected attack.
    ///
    /// If several attacks are erroneously marked selected, the first in
    /// collection order wins. Use [`Loadout::validate`] to reject that input.
    pub fn selected_attack(&self) -> Option<&Attack> {
        first_selected(&self.attacks)
    }

    /// Returns the selected defense, first in order on ties.
    pub fn selected_defense(&self) -> Option<&Defense> {
        first_selected(&self.defenses)
    }

    /// Iterates `(index, attack)` pairs that may be selected this round.
    pub fn selectable_attacks(&self) -> impl Iterator<Item = (usize, &Attack)> + '_ {
        selectable(&self.attacks)
    }

    /// Iterates `(index, defense)` pairs that may be selected this round.
    pub fn selectable_defenses(&self) -> impl Iterator<Item = (usize, &Defense)> + '_ {
        selectable(&self.defenses)
    }

    /// Marks the attack at `index` selected and its selectable siblings unselected.
    pub fn select_attack(&mut self, index: usize) -> Result<&Attack, SelectionError> {
        select(&mut self.attacks, index, MoveSlot::Attack)?;
        Ok(&self.attacks[index])
    }

    /// Marks the defense at `index` selected and its selectable siblings unselected.
    pub fn select_defense(&mut self, index: usize) -> Result<&Defense, SelectionError> {
        select(&mut self.defenses, index, MoveSlot::Defense)?;
        Ok(&self.defenses[index])
    }

    /// Reverts any selection made this round. Cooldowns are kept.
    pub fn clear_selection(&mut self) {
        clear(&mut self.attacks);
        clear(&mut self.defenses);
    }

    /// Rejects collections with more than one selected move.
    pub fn validate(&self) -> Result<(), LoadoutError> {
        ensure_single_selected(&self.attacks, MoveSlot::Attack)?;
        ensure_single_selected(&self.defenses, MoveSlot::Defense)
    }

    /// Builds the next round's loadout by advancing every move in order.
    #[must_use]
    pub fn advanced(&self) -> Self {
        Self {
            attacks: self.attacks.iter().map(|a| a.advanced()).collect(),
            defenses: self.defenses.iter().map(|d| d.advanced()).collect(),
        }
    }
}

fn collect_bounded<M, const N: usize>(
    moves: impl IntoIterator<Item = M>,
    slot: MoveSlot,
) -> Result<ArrayVec<M, N>, LoadoutError> {
    let mut out = ArrayVec::new();
    for m in moves {
        out.try_push(m)
            .map_err(|_| LoadoutError::TooManyMoves { slot, max: N })?;
    }
    Ok(out)
}

fn first_selected<M: Move>(moves: &[M]) -> Option<&M> {
    moves.iter().find(|m| m.is_selected())
}

fn selectable<M: Move>(moves: &[M]) -> impl Iterator<Item = (usize, &M)> + '_ {
    moves.iter().enumerate().filter(|(_, m)| m.is_selectable())
}

fn select<M: Move>(moves: &mut [M], index: usize, slot: MoveSlot) -> Result<(), SelectionError> {
    let len = moves.len();
    let target = moves
        .get(index)
        .ok_or(SelectionError::UnknownMove { slot, index, len })?;

    match target.state() {
        MoveState::Cooldown(remaining) => {
            return Err(SelectionError::OnCooldown {
                slot,
                id: target.id(),
                remaining,
            });
        }
        MoveState::Selected => {
            return Err(SelectionError::AlreadySelected {
                slot,
                id: target.id(),
            });
        }
        MoveState::Initial | MoveState::Unselected => {}
    }

    for (i, m) in moves.iter_mut().enumerate() {
        if i == index {
            m.set_state(MoveState::Selected);
        } else if m.is_selectable() || m.is_selected() {
            m.set_state(MoveState::Unselected);
        }
    }
    Ok(())
}

fn clear<M: Move>(moves: &mut [M]) {
    for m in moves.iter_mut() {
        if matches!(m.state(), MoveState::Selected | MoveState::Unselected) {
            m.set_state(MoveState::Initial);
        }
    }
}

fn ensure_single_selected<M: Move>(moves: &[M], slot: MoveSlot) -> Result<(), LoadoutError> {
    let mut selected = moves.iter().filter(|m| m.is_selected());
    match (selected.next(), selected.next()) {
        (Some(first), Some(_)) => Err(LoadoutError::MultipleSelected {
            slot,
            id: first.id(),
        }),
        _ => Ok(()),
    }
}
