//! Round lifecycle.
//!
//! A [`Round`] owns both participants' loadouts for one exchange. Selections
//! are recorded on it during the selection phase; once resolved, the next
//! round is derived as a fresh value with [`Round::derive_next`].

mod loadout;

pub use loadout::{Attacks, Defenses, Loadout};

use core::hash::{Hash, Hasher};

use crate::moves::{Attack, Defense};

/// Identifies one of the two participants.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Opponent,
}

impl Side {
    pub const fn other(self) -> Self {
        match self {
            Self::Player => Self::Opponent,
            Self::Opponent => Self::Player,
        }
    }
}

/// One discrete exchange of selected moves.
///
/// Rounds are keyed by number: two rounds compare (and hash) equal iff their
/// numbers match.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Round {
    number: u32,
    /// True if the player acts first when both participants attack.
    has_speed_advantage: bool,
    player: Loadout,
    opponent: Loadout,
}

impl Round {
    pub const FIRST: u32 = 1;

    /// Creates the opening round of a match.
    pub fn first(player: Loadout, opponent: Loadout, has_speed_advantage: bool) -> Self {
        Self {
            number: Self::FIRST,
            has_speed_advantage,
            player,
            opponent,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn has_speed_advantage(&self) -> bool {
        self.has_speed_advantage
    }

    /// Returns the side that strikes first when both attack.
    pub fn faster_side(&self) -> Side {
        if self.has_speed_advantage {
            Side::Player
        } else {
            Side::Opponent
        }
    }

    pub fn loadout(&self, side: Side) -> &Loadout {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    /// Mutable access for the selection phase.
    pub fn loadout_mut(&mut self, side: Side) -> &mut Loadout {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    pub fn selected_attack(&self, side: Side) -> Option<&Attack> {
        self.loadout(side).selected_attack()
    }

    pub fn selected_defense(&self, side: Side) -> Option<&Defense> {
        self.loadout(side).selected_defense()
    }

    /// Derives the following round.
    ///
    /// The new round is numbered `self.number + 1`, carries the supplied speed
    /// flag, and holds every collection advanced element-wise in order:
    /// selected moves enter their cooldown, cooling moves count down, and
    /// everything else returns to `Initial`. `self` is left untouched.
    #[must_use]
    pub fn derive_next(&self, has_speed_advantage: bool) -> Self {
        Self {
            number: self.number + 1,
            has_speed_advantage,
            player: self.player.advanced(),
            opponent: self.opponent.advanced(),
        }
    }
}

impl PartialEq for Round {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Round {}

impl Hash for Round {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::{AttackPosition, DefensePosition, Move, MoveId, MoveState};

    fn id(name: &str) -> MoveId {
        MoveId::new(name).unwrap()
    }

    fn loadout() -> Loadout {
        Loadout::new(
            [
                Attack::new(id("jab-left"), AttackPosition::Left, 10.0, 3),
                Attack::new(id("cross-right"), AttackPosition::Right, 15.0, 2)
                    .with_state(MoveState::Cooldown(3)),
                Attack::new(id("hook-left"), AttackPosition::Left, 20.0, 2)
                    .with_state(MoveState::Cooldown(1)),
                Attack::new(id("upper-right"), AttackPosition::Right, 25.0, 4),
            ],
            [
                Defense::new(id("dash-left"), DefensePosition::Left, 2),
                Defense::new(id("dash-right"), DefensePosition::Right, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn derive_next_applies_transition_table() {
        let mut round = Round::first(loadout(), loadout(), true);
        round.loadout_mut(Side::Player).select_attack(0).unwrap();
        round.loadout_mut(Side::Player).select_defense(1).unwrap();

        let next = round.derive_next(false);

        assert_eq!(next.number(), 2);
        assert!(!next.has_speed_advantage());

        let player = next.loadout(Side::Player);
        let attacks: Vec<_> = player.attacks().iter().map(|a| a.state()).collect();
        assert_eq!(
            attacks,
            vec![
                MoveState::Cooldown(3),
                MoveState::Cooldown(2),
                MoveState::Initial,
                MoveState::Initial,
            ]
        );

        let defenses: Vec<_> = player.defenses().iter().map(|d| d.state()).collect();
        assert_eq!(defenses, vec![MoveState::Initial, MoveState::Cooldown(2)]);
    }

    #[test]
    fn derive_next_preserves_order_and_leaves_source_untouched() {
        let mut round = Round::first(loadout(), loadout(), false);
        round.loadout_mut(Side::Opponent).select_attack(3).unwrap();

        let next = round.derive_next(true);

        for side in [Side::Player, Side::Opponent] {
            let before: Vec<_> = round.loadout(side).attacks().iter().map(|a| a.id).collect();
            let after: Vec<_> = next.loadout(side).attacks().iter().map(|a| a.id).collect();
            assert_eq!(before, after);
            assert_eq!(
                round.loadout(side).defenses().len(),
                next.loadout(side).defenses().len()
            );
        }

        assert_eq!(round.selected_attack(Side::Opponent).unwrap().id, id("upper-right"));
        assert!(next.selected_attack(Side::Opponent).is_none());
    }

    #[test]
    fn rounds_are_keyed_by_number() {
        let first = Round::first(loadout(), loadout(), true);
        let mut other = Round::first(Loadout::default(), Loadout::default(), false);
        assert_eq!(first, other);

        other = other.derive_next(false);
        assert_ne!(first, other);
    }

    #[test]
    fn faster_side_follows_flag() {
        assert_eq!(Round::first(loadout(), loadout(), true).faster_side(), Side::Player);
        assert_eq!(Round::first(loadout(), loadout(), false).faster_side(), Side::Opponent);
        assert_eq!(Side::Player.other(), Side::Opponent);
    }
}
