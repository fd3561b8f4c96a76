//! Move & cooldown model.
//!
//! Every attack and defense shares the same selectable-state lifecycle. The
//! shared behavior lives on [`Move`]; concrete variants only expose their
//! identity, state and fixed cooldown window.
//!
//! Moves are plain values. Advancing a round never mutates a move in place,
//! it produces the next-round copy via [`Move::advanced`].

mod attack;
mod defense;
mod id;
mod position;
mod state;

pub use attack::{Attack, FireState};
pub use defense::Defense;
pub use id::MoveId;
pub use position::{AttackPosition, DefensePosition};
pub use state::MoveState;

/// Shared lifecycle of a selectable move.
pub trait Move: Clone {
    fn id(&self) -> MoveId;

    fn state(&self) -> MoveState;

    /// Unconditionally overwrites the state.
    fn set_state(&mut self, state: MoveState);

    /// Fixed cooldown window entered after the move is used.
    fn cooldown(&self) -> u32;

    /// Decrements an active cooldown; `Cooldown(1)` becomes `Initial`.
    ///
    /// Calling this on a move that is not cooling down is a no-op.
    fn reduce_cooldown(&mut self) {
        if let Some(next) = self.state().decremented() {
            self.set_state(next);
        }
    }

    fn is_selectable(&self) -> bool {
        self.state().is_selectable()
    }

    fn is_selected(&self) -> bool {
        self.state().is_selected()
    }

    /// Returns the copy of this move for the next round.
    fn advanced(&self) -> Self {
        let mut next = self.clone();
        next.set_state(self.state().advanced(self.cooldown()));
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jab() -> Attack {
        Attack::new(MoveId::new("jab-left").unwrap(), AttackPosition::Left, 10.0, 2)
    }

    #[test]
    fn reduce_cooldown_counts_down_to_initial() {
        let mut attack = jab().with_state(MoveState::Cooldown(2));

        attack.reduce_cooldown();
        assert_eq!(attack.state(), MoveState::Cooldown(1));

        attack.reduce_cooldown();
        assert_eq!(attack.state(), MoveState::Initial);
    }

    #[test]
    fn reduce_cooldown_is_noop_outside_cooldown() {
        for state in [MoveState::Initial, MoveState::Selected, MoveState::Unselected] {
            let mut attack = jab().with_state(state);
            attack.reduce_cooldown();
            assert_eq!(attack.state(), state);
        }
    }

    #[test]
    fn advanced_uses_catalog_cooldown() {
        let used = jab().with_state(MoveState::Selected);
        let next = used.advanced();

        assert_eq!(next.state(), MoveState::Cooldown(2));
        assert_eq!(next.id(), used.id());
        // The source value is untouched.
        assert_eq!(used.state(), MoveState::Selected);
    }

    #[test]
    fn set_state_overwrites() {
        let mut defense = Defense::new(MoveId::new("dash-left").unwrap(), DefensePosition::Left, 1);
        defense.set_state(MoveState::Cooldown(7));
        assert_eq!(defense.state(), MoveState::Cooldown(7));
    }
}
