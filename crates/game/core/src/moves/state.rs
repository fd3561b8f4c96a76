//! Selectable-state lifecycle shared by attacks and defenses.

/// Where a move sits in its per-round lifecycle.
///
/// ```text
/// Initial ──select──▶ Selected ──advance──▶ Cooldown(n) ──advance──▶ … ──▶ Initial
///    ▲                    │
///    └──advance── Unselected (a sibling was selected instead)
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveState {
    /// Available for selection and not yet touched this round.
    #[default]
    Initial,
    /// Chosen by the participant for the current round.
    Selected,
    /// Available, but a different move in the same collection was chosen.
    Unselected,
    /// Unavailable for the given number of remaining rounds.
    Cooldown(u32),
}

impl MoveState {
    /// Builds the state a move enters after use.
    ///
    /// `Cooldown(0)` is never produced: a zero-length window is `Initial`.
    pub const fn cooling(remaining: u32) -> Self {
        if remaining == 0 {
            Self::Initial
        } else {
            Self::Cooldown(remaining)
        }
    }

    /// Returns true if a participant may pick this move in the current round.
    pub const fn is_selectable(&self) -> bool {
        matches!(self, Self::Initial | Self::Unselected)
    }

    pub const fn is_selected(&self) -> bool {
        matches!(self, Self::Selected)
    }

    /// Returns the state this one decrements to, or `None` if not cooling down.
    pub const fn decremented(&self) -> Option<Self> {
        match self {
            Self::Cooldown(remaining) => Some(Self::cooling(remaining.saturating_sub(1))),
            _ => None,
        }
    }

    /// Applies the round-advance transition table.
    ///
    /// `cooldown` is the fixed window the move enters when it was used this
    /// round; it is a property of the move's catalog entry.
    pub const fn advanced(&self, cooldown: u32) -> Self {
        match self {
            Self::Selected => Self::cooling(cooldown),
            Self::Cooldown(remaining) => Self::cooling(remaining.saturating_sub(1)),
            Self::Initial | Self::Unselected => Self::Initial,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_follows_transition_table() {
        assert_eq!(MoveState::Selected.advanced(3), MoveState::Cooldown(3));
        assert_eq!(MoveState::Cooldown(3).advanced(5), MoveState::Cooldown(2));
        assert_eq!(MoveState::Cooldown(1).advanced(5), MoveState::Initial);
        assert_eq!(MoveState::Unselected.advanced(5), MoveState::Initial);
        assert_eq!(MoveState::Initial.advanced(5), MoveState::Initial);
    }

    #[test]
    fn zero_cooldown_normalizes_to_initial() {
        assert_eq!(MoveState::cooling(0), MoveState::Initial);
        assert_eq!(MoveState::Selected.advanced(0), MoveState::Initial);
        assert_eq!(MoveState::Cooldown(0).advanced(2), MoveState::Initial);
    }

    #[test]
    fn decrement_only_applies_while_cooling() {
        assert_eq!(MoveState::Cooldown(2).decremented(), Some(MoveState::Cooldown(1)));
        assert_eq!(MoveState::Cooldown(1).decremented(), Some(MoveState::Initial));
        assert_eq!(MoveState::Initial.decremented(), None);
        assert_eq!(MoveState::Selected.decremented(), None);
    }

    #[test]
    fn selectability() {
        assert!(MoveState::Initial.is_selectable());
        assert!(MoveState::Unselected.is_selectable());
        assert!(!MoveState::Selected.is_selectable());
        assert!(!MoveState::Cooldown(1).is_selectable());
    }
}
