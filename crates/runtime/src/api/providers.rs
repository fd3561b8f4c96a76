//! Asynchronous abstraction for sourcing each participant's move choices.
//!
//! Runtime users plug in [`SelectionProvider`] implementations so a match can
//! run with human input, networked peers, scripted fixtures, or AI policies.
use async_trait::async_trait;
use game_core::{Round, Side};
use serde::{Deserialize, Serialize};

use super::errors::Result;

/// One participant's choice for a round, by index into its loadout.
///
/// `None` means "no move": a participant may skip attacking or defending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub attack: Option<usize>,
    pub defense: Option<usize>,
}

impl Selection {
    /// Selects nothing. Also what a timed-out provider yields.
    pub const fn none() -> Self {
        Self {
            attack: None,
            defense: None,
        }
    }

    pub const fn new(attack: Option<usize>, defense: Option<usize>) -> Self {
        Self { attack, defense }
    }

    pub const fn attack(index: usize) -> Self {
        Self::new(Some(index), None)
    }

    pub const fn defense(index: usize) -> Self {
        Self::new(None, Some(index))
    }

    pub const fn is_empty(&self) -> bool {
        self.attack.is_none() && self.defense.is_none()
    }
}

/// Trait for providing a participant's selection for the current round.
///
/// Implementations see a read-only snapshot of the round, including both
/// loadouts' cooldown states, and must only pick selectable moves.
#[async_trait]
pub trait SelectionProvider: Send + Sync {
    async fn select(&self, side: Side, round: &Round) -> Result<Selection>;
}

/// A provider that never selects anything.
/// Useful for testing or as a stand-in for a disconnected participant.
pub struct IdleProvider;

#[async_trait]
impl SelectionProvider for IdleProvider {
    async fn select(&self, _side: Side, _round: &Round) -> Result<Selection> {
        Ok(Selection::none())
    }
}
