//! Common error infrastructure for game-core.
//!
//! Combat resolution itself is total and never fails. Errors only arise while
//! building loadouts and recording selections, which is where invalid input
//! from collaborators is rejected.

use crate::moves::MoveId;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative choice.
    ///
    /// Examples: move on cooldown, move already selected
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown move index, oversized catalog
    Validation,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}

/// Which collection of a loadout an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum MoveSlot {
    Attack,
    Defense,
}

/// Rejected attempt to select a move for the current round.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SelectionError {
    #[error("no {slot} at index {index} (loadout has {len})")]
    UnknownMove {
        slot: MoveSlot,
        index: usize,
        len: usize,
    },

    #[error("{slot} {id} is on cooldown for {remaining} more round(s)")]
    OnCooldown {
        slot: MoveSlot,
        id: MoveId,
        remaining: u32,
    },

    #[error("{slot} {id} is already selected")]
    AlreadySelected { slot: MoveSlot, id: MoveId },
}

impl GameError for SelectionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownMove { .. } => ErrorSeverity::Validation,
            Self::OnCooldown { .. } | Self::AlreadySelected { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownMove { .. } => "SELECTION_UNKNOWN_MOVE",
            Self::OnCooldown { .. } => "SELECTION_ON_COOLDOWN",
            Self::AlreadySelected { .. } => "SELECTION_ALREADY_SELECTED",
        }
    }
}

/// Rejected loadout construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LoadoutError {
    #[error("too many {slot}s: capacity is {max}")]
    TooManyMoves { slot: MoveSlot, max: usize },

    #[error("move id of {len} bytes exceeds the {max}-byte limit")]
    MoveIdTooLong { len: usize, max: usize },

    #[error("{slot} {id} has more than one selected entry")]
    MultipleSelected { slot: MoveSlot, id: MoveId },
}

impl GameError for LoadoutError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TooManyMoves { .. } => "LOADOUT_TOO_MANY_MOVES",
            Self::MoveIdTooLong { .. } => "LOADOUT_MOVE_ID_TOO_LONG",
            Self::MultipleSelected { .. } => "LOADOUT_MULTIPLE_SELECTED",
        }
    }
}
