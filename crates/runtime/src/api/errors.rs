//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from selection providers and the selection-validation
//! layer so clients can bubble them up with consistent context.
use thiserror::Error;

use game_core::{GameError, LoadoutError, SelectionError, Side};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{side} selection provider not set")]
    ProviderNotSet { side: Side },

    #[error("{side} selection provider failed: {message}")]
    Provider { side: Side, message: String },

    #[error("{side} submitted an invalid selection")]
    InvalidSelection {
        side: Side,
        #[source]
        source: SelectionError,
    },

    #[error("{side} loadout failed validation in round {round}")]
    InvalidLoadout {
        side: Side,
        round: u32,
        #[source]
        source: LoadoutError,
    },

    #[error("match already finished after round {round}")]
    MatchFinished { round: u32 },

    #[error("failed to build opening loadout: {0}")]
    Content(String),
}

impl RuntimeError {
    /// Returns true if the same round can be retried with a different selection.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidSelection { source, .. } => source.severity().is_recoverable(),
            Self::InvalidLoadout { source, .. } => source.severity().is_recoverable(),
            Self::Provider { .. } => true,
            Self::ProviderNotSet { .. } | Self::MatchFinished { .. } | Self::Content(_) => false,
        }
    }
}
