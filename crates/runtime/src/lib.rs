//! Match orchestration around the deterministic combat core.
//!
//! This crate is the collaborator `game-core` expects: it collects both
//! participants' selections, freezes each round before resolving it, keeps
//! the health pools, decides when the match ends, and derives the next
//! round exactly once per transition. Consumers embed [`Runtime`] and plug
//! in [`SelectionProvider`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`providers`] ships scripted and seeded-random selection policies
pub mod api;
pub mod config;
pub mod events;
pub mod providers;
pub mod runtime;
pub mod state;

pub use api::{IdleProvider, Result, RuntimeError, Selection, SelectionProvider};
pub use config::{RuntimeConfig, SpeedRule};
pub use events::{
    AppliedOutcome, CombatEvent, Event, EventBus, MatchEvent, RoundEvent, Topic,
};
pub use providers::{RandomProvider, ScriptedProvider};
pub use runtime::{Runtime, RuntimeBuilder};
pub use state::{MatchState, MatchStatus, MatchSummary, RoundReport};
