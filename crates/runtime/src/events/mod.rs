//! Match events published by the runtime.
mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{AppliedOutcome, CombatEvent, MatchEvent, RoundEvent};
