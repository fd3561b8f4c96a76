//! Built-in selection providers.
//!
//! - [`ScriptedProvider`]: replays a fixed queue of selections
//! - [`RandomProvider`]: seeded policy picking uniformly among selectable moves
mod random;
mod scripted;

pub use random::RandomProvider;
pub use scripted::ScriptedProvider;
