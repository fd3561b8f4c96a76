//! Combat resolution system.
//!
//! This module provides pure functions for resolving combat interactions.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `resolve`: Complete resolution of one attacker/defender pair
//! - `did_dodge`: Lateral dodge rule
//! - `total_damage`: Multiplicative damage stacking
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `Round::resolve_exchange`: Both directions of a round with strike order

pub mod damage;
pub mod exchange;
pub mod health;
pub mod hit;
pub mod result;

pub use damage::{DamageBreakdown, apply_damage, damage_breakdown, total_damage};
pub use exchange::Exchange;
pub use health::Health;
pub use hit::did_dodge;
pub use result::{Outcome, resolve};
