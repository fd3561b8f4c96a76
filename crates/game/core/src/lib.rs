//! Deterministic combat rules for a two-participant, round-based duel.
//!
//! `game-core` defines the canonical rules and exposes pure APIs that can be
//! reused by the match runtime, replay verifiers, and offline tools:
//! - [`moves`]: the attack/defense model and its cooldown state machine
//! - [`round`]: per-round loadouts, selection, and next-round derivation
//! - [`combat`]: dodge, damage stacking, and outcome classification
//!
//! The crate performs no I/O and holds no hidden state. Concrete move
//! catalogs live in `game-content`.
#![cfg_attr(not(feature = "std"), no_std)]

pub mod combat;
pub mod config;
pub mod error;
pub mod moves;
pub mod root;
pub mod round;

pub use combat::{
    DamageBreakdown, Exchange, Health, Outcome, apply_damage, damage_breakdown, did_dodge,
    resolve, total_damage,
};
pub use config::CombatConfig;
pub use error::{ErrorSeverity, GameError, LoadoutError, MoveSlot, SelectionError};
pub use moves::{
    Attack, AttackPosition, Defense, DefensePosition, FireState, Move, MoveId, MoveState,
};
#[cfg(feature = "serde")]
pub use root::compute_round_root;
pub use round::{Attacks, Defenses, Loadout, Round, Side};
