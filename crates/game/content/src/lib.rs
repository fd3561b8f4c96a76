//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Attack and defense catalogs (data-driven via RON)
//! - Combat tuning (data-driven via TOML)
//!
//! Content is consumed by the match runtime and never hard-coded in `game-core`.
//! Loaders deserialize straight into game-core types via serde.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::MoveCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LoadResult, MoveLoader};
