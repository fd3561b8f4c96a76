//! Content factory for loading a data directory.

use std::path::PathBuf;

use game_core::CombatConfig;

use crate::catalog::MoveCatalog;
use crate::loaders::{ConfigLoader, LoadResult, MoveLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── moves/
///     ├── attacks.ron
///     └── defenses.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat tuning from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the move catalog from `moves/`.
    pub fn load_catalog(&self) -> LoadResult<MoveCatalog> {
        MoveLoader::load_catalog(&self.data_dir.join("moves"))
    }
}
