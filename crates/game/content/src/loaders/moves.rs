//! Move catalog loader.
//!
//! Loads attack and defense definitions from RON data files.

use std::path::Path;

use game_core::{Attack, Defense};

use crate::catalog::MoveCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for attack/defense catalogs.
pub struct MoveLoader;

impl MoveLoader {
    /// Load attacks from a RON list.
    pub fn load_attacks(path: &Path) -> LoadResult<Vec<Attack>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Load defenses from a RON list.
    pub fn load_defenses(path: &Path) -> LoadResult<Vec<Defense>> {
        let content = read_file(path)?;
        ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))
    }

    /// Load a catalog from `attacks.ron` and `defenses.ron` in `dir`.
    pub fn load_catalog(dir: &Path) -> LoadResult<MoveCatalog> {
        let attacks = Self::load_attacks(&dir.join("attacks.ron"))?;
        let defenses = Self::load_defenses(&dir.join("defenses.ron"))?;
        MoveCatalog::new(attacks, defenses)
    }

    /// Loads the catalog bundled with the crate.
    pub fn embedded() -> LoadResult<MoveCatalog> {
        let attacks: Vec<Attack> = ron::from_str(include_str!("../../data/moves/attacks.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse attacks.ron: {}", e))?;
        let defenses: Vec<Defense> = ron::from_str(include_str!("../../data/moves/defenses.ron"))
            .map_err(|e| anyhow::anyhow!("Failed to parse defenses.ron: {}", e))?;
        MoveCatalog::new(attacks, defenses)
    }
}
