//! Combat configuration loader.

use std::path::Path;

use game_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if !(config.max_health > 0.0) {
            anyhow::bail!("max_health must be positive, got {}", config.max_health);
        }
        if !(config.second_attacker_reduction >= 0.0) {
            anyhow::bail!(
                "second_attacker_reduction must be non-negative, got {}",
                config.second_attacker_reduction
            );
        }

        Ok(config)
    }

    /// Returns the tuning bundled with the crate.
    pub fn embedded() -> LoadResult<CombatConfig> {
        Self::parse(include_str!("../../data/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_config_parses() {
        let config = ConfigLoader::embedded().expect("embedded config");
        assert_eq!(config.max_health, 100.0);
        assert_eq!(config.second_attacker_reduction, 0.85);
    }

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("max_health = 40.0").unwrap();
        assert_eq!(config.max_health, 40.0);
        assert_eq!(
            config.second_attacker_reduction,
            CombatConfig::DEFAULT_SECOND_ATTACKER_REDUCTION
        );
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(ConfigLoader::parse("max_health = 0.0").is_err());
        assert!(ConfigLoader::parse("second_attacker_reduction = -1.0").is_err());
        assert!(ConfigLoader::parse("max_health = \"lots\"").is_err());
    }
}
