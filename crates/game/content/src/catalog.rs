//! Static move catalogs.
//!
//! A catalog is the ordered list of attacks and defenses every participant
//! starts a match with. Catalog order fixes move indices for the whole match.

use std::collections::HashSet;

use game_core::{Attack, Defense, Loadout, Move, MoveId};

/// Ordered attack and defense definitions.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveCatalog {
    attacks: Vec<Attack>,
    defenses: Vec<Defense>,
}

impl MoveCatalog {
    /// Builds a catalog, rejecting duplicate ids and oversized collections.
    ///
    /// Catalog entries are definitions: any state they carry is reset to
    /// `Initial`.
    pub fn new(attacks: Vec<Attack>, defenses: Vec<Defense>) -> anyhow::Result<Self> {
        ensure_unique(attacks.iter().map(|a| a.id()), "attack")?;
        ensure_unique(defenses.iter().map(|d| d.id()), "defense")?;

        let catalog = Self {
            attacks: attacks.into_iter().map(reset).collect(),
            defenses: defenses.into_iter().map(reset).collect(),
        };

        // Surface capacity problems at load time instead of match start.
        catalog.loadout()?;
        Ok(catalog)
    }

    pub fn attacks(&self) -> &[Attack] {
        &self.attacks
    }

    pub fn defenses(&self) -> &[Defense] {
        &self.defenses
    }

    pub fn attack(&self, id: &str) -> Option<&Attack> {
        self.attacks.iter().find(|a| a.id.as_str() == id)
    }

    pub fn defense(&self, id: &str) -> Option<&Defense> {
        self.defenses.iter().find(|d| d.id.as_str() == id)
    }

    /// Returns a fresh opening loadout with every move selectable.
    pub fn loadout(&self) -> anyhow::Result<Loadout> {
        Loadout::new(self.attacks.iter().copied(), self.defenses.iter().copied())
            .map_err(|e| anyhow::anyhow!("catalog does not fit a loadout: {}", e))
    }
}

fn reset<M: Move>(mut m: M) -> M {
    m.set_state(game_core::MoveState::Initial);
    m
}

fn ensure_unique(ids: impl Iterator<Item = MoveId>, kind: &str) -> anyhow::Result<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("duplicate {} id in catalog: {}", kind, id);
        }
    }
    Ok(())
}
