use core::fmt;

use arrayvec::ArrayString;

use crate::config::CombatConfig;
use crate::error::LoadoutError;

/// Stable identifier of a move kind (e.g. `punch-left`, `dash-forward`).
///
/// Opaque to the combat rules; only catalogs and frontends interpret it.
/// Stored inline so moves stay `Copy` and allocation-free.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct MoveId(ArrayString<{ CombatConfig::MAX_MOVE_ID_LEN }>);

impl MoveId {
    pub fn new(id: &str) -> Result<Self, LoadoutError> {
        ArrayString::from(id)
            .map(Self)
            .map_err(|_| LoadoutError::MoveIdTooLong {
                len: id.len(),
                max: CombatConfig::MAX_MOVE_ID_LEN,
            })
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for MoveId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
