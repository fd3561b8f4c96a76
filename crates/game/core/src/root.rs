//! Round root computation for replay verification.
//!
//! Networked consumers exchange a round root after each selection phase so
//! both ends can confirm they froze the same selections before resolving.

use crate::round::Round;

/// Computes a 32-byte commitment to a round.
///
/// Hashes the bincode encoding of the full round (number, speed flag, and
/// every move with its state). Unlike [`Round`]'s `PartialEq`, which keys on
/// the number alone, the root changes whenever any selection differs.
///
/// Requires the `serde` feature.
#[cfg(feature = "serde")]
pub fn compute_round_root(round: &Round) -> [u8; 32] {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();

    // bincode serialization is deterministic and consistent
    if let Ok(bytes) = bincode::serialize(round) {
        hasher.update(&bytes);
    }

    hasher.finalize().into()
}
