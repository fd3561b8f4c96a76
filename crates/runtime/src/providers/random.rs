use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Round, Side};
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::api::{Result, RuntimeError, Selection, SelectionProvider};

/// Seeded policy that picks uniformly among selectable moves.
///
/// With the same seed and the same sequence of rounds, the choices are
/// identical, so simulated matches can be replayed.
pub struct RandomProvider {
    rng: Mutex<ChaCha8Rng>,
    /// Probability of skipping the attack in a round, in `[0, 1]`.
    idle_chance: f64,
}

impl RandomProvider {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            idle_chance: 0.0,
        }
    }

    /// Values outside `[0, 1]` are clamped; NaN means never idle.
    #[must_use]
    pub fn with_idle_chance(mut self, idle_chance: f64) -> Self {
        self.idle_chance = if idle_chance.is_nan() {
            0.0
        } else {
            idle_chance.clamp(0.0, 1.0)
        };
        self
    }
}

#[async_trait]
impl SelectionProvider for RandomProvider {
    async fn select(&self, side: Side, round: &Round) -> Result<Selection> {
        let mut rng = self.rng.lock().map_err(|_| RuntimeError::Provider {
            side,
            message: "rng lock poisoned".to_string(),
        })?;

        let loadout = round.loadout(side);
        let attack = if rng.gen_bool(self.idle_chance) {
            None
        } else {
            loadout
                .selectable_attacks()
                .map(|(i, _)| i)
                .choose(&mut *rng)
        };
        let defense = loadout
            .selectable_defenses()
            .map(|(i, _)| i)
            .choose(&mut *rng);

        Ok(Selection::new(attack, defense))
    }
}
