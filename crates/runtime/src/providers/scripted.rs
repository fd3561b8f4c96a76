use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use game_core::{Round, Side};

use crate::api::{Result, Selection, SelectionProvider};

/// Replays a fixed queue of selections, one per round.
///
/// Once the script runs out every further round selects nothing.
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Selection>>,
}

impl ScriptedProvider {
    pub fn new(script: impl IntoIterator<Item = Selection>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
        }
    }

    /// Number of selections left in the script.
    pub fn remaining(&self) -> usize {
        self.script.lock().map(|s| s.len()).unwrap_or(0)
    }
}

#[async_trait]
impl SelectionProvider for ScriptedProvider {
    async fn select(&self, side: Side, round: &Round) -> Result<Selection> {
        let next = self
            .script
            .lock()
            .ok()
            .and_then(|mut script| script.pop_front())
            .unwrap_or_default();

        tracing::trace!("{} scripted selection for round {}: {:?}", side, round.number(), next);
        Ok(next)
    }
}
