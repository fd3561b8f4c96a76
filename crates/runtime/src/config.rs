//! Runtime configuration and environment loading.
use std::env;
use std::time::Duration;

use game_core::CombatConfig;
use serde::{Deserialize, Serialize};

/// Who holds the speed advantage in a given round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedRule {
    /// The player always strikes first.
    Player,
    /// The opponent always strikes first.
    Opponent,
    /// The player strikes first in odd rounds, the opponent in even rounds.
    #[default]
    Alternate,
}

impl SpeedRule {
    /// Speed flag (player perspective) for the given round number.
    pub fn player_has_advantage(&self, round: u32) -> bool {
        match self {
            SpeedRule::Player => true,
            SpeedRule::Opponent => false,
            SpeedRule::Alternate => round % 2 == 1,
        }
    }
}

/// Runtime configuration shared across the match loop.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub combat: CombatConfig,
    /// How long each provider has to answer before it is treated as idle.
    pub selection_timeout: Duration,
    /// Rounds after which the match ends on remaining health.
    pub max_rounds: u32,
    pub event_buffer_size: usize,
    pub speed_rule: SpeedRule,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            combat: CombatConfig::default(),
            selection_timeout: Duration::from_secs(10),
            max_rounds: 50,
            event_buffer_size: 100,
            speed_rule: SpeedRule::default(),
        }
    }
}

impl RuntimeConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SELECTION_TIMEOUT_MS` - Per-round selection timeout (default: 10000)
    /// - `DUEL_MAX_ROUNDS` - Round limit (default: 50)
    /// - `DUEL_EVENT_BUFFER` - Event channel capacity per topic (default: 100)
    /// - `DUEL_SPEED_RULE` - `player`, `opponent` or `alternate` (default: alternate)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(ms) = read_env::<u64>("DUEL_SELECTION_TIMEOUT_MS") {
            config.selection_timeout = Duration::from_millis(ms.max(1));
        }

        if let Some(rounds) = read_env::<u32>("DUEL_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        if let Some(capacity) = read_env::<usize>("DUEL_EVENT_BUFFER") {
            config.event_buffer_size = capacity.max(1);
        }

        if let Ok(rule) = env::var("DUEL_SPEED_RULE") {
            match rule.to_ascii_lowercase().as_str() {
                "player" => config.speed_rule = SpeedRule::Player,
                "opponent" => config.speed_rule = SpeedRule::Opponent,
                "alternate" => config.speed_rule = SpeedRule::Alternate,
                other => tracing::warn!("Ignoring unknown DUEL_SPEED_RULE={}", other),
            }
        }

        config
    }

    #[must_use]
    pub fn with_combat(mut self, combat: CombatConfig) -> Self {
        self.combat = combat;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
