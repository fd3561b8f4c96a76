//! High-level match orchestrator.
//!
//! The runtime owns the match state, collects both participants' selections
//! concurrently, freezes the round, resolves it through `game-core`, applies
//! damage, and derives the next round. Events are published on an
//! [`EventBus`] as each stage completes.

use std::time::Duration;

use game_content::{MoveCatalog, MoveLoader};
use game_core::{
    GameError, Loadout, Outcome, Round, SelectionError, Side, compute_round_root,
};
use tokio::sync::broadcast;

use crate::api::{Result, RuntimeError, Selection, SelectionProvider};
use crate::config::RuntimeConfig;
use crate::events::{AppliedOutcome, CombatEvent, Event, EventBus, MatchEvent, RoundEvent, Topic};
use crate::state::{MatchState, MatchStatus, MatchSummary, RoundReport};

/// Main runtime that drives a match round by round.
pub struct Runtime {
    config: RuntimeConfig,
    state: MatchState,
    events: EventBus,

    // Selection providers (injected by user)
    player_provider: Option<Box<dyn SelectionProvider>>,
    opponent_provider: Option<Box<dyn SelectionProvider>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Current match state (round in selection phase plus health pools)
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Cloneable handle to the event bus
    pub fn events(&self) -> EventBus {
        self.events.clone()
    }

    /// Subscribe to one event topic
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.events.subscribe(topic)
    }

    /// Set the player selection provider
    pub fn set_player_provider(&mut self, provider: impl SelectionProvider + 'static) {
        self.player_provider = Some(Box::new(provider));
    }

    /// Set the opponent selection provider
    pub fn set_opponent_provider(&mut self, provider: impl SelectionProvider + 'static) {
        self.opponent_provider = Some(Box::new(provider));
    }

    /// Play one round.
    ///
    /// Requires both providers to be configured. A rejected selection leaves
    /// the match state untouched so the round can be retried.
    pub async fn step(&mut self) -> Result<RoundReport> {
        let number = self.state.round.number();
        if self.state.status.is_finished() {
            return Err(RuntimeError::MatchFinished { round: number });
        }

        let player_provider = self
            .player_provider
            .as_deref()
            .ok_or(RuntimeError::ProviderNotSet { side: Side::Player })?;
        let opponent_provider =
            self.opponent_provider
                .as_deref()
                .ok_or(RuntimeError::ProviderNotSet {
                    side: Side::Opponent,
                })?;

        self.events.publish(Event::Round(RoundEvent::Started {
            round: number,
            has_speed_advantage: self.state.round.has_speed_advantage(),
        }));
        tracing::debug!("Round {} selection phase opened", number);

        // 1. Collect both selections concurrently; nothing is resolved until both are in.
        let timeout = self.config.selection_timeout;
        let current = &self.state.round;
        let events = &self.events;
        let (player, opponent) = tokio::join!(
            collect_selection(player_provider, Side::Player, current, timeout, events),
            collect_selection(opponent_provider, Side::Opponent, current, timeout, events),
        );

        // 2. Record and validate on a copy, then freeze.
        let mut round = self.state.round.clone();
        record_selection(&mut round, Side::Player, player)?;
        record_selection(&mut round, Side::Opponent, opponent)?;
        for side in [Side::Player, Side::Opponent] {
            round
                .loadout(side)
                .validate()
                .map_err(|source| {
                    tracing::warn!(
                        "{} loadout invalid [{}]: {}",
                        side,
                        source.error_code(),
                        source
                    );
                    RuntimeError::InvalidLoadout {
                        side,
                        round: number,
                        source,
                    }
                })?;
        }

        let root = hex::encode(compute_round_root(&round));
        tracing::debug!(
            "Round {} frozen: player={:?} opponent={:?} root={}",
            number,
            player,
            opponent,
            root
        );
        self.events.publish(Event::Round(RoundEvent::SelectionsFrozen {
            round: number,
            player,
            opponent,
            root,
        }));

        // 3. Resolve against start-of-round health.
        let exchange = round.resolve_exchange(
            self.state.player_health.current,
            self.state.opponent_health.current,
            self.config.combat.second_attacker_reduction,
        );

        // 4. Apply in strike order. A participant defeated by the first strike
        //    does not get to reply.
        let mut applied = Vec::with_capacity(2);
        for attacker in exchange.order() {
            let outcome = exchange.by(attacker);
            if matches!(outcome, Outcome::NoAttack) {
                continue;
            }
            if self.state.health(attacker).is_defeated() {
                tracing::debug!(
                    "Round {}: {} was defeated before striking, {:?} voided",
                    number,
                    attacker,
                    outcome
                );
                continue;
            }

            let defender = attacker.other();
            let health = self.state.health_mut(defender);
            *health = health.after(&outcome);
            applied.push(AppliedOutcome { attacker, outcome });

            tracing::debug!(
                "Round {}: {} -> {}: {} ({:.1} dmg), {} hp {:.1}/{:.1}",
                number,
                attacker,
                defender,
                outcome.as_str(),
                outcome.damage(),
                defender,
                health.current,
                health.max
            );
        }

        // 5. Decide whether the match goes on.
        let status = self.match_status(number);
        self.state.status = status;

        self.events.publish(Event::Combat(CombatEvent {
            round: number,
            exchange,
            applied: applied.clone(),
            player_health: self.state.player_health,
            opponent_health: self.state.opponent_health,
        }));

        // 6. Derive the next round exactly once, only if play continues.
        self.state.round = match status {
            MatchStatus::InProgress => {
                let speed = self.config.speed_rule.player_has_advantage(number + 1);
                round.derive_next(speed)
            }
            MatchStatus::Finished { winner } => {
                tracing::info!(
                    "Match finished after round {}: winner={}",
                    number,
                    winner.map_or("draw".to_string(), |side| side.to_string())
                );
                self.events.publish(Event::Match(MatchEvent::Finished {
                    rounds: number,
                    winner,
                }));
                round
            }
        };

        Ok(RoundReport {
            round: number,
            player,
            opponent,
            exchange,
            applied,
            player_health: self.state.player_health,
            opponent_health: self.state.opponent_health,
            status,
        })
    }

    /// Play rounds until the match finishes.
    pub async fn run(&mut self) -> Result<MatchSummary> {
        tracing::info!(
            "Match started: max_rounds={}, max_health={}",
            self.config.max_rounds,
            self.config.combat.max_health
        );

        loop {
            let report = self.step().await?;
            if let MatchStatus::Finished { winner } = report.status {
                return Ok(MatchSummary {
                    rounds: report.round,
                    winner,
                    player_health: report.player_health,
                    opponent_health: report.opponent_health,
                });
            }
        }
    }

    fn match_status(&self, number: u32) -> MatchStatus {
        let player_down = self.state.player_health.is_defeated();
        let opponent_down = self.state.opponent_health.is_defeated();

        match (player_down, opponent_down) {
            (true, true) => MatchStatus::Finished { winner: None },
            (true, false) => MatchStatus::Finished {
                winner: Some(Side::Opponent),
            },
            (false, true) => MatchStatus::Finished {
                winner: Some(Side::Player),
            },
            (false, false) if number >= self.config.max_rounds => MatchStatus::Finished {
                winner: self.state.leader(),
            },
            (false, false) => MatchStatus::InProgress,
        }
    }
}

/// Ask one provider for its selection, treating timeouts and failures as "no move".
async fn collect_selection(
    provider: &dyn SelectionProvider,
    side: Side,
    round: &Round,
    timeout: Duration,
    events: &EventBus,
) -> Selection {
    match tokio::time::timeout(timeout, provider.select(side, round)).await {
        Ok(Ok(selection)) => selection,
        Ok(Err(e)) => {
            tracing::warn!("{} provider failed in round {}: {}", side, round.number(), e);
            Selection::none()
        }
        Err(_) => {
            tracing::warn!(
                "{} provider timed out after {:?} in round {}",
                side,
                timeout,
                round.number()
            );
            events.publish(Event::Round(RoundEvent::SelectionTimedOut {
                round: round.number(),
                side,
            }));
            Selection::none()
        }
    }
}

fn record_selection(round: &mut Round, side: Side, selection: Selection) -> Result<()> {
    let loadout = round.loadout_mut(side);
    if let Some(index) = selection.attack {
        loadout
            .select_attack(index)
            .map_err(|source| rejected(side, source))?;
    }
    if let Some(index) = selection.defense {
        loadout
            .select_defense(index)
            .map_err(|source| rejected(side, source))?;
    }
    Ok(())
}

fn rejected(side: Side, source: SelectionError) -> RuntimeError {
    if source.severity().is_recoverable() {
        tracing::debug!("{} selection rejected [{}]: {}", side, source.error_code(), source);
    } else {
        tracing::warn!("{} selection rejected [{}]: {}", side, source.error_code(), source);
    }
    RuntimeError::InvalidSelection { side, source }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<MoveCatalog>,
    loadouts: Option<(Loadout, Loadout)>,
    player_provider: Option<Box<dyn SelectionProvider>>,
    opponent_provider: Option<Box<dyn SelectionProvider>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
            loadouts: None,
            player_provider: None,
            opponent_provider: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Both participants open with this catalog (default: the embedded one)
    pub fn catalog(mut self, catalog: MoveCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Explicit opening loadouts; takes precedence over the catalog
    pub fn loadouts(mut self, player: Loadout, opponent: Loadout) -> Self {
        self.loadouts = Some((player, opponent));
        self
    }

    pub fn player_provider(mut self, provider: impl SelectionProvider + 'static) -> Self {
        self.player_provider = Some(Box::new(provider));
        self
    }

    pub fn opponent_provider(mut self, provider: impl SelectionProvider + 'static) -> Self {
        self.opponent_provider = Some(Box::new(provider));
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let (player, opponent) = match self.loadouts {
            Some(loadouts) => loadouts,
            None => {
                let catalog = match self.catalog {
                    Some(catalog) => catalog,
                    None => MoveLoader::embedded()
                        .map_err(|e| RuntimeError::Content(e.to_string()))?,
                };
                let loadout = catalog
                    .loadout()
                    .map_err(|e| RuntimeError::Content(e.to_string()))?;
                (loadout.clone(), loadout)
            }
        };

        let first = Round::first(
            player,
            opponent,
            self.config.speed_rule.player_has_advantage(Round::FIRST),
        );

        Ok(Runtime {
            state: MatchState::new(first, self.config.combat.max_health),
            events: EventBus::with_capacity(self.config.event_buffer_size),
            config: self.config,
            player_provider: self.player_provider,
            opponent_provider: self.opponent_provider,
        })
    }
}
