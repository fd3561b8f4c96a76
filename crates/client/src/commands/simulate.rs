//! AI-vs-AI match simulation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::broadcast::error::TryRecvError;

use game_content::{ConfigLoader, MoveCatalog, MoveLoader};
use runtime::{Event, RandomProvider, Runtime, RuntimeConfig, Topic};

use crate::report;

/// Run a match between two seeded random providers
#[derive(Parser)]
pub struct Simulate {
    /// Round limit (overrides DUEL_MAX_ROUNDS)
    #[arg(short, long, value_name = "N")]
    rounds: Option<u32>,

    /// Seed for the player's policy; the opponent uses seed + 1 (random if omitted)
    #[arg(short, long, value_name = "SEED")]
    seed: Option<u64>,

    /// Directory holding attacks.ron and defenses.ron (defaults to the built-in catalog)
    #[arg(short, long, value_name = "DIR")]
    catalog: Option<PathBuf>,

    /// Combat tuning TOML file (defaults to the built-in tuning)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Probability that a participant skips attacking in a round
    #[arg(long, value_name = "P", default_value_t = 0.0, value_parser = parse_probability)]
    idle_chance: f64,

    /// Print events as JSON lines instead of the round log
    #[arg(long)]
    json: bool,
}

impl Simulate {
    pub async fn execute(self) -> Result<()> {
        let catalog = match &self.catalog {
            Some(dir) => MoveLoader::load_catalog(dir)?,
            None => MoveLoader::embedded()?,
        };
        let combat = match &self.config {
            Some(path) => ConfigLoader::load(path)?,
            None => ConfigLoader::embedded()?,
        };

        let mut config = RuntimeConfig::from_env().with_combat(combat);
        if let Some(rounds) = self.rounds {
            config.max_rounds = rounds.max(1);
        }

        let seed = self.seed.unwrap_or_else(rand::random);
        tracing::info!(
            "Simulating: seed={}, max_rounds={}, attacks={}, defenses={}",
            seed,
            config.max_rounds,
            catalog.attacks().len(),
            catalog.defenses().len()
        );

        let mut runtime = Runtime::builder()
            .config(config)
            .catalog(catalog.clone())
            .player_provider(RandomProvider::new(seed).with_idle_chance(self.idle_chance))
            .opponent_provider(
                RandomProvider::new(seed.wrapping_add(1)).with_idle_chance(self.idle_chance),
            )
            .build()
            .context("Failed to build runtime")?;

        if self.json {
            run_json(&mut runtime).await
        } else {
            run_log(&mut runtime, &catalog).await
        }
    }
}

async fn run_log(runtime: &mut Runtime, catalog: &MoveCatalog) -> Result<()> {
    loop {
        let report = runtime.step().await?;
        println!("{}", report::round_line(&report, catalog));

        if report.status.is_finished() {
            println!("{}", report::summary_line(&report));
            return Ok(());
        }
    }
}

async fn run_json(runtime: &mut Runtime) -> Result<()> {
    let mut receivers = runtime.events().subscribe_multiple(&Topic::ALL);

    loop {
        let report = runtime.step().await?;

        // Within a round, round events precede combat events, which precede
        // the match event, so draining topic by topic keeps publication order.
        for topic in Topic::ALL {
            let Some(rx) = receivers.get_mut(&topic) else {
                continue;
            };
            loop {
                match rx.try_recv() {
                    Ok(event) => print_event(&event)?,
                    Err(TryRecvError::Lagged(skipped)) => {
                        tracing::warn!("Dropped {} {:?} events", skipped, topic);
                    }
                    Err(TryRecvError::Empty | TryRecvError::Closed) => break,
                }
            }
        }

        if report.status.is_finished() {
            return Ok(());
        }
    }
}

fn parse_probability(value: &str) -> std::result::Result<f64, String> {
    let p: f64 = value.parse().map_err(|e| format!("{}", e))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{} is not a probability in [0, 1]", value))
    }
}

fn print_event(event: &Event) -> Result<()> {
    let line = serde_json::to_string(event).context("Failed to serialize event")?;
    println!("{}", line);
    Ok(())
}
