//! Duel client binary.
//!
//! Composition root that loads content and configuration, installs logging,
//! and drives matches through the runtime.
//!
//! ```bash
//! # AI-vs-AI match with a fixed seed
//! cargo run -p duel-client -- simulate --seed 7
//!
//! # Custom catalog and tuning, events as JSON lines
//! cargo run -p duel-client -- simulate --catalog ./moves --config ./config.toml --json
//! ```

mod commands;
mod logging;
mod report;

use anyhow::Result;
use clap::Parser;
use commands::Simulate;

/// Turn-based duel resolver
#[derive(Parser)]
#[command(name = "duel")]
#[command(about = "Turn-based two-participant combat resolver", long_about = None)]
#[command(version)]
struct Cli {
    /// Also write logs to the platform log directory (DUEL_LOG_DIR overrides the location)
    #[arg(long, global = true)]
    log_file: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run a match between two seeded random providers
    Simulate(Simulate),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _guard = logging::setup_logging(cli.log_file)?;

    match cli.command {
        Command::Simulate(cmd) => cmd.execute().await,
    }
}
