//! hsts-watch: headless host for the HSTS watcher.
//!
//! # Architecture Overview
//!
//! ```text
//!   events.jsonl ──▶ replay ──▶ mpsc queue ──▶ EventLoop ──▶ Handlers
//!                                                              │
//!                    ┌─────────────┬─────────────┬─────────────┤
//!                    ▼             ▼             ▼             ▼
//!                classify      inspect     correlation      verdict
//!                                                              │
//!                                                              ▼
//!                                    stdout ◀── RecordingSurface (presentation)
//! ```
//!
//! Subcommands:
//! - `replay <file>`: feed a recorded event stream through the core and print
//!   every surface call plus the final icon/tooltip state as JSON
//! - `filters`: print the listener registrations a host must install

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::json;
use tokio::sync::broadcast;

use hsts_watch::config::{load_config, WatchConfig};
use hsts_watch::events::{read_events_file, registrations, EventLoop, Handlers, ReplayError};
use hsts_watch::observability::logging;
use hsts_watch::presentation::RecordingSurface;

#[derive(Parser)]
#[command(name = "hsts-watch")]
#[command(about = "Report HSTS coverage of top-level page loads", long_about = None)]
struct Cli {
    /// Optional TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a JSON Lines stream of host events
    Replay {
        /// Path to the event stream
        events: PathBuf,
    },
    /// Print the listener registrations the host must install
    Filters,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WatchConfig::default(),
    };
    logging::init(&config.observability);

    tracing::info!(
        config = ?cli.config,
        deny_substrings = config.classifier.deny_substrings.len(),
        deny_prefixes = config.classifier.deny_prefixes.len(),
        "Configuration loaded"
    );

    match cli.command {
        Commands::Replay { events } => replay(&config, events).await?,
        Commands::Filters => {
            println!("{}", serde_json::to_string_pretty(&registrations())?);
        }
    }

    Ok(())
}

async fn replay(config: &WatchConfig, path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let events = read_events_file(&path)?;
    tracing::info!(path = %path.display(), count = events.len(), "Replaying events");

    let handlers = Handlers::from_config(config, RecordingSurface::new());
    let (event_loop, tx) = EventLoop::new(handlers);

    let (shutdown_tx, shutdown_rx) = broadcast::channel(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Interrupt received, stopping replay");
            let _ = shutdown_tx.send(());
        }
    });

    let worker = tokio::spawn(event_loop.run(shutdown_rx));
    for event in events {
        tx.send(event).map_err(|_| ReplayError::QueueClosed)?;
    }
    drop(tx);

    let handlers = worker.await?;
    let surface = handlers.into_presenter().into_surface();
    let report = json!({
        "calls": surface.calls(),
        "final": surface.state(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
