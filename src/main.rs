//! N-in-a-row CLI
//!
//! Play three-in-a-row or four-in-a-row against the computer in the terminal.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictac::ui::TextApp;
use tictac::{AIEngine, AppConfig, Variant};

/// Play an N-in-a-row game against the computer.
#[derive(Parser)]
#[command(name = "tictac", about = "Play N-in-a-row against the computer")]
struct Cli {
    /// Game variant: classic (3x3) or four (5x5, four in a row)
    #[arg(long, value_enum)]
    variant: Option<Variant>,

    /// Path to TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the search depth limit
    #[arg(long)]
    depth: Option<u32>,

    /// Search without alpha-beta cutoffs
    #[arg(long)]
    no_pruning: bool,

    /// Always report how long each computer move took
    #[arg(long)]
    timing: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_or_default(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    // Apply CLI overrides
    if let Some(variant) = cli.variant {
        config.variant = variant.config();
    }
    if let Some(depth) = cli.depth {
        config.variant.depth_limit = Some(depth);
    }
    if cli.timing {
        config.report_timing = Some(true);
    }
    config.validate().context("invalid configuration")?;

    info!(variant = ?config.variant, pruning = !cli.no_pruning, "starting game");

    let engine = if cli.no_pruning {
        AIEngine::without_pruning(config.variant)
    } else {
        AIEngine::new(config.variant)
    };

    let stdin = io::stdin();
    let mut app = TextApp::new(&config, engine, stdin.lock(), io::stdout());
    let status = app.run().context("game loop failed")?;

    info!(?status, moves = app.state().move_history.len(), "session ended");
    Ok(())
}
