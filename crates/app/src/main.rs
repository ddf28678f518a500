use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use delve::config::AppConfig;
use delve::session::SessionWorker;
use delve::{app_loop, format_seed, format_snapshot_hash, logging, seed, terminal};
use delve_core::Game;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "delve", version, about = "Turn-based dungeon crawl in the terminal")]
struct Cli {
    /// Run seed; a fresh one is generated when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a TOML config file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enemy tick period in milliseconds, overriding the config file.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())
        .context("loading configuration")?
        .with_tick_override(cli.tick_ms)
        .context("applying --tick-ms")?;
    let _log_guard = logging::init(&config.resolved_log_dir(), &config.log_filter)?;

    let seed = seed::resolve_seed(cli.seed, seed::generate_runtime_seed());
    info!(seed = seed.value(), source = seed.source(), "starting session");
    let game = Game::new(seed.value())
        .with_context(|| format!("generating dungeon for seed {}", format_seed(seed.value())))?;

    let (handle, worker) = SessionWorker::spawn(game, config.tick_interval());

    let mut stdout = terminal::init()?;
    let guard = terminal::TerminalGuard;
    let outcome = app_loop::run(&handle, &mut stdout).await;
    drop(guard);

    if let Err(err) = &outcome {
        error!(error = %err, "event loop failed");
    }
    // The worker may already be gone if the loop ended because the feed closed.
    let _ = handle.shutdown().await;
    let game = worker.await.context("joining session worker")?;

    println!(
        "seed {}  ticks {}  enemies left {}  hash {}",
        format_seed(game.seed()),
        game.tick(),
        game.enemy_count(),
        format_snapshot_hash(game.snapshot_hash())
    );
    outcome
}
