use anyhow::{Context, Result};
use clap::Parser;
use delve_core::{GenerationSummary, Pos, generate_dungeon};
use serde::Serialize;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Print a generated dungeon for a seed", long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Emit JSON instead of the ASCII map.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct MapReport<'a> {
    seed: u64,
    rows: Vec<String>,
    player: Pos,
    enemies: Vec<Pos>,
    summary: &'a GenerationSummary,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    let dungeon = generate_dungeon(args.seed)
        .with_context(|| format!("generating dungeon for seed {}", args.seed))?;

    let grid = &dungeon.grid;
    let rows: Vec<String> = (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| grid.tag_at(Pos { y: y as i32, x: x as i32 }).glyph())
                .collect()
        })
        .collect();

    if args.json {
        let report = MapReport {
            seed: args.seed,
            rows,
            player: dungeon.player.pos,
            enemies: dungeon.enemies.values().map(|enemy| enemy.pos).collect(),
            summary: &dungeon.summary,
        };
        let json = serde_json::to_string_pretty(&report).context("serializing map report")?;
        println!("{json}");
        return Ok(());
    }

    for row in &rows {
        println!("{row}");
    }
    let summary = &dungeon.summary;
    println!();
    println!("Seed: {}", args.seed);
    println!(
        "Rooms: {}/{} ({} attempts)",
        summary.rooms.len(),
        summary.room_target,
        summary.room_attempts
    );
    println!(
        "Corridors: rows {:?} columns {:?}",
        summary.corridors.rows, summary.corridors.columns
    );
    println!(
        "Floor: {} cells ({} pruned), passes {}",
        summary.floor_cells, summary.pruning.removed, summary.passes
    );

    Ok(())
}
