use anyhow::{Result, bail};
use clap::Parser;
use delve_core::{Command, Game};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::info;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    steps: u32,
    /// Number of consecutive seeds to run, starting at `seed`.
    #[arg(short, long, default_value_t = 1)]
    runs: u64,
}

const COMMANDS: [Command; 6] = [
    Command::MOVE_UP,
    Command::MOVE_DOWN,
    Command::MOVE_LEFT,
    Command::MOVE_RIGHT,
    Command::Attack,
    Command::Attack, // Bias to attack
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn fuzz_seed(seed: u64, steps: u32) -> Result<Game> {
    let mut game = Game::new(seed)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed ^ 0x5EED);

    for step in 0..steps {
        if rng.next_u64() % 4 == 0 {
            game.advance_enemies();
        } else {
            let command = choose(&mut rng, &COMMANDS);
            let before = game.snapshot_hash();
            let report = game.apply(command);
            if !report.mutated() && game.snapshot_hash() != before {
                bail!("seed {seed} step {step}: rejected {command:?} changed state");
            }
        }

        let player = game.player();
        if player.hp > player.max_hp {
            bail!("seed {seed} step {step}: player hp {} above max {}", player.hp, player.max_hp);
        }
        if let Err(violation) = game.check_invariants() {
            bail!("seed {seed} step {step}: {violation}");
        }
    }
    Ok(game)
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    println!(
        "Starting fuzz harness on {} seed(s) from {} for {} steps each...",
        args.runs, args.seed, args.steps
    );

    for seed in args.seed..args.seed.saturating_add(args.runs) {
        let game = fuzz_seed(seed, args.steps)?;
        info!(
            seed,
            ticks = game.tick(),
            enemies_left = game.enemy_count(),
            hp = game.player().hp,
            "fuzz run finished"
        );
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
