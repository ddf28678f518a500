//! The game session: grid, player, live enemies and the turn engine that mutates them.
//!
//! A `Game` is a plain synchronous value. Every public mutator runs to completion before it
//! returns, so a caller that owns the `Game` (the session worker in the app) serializes
//! player commands and enemy ticks simply by calling one at a time.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::SlotMap;
use tracing::debug;

use crate::error::{GenerationError, InvariantViolation};
use crate::grid::Grid;
use crate::mapgen::{DungeonGenerator, GeneratedDungeon, find_disconnected_floor};
use crate::rules::LOG_CAPACITY;
use crate::state::{Enemy, Player};
use crate::types::*;
use crate::view::GameView;

mod ai;
mod combat;
mod hash;
mod invariants;
mod movement;
mod scenario;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use ai::step_toward;

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    grid: Grid,
    player: Player,
    enemies: SlotMap<EnemyId, Enemy>,
    log: VecDeque<LogEvent>,
}

impl Game {
    /// Generates a fresh dungeon. The generator and the enemy AI draw from the same stream.
    pub fn new(seed: u64) -> Result<Self, GenerationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let GeneratedDungeon { grid, player, enemies, .. } =
            DungeonGenerator::new().generate(&mut rng)?;
        Ok(Self { seed, tick: 0, rng, grid, player, enemies, log: VecDeque::new() })
    }

    /// Applies one player command to completion.
    pub fn apply(&mut self, command: Command) -> TurnReport {
        let report = match command {
            Command::Move(direction) => TurnReport::Move(self.move_player(direction)),
            Command::Attack => TurnReport::Attack(self.attack()),
        };
        debug!(?command, mutated = report.mutated(), "applied command");
        report
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of enemy ticks applied so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &SlotMap<EnemyId, Enemy> {
        &self.enemies
    }

    pub fn enemy(&self, id: EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }

    pub fn enemy_count(&self) -> usize {
        self.enemies.len()
    }

    /// Oldest first.
    pub fn log(&self) -> impl Iterator<Item = &LogEvent> {
        self.log.iter()
    }

    /// Display-only; no operation is gated on it.
    pub fn is_player_defeated(&self) -> bool {
        self.player.hp <= 0
    }

    pub fn view(&self) -> GameView {
        GameView::capture(self)
    }

    fn push_log(&mut self, event: LogEvent) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(event);
    }
}
