//! Generation pipeline: rooms, corridors, connectivity pruning, then population.

use rand_chacha::rand_core::Rng;
use tracing::{info, warn};

use crate::error::GenerationError;
use crate::grid::Grid;
use crate::rules::{GENERATION_PASSES, GRID_HEIGHT, GRID_WIDTH};

use super::connectivity::prune_unreachable;
use super::corridors::carve_corridors;
use super::model::{GeneratedDungeon, GenerationSummary};
use super::rooms::place_rooms;
use super::spawns::populate;

pub struct DungeonGenerator {
    width: usize,
    height: usize,
}

impl Default for DungeonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DungeonGenerator {
    pub fn new() -> Self {
        Self { width: GRID_WIDTH, height: GRID_HEIGHT }
    }

    #[cfg(test)]
    pub(crate) fn with_size(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Carves the terrain only: rooms, corridors and pruning, no occupants.
    pub fn carve<R: Rng>(&self, rng: &mut R) -> (Grid, GenerationSummary) {
        let mut grid = Grid::new(self.width, self.height);

        let layout = place_rooms(&mut grid, rng);
        let corridors = carve_corridors(&mut grid, rng);
        let pruning = prune_unreachable(&mut grid);

        let summary = GenerationSummary {
            room_target: layout.target_count,
            room_attempts: layout.attempts_used,
            rooms: layout.rooms,
            corridors,
            pruning,
            floor_cells: grid.floor_count(),
            passes: 1,
        };
        (grid, summary)
    }

    /// Carves and populates. A pass whose pruned floor cannot hold every entity is thrown
    /// away and carving starts over from the same stream, up to a fixed number of passes.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedDungeon, GenerationError> {
        let mut pass = 1;
        loop {
            match self.generate_pass(rng, pass) {
                Ok(dungeon) => return Ok(dungeon),
                Err(err) if pass < GENERATION_PASSES => {
                    warn!(pass, %err, "pruned dungeon too small to populate; carving again");
                    pass += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn generate_pass<R: Rng>(
        &self,
        rng: &mut R,
        pass: u32,
    ) -> Result<GeneratedDungeon, GenerationError> {
        let (mut grid, mut summary) = self.carve(rng);
        summary.passes = pass;
        let population = populate(&mut grid, rng)?;

        info!(
            rooms = summary.rooms.len(),
            corridors = summary.corridors.rows.len() + summary.corridors.columns.len(),
            floor = summary.floor_cells,
            pruned = summary.pruning.removed,
            enemies = population.enemies.len(),
            pass,
            "dungeon generated"
        );

        Ok(GeneratedDungeon {
            grid,
            player: population.player,
            enemies: population.enemies,
            summary,
        })
    }
}
