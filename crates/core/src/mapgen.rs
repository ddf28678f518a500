//! Procedural dungeon generation split into coherent submodules.

pub mod connectivity;
pub mod model;

mod corridors;
mod generator;
mod rooms;
mod spawns;

pub use connectivity::{PruneReport, find_disconnected_floor, first_floor, reachable_from};
pub use corridors::CorridorPlan;
pub use generator::DungeonGenerator;
pub use model::{GeneratedDungeon, GenerationSummary};
pub use rooms::{Room, RoomLayout};

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::error::GenerationError;

/// Generates the standard 40x24 dungeon for a run seed.
pub fn generate_dungeon(seed: u64) -> Result<GeneratedDungeon, GenerationError> {
    DungeonGenerator::new().generate(&mut ChaCha8Rng::seed_from_u64(seed))
}
