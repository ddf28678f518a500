//! Output of one generation pass.

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::grid::Grid;
use crate::state::{Enemy, Player};
use crate::types::EnemyId;

use super::connectivity::PruneReport;
use super::corridors::CorridorPlan;
use super::rooms::Room;

/// A populated dungeon ready to be handed to a session.
#[derive(Clone, Debug)]
pub struct GeneratedDungeon {
    pub grid: Grid,
    pub player: Player,
    pub enemies: SlotMap<EnemyId, Enemy>,
    pub summary: GenerationSummary,
}

/// How the pass went. Kept for diagnostics only; sessions do not hold on to rooms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub room_target: usize,
    pub room_attempts: u32,
    pub rooms: Vec<Room>,
    pub corridors: CorridorPlan,
    pub pruning: PruneReport,
    pub floor_cells: usize,
    /// Carving passes used, counting the accepted one.
    pub passes: u32,
}
