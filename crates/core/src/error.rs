//! Error types for dungeon generation and state auditing.
//!
//! Gameplay rejections (walking into a wall, attacking nothing) are not errors; they are
//! reported as values by the turn engine.

use crate::types::Pos;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("no free floor cell left to place {what}")]
    NoFreeFloor { what: &'static str },
}

/// A broken occupancy invariant found by [`crate::Game::check_invariants`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("expected exactly one player cell, found {count}")]
    PlayerCellCount { count: usize },

    #[error("player record at {record:?} does not match its grid cell")]
    PlayerMisplaced { record: Pos },

    #[error("{cells} enemy cells for {enemies} live enemies")]
    EnemyCellCount { cells: usize, enemies: usize },

    #[error("enemy at {pos:?} is not marked on the grid")]
    EnemyMisplaced { pos: Pos },

    #[error("floor cell {pos:?} is unreachable from the rest of the dungeon")]
    Disconnected { pos: Pos },
}
