//! Breadth-first reachability over floor cells and pruning of unreached floor.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grid::Grid;
use crate::types::{Pos, Terrain};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PruneReport {
    pub seed: Option<Pos>,
    pub kept: usize,
    pub removed: usize,
}

/// First floor cell in row-major order.
pub fn first_floor(grid: &Grid) -> Option<Pos> {
    grid.positions().find(|&pos| grid.terrain_at(pos) == Terrain::Floor)
}

/// Visited mask (row-major) of the floor component containing `start`.
pub fn reachable_from(grid: &Grid, start: Pos) -> Vec<bool> {
    let mut visited = vec![false; grid.width() * grid.height()];
    if grid.terrain_at(start) != Terrain::Floor {
        return visited;
    }

    visited[grid.index(start)] = true;
    let mut open = VecDeque::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in pos.neighbors() {
            if grid.terrain_at(next) != Terrain::Floor {
                continue;
            }
            let idx = grid.index(next);
            if visited[idx] {
                continue;
            }
            visited[idx] = true;
            open.push_back(next);
        }
    }
    visited
}

/// Turns every floor cell outside the component of the first floor cell back into wall.
pub(super) fn prune_unreachable(grid: &mut Grid) -> PruneReport {
    let Some(seed) = first_floor(grid) else {
        return PruneReport::default();
    };

    let visited = reachable_from(grid, seed);
    let orphaned: Vec<Pos> = grid
        .positions()
        .filter(|&pos| grid.terrain_at(pos) == Terrain::Floor && !visited[grid.index(pos)])
        .collect();
    for &pos in &orphaned {
        grid.set_terrain(pos, Terrain::Wall);
    }

    let report = PruneReport {
        seed: Some(seed),
        kept: visited.iter().filter(|&&seen| seen).count(),
        removed: orphaned.len(),
    };
    debug!(
        seed = ?report.seed,
        kept = report.kept,
        removed = report.removed,
        "pruned unreachable floor"
    );
    report
}

/// The floor cell not reachable from the first floor cell, if any.
pub fn find_disconnected_floor(grid: &Grid) -> Option<Pos> {
    let seed = first_floor(grid)?;
    let visited = reachable_from(grid, seed);
    grid.positions()
        .find(|&pos| grid.terrain_at(pos) == Terrain::Floor && !visited[grid.index(pos)])
}
