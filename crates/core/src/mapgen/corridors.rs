//! Full-length straight corridors with a no-adjacent-lines spacing rule.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::grid::Grid;
use crate::rng::{roll_below, roll_range};
use crate::rules::{CORRIDOR_ATTEMPTS_PER_LINE, MAX_CORRIDORS, MIN_CORRIDORS};
use crate::types::Terrain;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorridorPlan {
    pub rows: Vec<usize>,
    pub columns: Vec<usize>,
}

pub(super) fn carve_corridors<R: Rng>(grid: &mut Grid, rng: &mut R) -> CorridorPlan {
    let row_count = roll_range(rng, MIN_CORRIDORS, MAX_CORRIDORS);
    let column_count = roll_range(rng, MIN_CORRIDORS, MAX_CORRIDORS);

    let rows = pick_spaced_lines(rng, grid.height(), row_count);
    for &y in &rows {
        grid.fill_row(y, Terrain::Floor);
    }

    let columns = pick_spaced_lines(rng, grid.width(), column_count);
    for &x in &columns {
        grid.fill_column(x, Terrain::Floor);
    }

    CorridorPlan { rows, columns }
}

/// Draws up to `count` distinct lines in `0..extent`, each more than one apart from the rest.
fn pick_spaced_lines<R: Rng>(rng: &mut R, extent: usize, count: usize) -> Vec<usize> {
    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    if extent == 0 {
        return chosen;
    }

    for _ in 0..count {
        let mut picked = None;
        for _ in 0..CORRIDOR_ATTEMPTS_PER_LINE {
            let candidate = roll_below(rng, extent);
            if chosen.iter().all(|&line| line.abs_diff(candidate) > 1) {
                picked = Some(candidate);
                break;
            }
        }
        match picked {
            Some(line) => chosen.push(line),
            None => {
                warn!(extent, placed = chosen.len(), "no room left for another corridor");
                break;
            }
        }
    }
    chosen
}
