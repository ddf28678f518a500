//! Rejection-sampled rectangular rooms carved into an all-wall grid.

use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::grid::Grid;
use crate::rng::{roll_below, roll_range};
use crate::rules::{
    MAX_ROOM_SIDE, MAX_ROOMS, MIN_ROOM_SIDE, MIN_ROOMS, ROOM_ATTEMPT_BUDGET, ROOM_MARGIN,
};
use crate::types::{Pos, Terrain};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Room {
    /// True when the rooms overlap or share an edge.
    pub fn overlaps_with_margin(&self, other: &Room) -> bool {
        self.x < other.x + other.width + ROOM_MARGIN
            && self.x + self.width + ROOM_MARGIN > other.x
            && self.y < other.y + other.height + ROOM_MARGIN
            && self.y + self.height + ROOM_MARGIN > other.y
    }

    pub fn contains(&self, pos: Pos) -> bool {
        let (Ok(px), Ok(py)) = (usize::try_from(pos.x), usize::try_from(pos.y)) else {
            return false;
        };
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }
}

/// Rooms accepted during one generation pass. Dropped once generation ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RoomLayout {
    pub target_count: usize,
    pub attempts_used: u32,
    pub rooms: Vec<Room>,
}

impl RoomLayout {
    pub fn budget_exhausted(&self) -> bool {
        self.rooms.len() < self.target_count
    }
}

pub(super) fn place_rooms<R: Rng>(grid: &mut Grid, rng: &mut R) -> RoomLayout {
    let target_count = roll_range(rng, MIN_ROOMS, MAX_ROOMS);
    let mut layout = RoomLayout { target_count, ..RoomLayout::default() };

    while layout.rooms.len() < target_count && layout.attempts_used < ROOM_ATTEMPT_BUDGET {
        layout.attempts_used += 1;
        let Some(candidate) = sample_room(grid.width(), grid.height(), rng) else {
            continue;
        };
        if layout.rooms.iter().any(|existing| candidate.overlaps_with_margin(existing)) {
            continue;
        }
        carve_room(grid, &candidate);
        layout.rooms.push(candidate);
    }

    if layout.budget_exhausted() {
        warn!(
            target = target_count,
            placed = layout.rooms.len(),
            "room attempt budget exhausted; keeping fewer rooms"
        );
    } else {
        debug!(placed = layout.rooms.len(), attempts = layout.attempts_used, "rooms placed");
    }
    layout
}

fn sample_room<R: Rng>(grid_width: usize, grid_height: usize, rng: &mut R) -> Option<Room> {
    let width = roll_range(rng, MIN_ROOM_SIDE, MAX_ROOM_SIDE);
    let height = roll_range(rng, MIN_ROOM_SIDE, MAX_ROOM_SIDE);
    // Origins keep one spare column and row before the far edge.
    let x_span = grid_width.checked_sub(width + 1).filter(|&span| span > 0)?;
    let y_span = grid_height.checked_sub(height + 1).filter(|&span| span > 0)?;
    let x = roll_below(rng, x_span);
    let y = roll_below(rng, y_span);
    Some(Room { x, y, width, height })
}

pub(super) fn carve_room(grid: &mut Grid, room: &Room) {
    for y in room.y..room.y + room.height {
        for x in room.x..room.x + room.width {
            grid.set_terrain(Pos { y: y as i32, x: x as i32 }, Terrain::Floor);
        }
    }
}
