//! The shared cell substrate: a terrain layer plus an optional occupant per cell.

use crate::rules::{GRID_HEIGHT, GRID_WIDTH};
use crate::types::{CellTag, Occupant, Pos, Terrain};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    terrain: Vec<Terrain>,
    occupants: Vec<Option<Occupant>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl Grid {
    /// All-wall grid with no occupants.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            terrain: vec![Terrain::Wall; width * height],
            occupants: vec![None; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-bounds positions read as wall.
    pub fn terrain_at(&self, pos: Pos) -> Terrain {
        if !self.in_bounds(pos) {
            return Terrain::Wall;
        }
        self.terrain[self.index(pos)]
    }

    pub fn occupant_at(&self, pos: Pos) -> Option<Occupant> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.occupants[self.index(pos)]
    }

    /// Floor with nothing standing or lying on it.
    pub fn is_free_floor(&self, pos: Pos) -> bool {
        self.terrain_at(pos) == Terrain::Floor && self.occupant_at(pos).is_none()
    }

    pub fn tag_at(&self, pos: Pos) -> CellTag {
        match (self.terrain_at(pos), self.occupant_at(pos)) {
            (Terrain::Wall, _) => CellTag::Wall,
            (Terrain::Floor, None) => CellTag::Floor,
            (Terrain::Floor, Some(Occupant::HealthPotion)) => CellTag::HealthPotion,
            (Terrain::Floor, Some(Occupant::Sword)) => CellTag::Sword,
            (Terrain::Floor, Some(Occupant::Player)) => CellTag::PlayerOccupied,
            (Terrain::Floor, Some(Occupant::Enemy(_))) => CellTag::EnemyOccupied,
        }
    }

    /// Turning a cell into wall drops whatever occupied it.
    pub fn set_terrain(&mut self, pos: Pos, terrain: Terrain) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.terrain[idx] = terrain;
        if terrain == Terrain::Wall {
            self.occupants[idx] = None;
        }
    }

    /// Occupants only land on floor; placing onto wall is ignored.
    pub fn set_occupant(&mut self, pos: Pos, occupant: Occupant) {
        if self.terrain_at(pos) != Terrain::Floor {
            return;
        }
        let idx = self.index(pos);
        self.occupants[idx] = Some(occupant);
    }

    pub fn take_occupant(&mut self, pos: Pos) -> Option<Occupant> {
        if !self.in_bounds(pos) {
            return None;
        }
        let idx = self.index(pos);
        self.occupants[idx].take()
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    pub fn tags(&self) -> Vec<CellTag> {
        self.positions().map(|pos| self.tag_at(pos)).collect()
    }

    pub fn count_tag(&self, tag: CellTag) -> usize {
        self.positions().filter(|&pos| self.tag_at(pos) == tag).count()
    }

    pub fn floor_count(&self) -> usize {
        self.terrain.iter().filter(|&&terrain| terrain == Terrain::Floor).count()
    }

    pub fn fill_row(&mut self, y: usize, terrain: Terrain) {
        for x in 0..self.width {
            self.set_terrain(Pos { y: y as i32, x: x as i32 }, terrain);
        }
    }

    pub fn fill_column(&mut self, x: usize, terrain: Terrain) {
        for y in 0..self.height {
            self.set_terrain(Pos { y: y as i32, x: x as i32 }, terrain);
        }
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}
