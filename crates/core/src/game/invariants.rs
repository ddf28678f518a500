//! Occupancy and connectivity audit, used by the fuzzers and property tests.

use super::*;

impl Game {
    /// Checks that the grid and the entity records agree and that the floor is one region.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let player_cells = self.grid.count_tag(CellTag::PlayerOccupied);
        if player_cells != 1 {
            return Err(InvariantViolation::PlayerCellCount { count: player_cells });
        }
        if self.grid.occupant_at(self.player.pos) != Some(Occupant::Player) {
            return Err(InvariantViolation::PlayerMisplaced { record: self.player.pos });
        }

        let enemy_cells = self.grid.count_tag(CellTag::EnemyOccupied);
        if enemy_cells != self.enemies.len() {
            return Err(InvariantViolation::EnemyCellCount {
                cells: enemy_cells,
                enemies: self.enemies.len(),
            });
        }
        for (id, enemy) in &self.enemies {
            if self.grid.occupant_at(enemy.pos) != Some(Occupant::Enemy(id)) {
                return Err(InvariantViolation::EnemyMisplaced { pos: enemy.pos });
            }
        }

        if let Some(pos) = find_disconnected_floor(&self.grid) {
            return Err(InvariantViolation::Disconnected { pos });
        }
        Ok(())
    }
}
