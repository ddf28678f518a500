//! Stable snapshot hashing for determinism checks.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

fn tag_code(tag: CellTag) -> u8 {
    match tag {
        CellTag::Wall => 0,
        CellTag::Floor => 1,
        CellTag::HealthPotion => 2,
        CellTag::Sword => 3,
        CellTag::PlayerOccupied => 4,
        CellTag::EnemyOccupied => 5,
    }
}

impl Game {
    /// Hash over everything a replay of the same seed and inputs must reproduce.
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_usize(self.grid.width());
        hasher.write_usize(self.grid.height());
        for pos in self.grid.positions() {
            hasher.write_u8(tag_code(self.grid.tag_at(pos)));
        }

        hasher.write_i32(self.player.pos.x);
        hasher.write_i32(self.player.pos.y);
        hasher.write_i32(self.player.hp);
        hasher.write_i32(self.player.attack);

        hasher.write_usize(self.enemies.len());
        for enemy in self.enemies.values() {
            hasher.write_i32(enemy.pos.x);
            hasher.write_i32(enemy.pos.y);
            hasher.write_i32(enemy.hp);
            hasher.write_i32(enemy.attack);
        }
        hasher.finish()
    }
}
