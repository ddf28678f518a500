//! Hand-built sessions for tests and tooling.

use super::*;
use crate::rules::ENEMY_MAX_HP;

impl Game {
    /// Wraps a prepared grid. Any player or enemy markers already on it are cleared and the
    /// player is placed at `player_pos`, which must be floor without an occupant.
    pub fn with_layout(
        seed: u64,
        mut grid: Grid,
        player_pos: Pos,
    ) -> Result<Self, InvariantViolation> {
        let stale: Vec<Pos> = grid
            .positions()
            .filter(|&pos| {
                matches!(grid.occupant_at(pos), Some(Occupant::Player | Occupant::Enemy(_)))
            })
            .collect();
        for pos in stale {
            grid.take_occupant(pos);
        }

        if !grid.is_free_floor(player_pos) {
            return Err(InvariantViolation::PlayerMisplaced { record: player_pos });
        }
        grid.set_occupant(player_pos, Occupant::Player);

        Ok(Self {
            seed,
            tick: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            grid,
            player: Player::new(player_pos),
            enemies: SlotMap::with_key(),
            log: VecDeque::new(),
        })
    }

    /// Adds an enemy on free floor. `max_hp` is the larger of `hp` and the default maximum.
    pub fn spawn_enemy(&mut self, pos: Pos, hp: i32, attack: i32) -> Option<EnemyId> {
        if !self.grid.is_free_floor(pos) {
            return None;
        }
        let id = self.enemies.insert_with_key(|id| Enemy {
            id,
            pos,
            hp,
            max_hp: hp.max(ENEMY_MAX_HP),
            attack,
        });
        self.grid.set_occupant(pos, Occupant::Enemy(id));
        Some(id)
    }

    /// Drops an item on free floor. Returns whether it was placed.
    pub fn place_item(&mut self, pos: Pos, item: Item) -> bool {
        if !self.grid.is_free_floor(pos) {
            return false;
        }
        self.grid.set_occupant(pos, item.into());
        true
    }

    /// Sets current hp only; the maximum is left alone.
    pub fn set_player_hp(&mut self, hp: i32) {
        self.player.hp = hp;
    }

    pub fn set_player_attack(&mut self, attack: i32) {
        self.player.attack = attack;
    }
}
