//! Item, player and enemy placement onto free floor cells.

use rand_chacha::rand_core::Rng;
use slotmap::SlotMap;
use tracing::warn;

use crate::error::GenerationError;
use crate::grid::Grid;
use crate::rng::roll_below;
use crate::rules::{ENEMY_COUNT, FREE_CELL_ATTEMPTS, HEALTH_POTION_COUNT, SWORD_COUNT};
use crate::state::{Enemy, Player};
use crate::types::{EnemyId, Item, Occupant, Pos};

pub(super) struct Population {
    pub(super) player: Player,
    pub(super) enemies: SlotMap<EnemyId, Enemy>,
}

/// Potions, then swords, then the player, then enemies; each consumes its cell.
pub(super) fn populate<R: Rng>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<Population, GenerationError> {
    for _ in 0..HEALTH_POTION_COUNT {
        place_item(grid, rng, Item::HealthPotion)?;
    }
    for _ in 0..SWORD_COUNT {
        place_item(grid, rng, Item::Sword)?;
    }

    let player_pos = random_free_cell(grid, rng, "the player")?;
    grid.set_occupant(player_pos, Occupant::Player);
    let player = Player::new(player_pos);

    let mut enemies = SlotMap::with_capacity_and_key(ENEMY_COUNT);
    for _ in 0..ENEMY_COUNT {
        let pos = random_free_cell(grid, rng, "an enemy")?;
        let id = enemies.insert_with_key(|id| Enemy::new(id, pos));
        grid.set_occupant(pos, Occupant::Enemy(id));
    }

    Ok(Population { player, enemies })
}

fn place_item<R: Rng>(grid: &mut Grid, rng: &mut R, item: Item) -> Result<Pos, GenerationError> {
    let what = match item {
        Item::HealthPotion => "a health potion",
        Item::Sword => "a sword",
    };
    let pos = random_free_cell(grid, rng, what)?;
    grid.set_occupant(pos, item.into());
    Ok(pos)
}

/// Uniform draws until a free floor cell turns up; past the attempt cap, a uniform pick
/// among the free cells that remain.
fn random_free_cell<R: Rng>(
    grid: &Grid,
    rng: &mut R,
    what: &'static str,
) -> Result<Pos, GenerationError> {
    if grid.width() == 0 || grid.height() == 0 {
        return Err(GenerationError::NoFreeFloor { what });
    }

    for _ in 0..FREE_CELL_ATTEMPTS {
        let pos = Pos {
            y: roll_below(rng, grid.height()) as i32,
            x: roll_below(rng, grid.width()) as i32,
        };
        if grid.is_free_floor(pos) {
            return Ok(pos);
        }
    }

    let free: Vec<Pos> = grid.positions().filter(|&pos| grid.is_free_floor(pos)).collect();
    if free.is_empty() {
        return Err(GenerationError::NoFreeFloor { what });
    }
    warn!(remaining = free.len(), what, "free-cell sampling fell back to a scan");
    Ok(free[roll_below(rng, free.len())])
}
