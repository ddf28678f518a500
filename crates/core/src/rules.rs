//! Fixed dungeon dimensions, generation ranges and combat numbers.

pub const GRID_WIDTH: usize = 40;
pub const GRID_HEIGHT: usize = 24;

pub const MIN_ROOMS: usize = 5;
pub const MAX_ROOMS: usize = 10;
pub const MIN_ROOM_SIDE: usize = 3;
pub const MAX_ROOM_SIDE: usize = 8;
/// Shared across every room of one generation pass.
pub const ROOM_ATTEMPT_BUDGET: u32 = 1000;
pub const ROOM_MARGIN: usize = 1;

pub const MIN_CORRIDORS: usize = 3;
pub const MAX_CORRIDORS: usize = 5;
pub const CORRIDOR_ATTEMPTS_PER_LINE: u32 = 1000;

pub const FREE_CELL_ATTEMPTS: u32 = 10_000;
/// Full carve-and-populate passes before generation gives up.
pub const GENERATION_PASSES: u32 = 8;

pub const HEALTH_POTION_COUNT: usize = 10;
pub const SWORD_COUNT: usize = 2;
pub const ENEMY_COUNT: usize = 10;

pub const PLAYER_MAX_HP: i32 = 100;
pub const PLAYER_ATTACK: i32 = 10;
pub const ENEMY_MAX_HP: i32 = 100;
pub const ENEMY_ATTACK: i32 = 10;

pub const POTION_HEAL: i32 = 30;
pub const SWORD_ATTACK_BONUS: i32 = 10;

pub const ENEMY_TICK_MILLIS: u64 = 800;

pub const LOG_CAPACITY: usize = 64;
