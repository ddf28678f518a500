use crate::rules::{ENEMY_ATTACK, ENEMY_MAX_HP, PLAYER_ATTACK, PLAYER_MAX_HP};
use crate::types::{EnemyId, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self { pos, hp: PLAYER_MAX_HP, max_hp: PLAYER_MAX_HP, attack: PLAYER_ATTACK }
    }

    pub fn hp_ratio(&self) -> f32 {
        hp_ratio(self.hp, self.max_hp)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub id: EnemyId,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

impl Enemy {
    pub fn new(id: EnemyId, pos: Pos) -> Self {
        Self { id, pos, hp: ENEMY_MAX_HP, max_hp: ENEMY_MAX_HP, attack: ENEMY_ATTACK }
    }

    pub fn hp_ratio(&self) -> f32 {
        hp_ratio(self.hp, self.max_hp)
    }
}

/// Health bar fill, clamped to `0.0..=1.0`.
pub fn hp_ratio(hp: i32, max_hp: i32) -> f32 {
    if max_hp <= 0 {
        return 0.0;
    }
    (hp as f32 / max_hp as f32).clamp(0.0, 1.0)
}
