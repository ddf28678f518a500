//! Owned render snapshots of a session.

use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::state::hp_ratio;
use crate::types::{CellTag, EnemyId, Pos};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorView {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
}

impl ActorView {
    pub fn hp_ratio(&self) -> f32 {
        hp_ratio(self.hp, self.max_hp)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
}

impl PlayerView {
    pub fn hp_ratio(&self) -> f32 {
        hp_ratio(self.hp, self.max_hp)
    }
}

/// Everything a renderer needs, detached from the live session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub width: usize,
    pub height: usize,
    /// Row-major.
    pub cells: Vec<CellTag>,
    pub player: PlayerView,
    pub enemies: Vec<(EnemyId, ActorView)>,
    pub tick: u64,
    pub messages: Vec<String>,
}

impl GameView {
    pub(crate) fn capture(game: &Game) -> Self {
        let grid = game.grid();
        let player = game.player();
        Self {
            width: grid.width(),
            height: grid.height(),
            cells: grid.tags(),
            player: PlayerView {
                pos: player.pos,
                hp: player.hp,
                max_hp: player.max_hp,
                attack: player.attack,
            },
            enemies: game
                .enemies()
                .iter()
                .map(|(id, enemy)| {
                    (id, ActorView { pos: enemy.pos, hp: enemy.hp, max_hp: enemy.max_hp })
                })
                .collect(),
            tick: game.tick(),
            messages: game.log().map(|event| event.message()).collect(),
        }
    }

    /// Wall for anything outside the snapshot.
    pub fn tag_at(&self, pos: Pos) -> CellTag {
        if pos.x < 0 || pos.y < 0 {
            return CellTag::Wall;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        if x >= self.width || y >= self.height {
            return CellTag::Wall;
        }
        self.cells[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellTag]> {
        self.cells.chunks(self.width.max(1))
    }

    /// One line per grid row using the glyphs of [`CellTag::glyph`].
    pub fn draw_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.rows() {
            out.extend(row.iter().map(|tag| tag.glyph()));
            out.push('\n');
        }
        out
    }

    pub fn latest_message(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}
