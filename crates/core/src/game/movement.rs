//! Player movement and item pickup.

use super::*;
use crate::rules::{POTION_HEAL, SWORD_ATTACK_BONUS};

impl Game {
    pub(super) fn move_player(&mut self, direction: Direction) -> MoveOutcome {
        let from = self.player.pos;
        let to = from.step(direction);

        if let Some(reason) = self.move_blocker(to) {
            debug!(?from, ?to, ?reason, "move blocked");
            return MoveOutcome::Blocked(reason);
        }

        self.grid.take_occupant(from);
        let pickup = match self.grid.take_occupant(to) {
            Some(Occupant::HealthPotion) => Some(self.drink_potion()),
            Some(Occupant::Sword) => Some(self.take_sword()),
            _ => None,
        };
        self.grid.set_occupant(to, Occupant::Player);
        self.player.pos = to;

        MoveOutcome::Moved { to, pickup }
    }

    fn move_blocker(&self, to: Pos) -> Option<BlockReason> {
        if !self.grid.in_bounds(to) {
            return Some(BlockReason::OutOfBounds);
        }
        if self.grid.terrain_at(to) == Terrain::Wall {
            return Some(BlockReason::Wall);
        }
        if matches!(self.grid.occupant_at(to), Some(Occupant::Enemy(_))) {
            return Some(BlockReason::Enemy);
        }
        None
    }

    fn drink_potion(&mut self) -> Pickup {
        let before = self.player.hp;
        self.player.hp = self.player.max_hp.min(before + POTION_HEAL);
        let healed = self.player.hp - before;
        self.push_log(LogEvent::PotionDrunk { healed, hp: self.player.hp });
        Pickup::HealthPotion { healed }
    }

    fn take_sword(&mut self) -> Pickup {
        self.player.attack += SWORD_ATTACK_BONUS;
        self.push_log(LogEvent::SwordTaken { attack: self.player.attack });
        Pickup::Sword { attack_bonus: SWORD_ATTACK_BONUS }
    }
}
