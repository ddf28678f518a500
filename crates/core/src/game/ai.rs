//! One enemy tick: adjacent enemies strike, the rest take one greedy step toward the player.

use super::*;
use crate::rng::coin_flip;

/// The cell one step from `from` toward `target` along a single axis.
///
/// When `from` is already aligned with `target` on that axis the result is `from` itself.
pub fn step_toward(from: Pos, target: Pos, along_x: bool) -> Pos {
    if along_x {
        from.offset(0, (target.x - from.x).signum())
    } else {
        from.offset((target.y - from.y).signum(), 0)
    }
}

impl Game {
    /// Advances every live enemy once, in collection order.
    pub fn advance_enemies(&mut self) -> TickReport {
        self.tick += 1;
        let ids: Vec<EnemyId> = self.enemies.keys().collect();
        let mut report = TickReport { tick: self.tick, actions: Vec::with_capacity(ids.len()) };

        for id in ids {
            let action = self.act_enemy(id);
            report.actions.push((id, action));
        }

        debug!(
            tick = self.tick,
            enemies = report.actions.len(),
            damage = report.damage_to_player(),
            "enemies advanced"
        );
        report
    }

    fn act_enemy(&mut self, id: EnemyId) -> EnemyAction {
        let Some(enemy) = self.enemies.get(id) else {
            return EnemyAction::Held;
        };
        let (from, attack) = (enemy.pos, enemy.attack);
        let player_pos = self.player.pos;

        if from.manhattan(player_pos) == 1 {
            self.player.hp -= attack;
            self.push_log(LogEvent::PlayerHit { damage: attack, hp: self.player.hp });
            return EnemyAction::Attacked { damage: attack };
        }

        // Only non-adjacent enemies consume a draw.
        let along_x = coin_flip(&mut self.rng);
        let to = step_toward(from, player_pos, along_x);
        if !self.grid.is_free_floor(to) {
            return EnemyAction::Held;
        }

        self.grid.take_occupant(from);
        self.grid.set_occupant(to, Occupant::Enemy(id));
        if let Some(enemy) = self.enemies.get_mut(id) {
            enemy.pos = to;
        }
        EnemyAction::Moved { from, to }
    }
}
