//! The player's melee attack against every orthogonally adjacent enemy.

use super::*;

impl Game {
    /// Hits each adjacent enemy once, in neighbor order right, left, down, up.
    pub(super) fn attack(&mut self) -> AttackReport {
        let damage = self.player.attack;
        let mut report = AttackReport::default();

        for pos in self.player.pos.neighbors() {
            let Some(Occupant::Enemy(id)) = self.grid.occupant_at(pos) else {
                continue;
            };
            let Some(enemy) = self.enemies.get_mut(id) else {
                continue;
            };
            enemy.hp -= damage;
            let remaining_hp = enemy.hp;
            let killed = remaining_hp <= 0;

            if killed {
                self.grid.take_occupant(pos);
                self.enemies.remove(id);
                self.push_log(LogEvent::EnemySlain { pos });
            } else {
                self.push_log(LogEvent::EnemyHit { pos, damage, remaining_hp });
            }
            report.hits.push(AttackHit { enemy: id, damage, remaining_hp, killed });
        }

        if !report.hits.is_empty() {
            debug!(hits = report.hits.len(), kills = report.kills(), "player attacked");
        }
        report
    }
}
