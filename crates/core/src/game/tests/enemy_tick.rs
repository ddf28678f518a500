//! Enemy AI ticks: adjacency strikes, greedy steps and blocking.

use rand_chacha::rand_core::Rng;

use super::support::*;

#[test]
fn adjacent_enemy_strikes_without_moving() {
    let mut game = arena_game(pos(3, 4));
    let enemy = game.spawn_enemy(pos(3, 3), 100, 10).expect("free floor");

    let report = game.advance_enemies();

    assert_eq!(report.tick, 1);
    assert_eq!(report.actions, vec![(enemy, EnemyAction::Attacked { damage: 10 })]);
    assert_eq!(report.damage_to_player(), 10);
    assert_eq!(game.player().hp, 90);
    assert_eq!(game.enemy(enemy).map(|e| e.pos), Some(pos(3, 3)));
    assert_eq!(game.tick(), 1);
}

#[test]
fn adjacent_strike_does_not_consume_randomness() {
    let mut striking = arena_game(pos(3, 4));
    striking.spawn_enemy(pos(3, 3), 100, 10);
    let mut idle = arena_game(pos(3, 4));
    idle.spawn_enemy(pos(3, 3), 100, 10);

    striking.advance_enemies();
    // Both sessions still hold the same untouched stream.
    assert_eq!(striking.rng.next_u64(), idle.rng.next_u64());
}

#[test]
fn several_adjacent_enemies_all_strike() {
    let mut game = arena_game(pos(5, 5));
    game.spawn_enemy(pos(4, 5), 100, 10);
    game.spawn_enemy(pos(6, 5), 100, 15);
    game.spawn_enemy(pos(5, 6), 100, 5);

    let report = game.advance_enemies();
    assert_eq!(report.damage_to_player(), 30);
    assert_eq!(game.player().hp, 70);
}

#[test]
fn player_hp_may_go_negative_without_ending_the_session() {
    let mut game = arena_game(pos(5, 5));
    game.set_player_hp(5);
    game.spawn_enemy(pos(5, 4), 100, 10);

    game.advance_enemies();
    assert_eq!(game.player().hp, -5);
    assert!(game.is_player_defeated());

    // Commands and ticks keep working.
    assert!(game.apply(Command::Attack).mutated());
    game.advance_enemies();
    assert_eq!(game.player().hp, -15);
}

#[test]
fn step_toward_picks_one_axis() {
    let from = pos(1, 1);
    let target = pos(4, 6);
    assert_eq!(step_toward(from, target, true), pos(2, 1));
    assert_eq!(step_toward(from, target, false), pos(1, 2));
    assert_eq!(step_toward(pos(5, 5), pos(1, 0), true), pos(4, 5));
    assert_eq!(step_toward(pos(5, 5), pos(1, 0), false), pos(5, 4));
    // Aligned on the chosen axis: no movement.
    assert_eq!(step_toward(pos(3, 1), pos(3, 7), true), pos(3, 1));
}

#[test]
fn distant_enemy_takes_a_single_step_toward_the_player() {
    let mut game = arena_game(pos(4, 4));
    let enemy = game.spawn_enemy(pos(1, 1), 100, 10).expect("free floor");

    let report = game.advance_enemies();
    let (_, action) = report.actions[0];
    let expected = [pos(2, 1), pos(1, 2)];
    match action {
        EnemyAction::Moved { from, to } => {
            assert_eq!(from, pos(1, 1));
            assert!(expected.contains(&to), "unexpected step to {to:?}");
        }
        other => panic!("open arena step must succeed, got {other:?}"),
    }
    let now = game.enemy(enemy).map(|e| e.pos).expect("enemy alive");
    assert_eq!(game.grid().tag_at(now), CellTag::EnemyOccupied);
    assert_eq!(game.grid().tag_at(pos(1, 1)), CellTag::Floor);
    assert_eq!(game.player().hp, 100);
}

#[test]
fn aligned_enemy_either_closes_in_or_holds() {
    let mut game = arena_game(pos(6, 2));
    let enemy = game.spawn_enemy(pos(1, 2), 100, 10).expect("free floor");

    for _ in 0..200 {
        let report = game.advance_enemies();
        match report.actions[0].1 {
            EnemyAction::Moved { from, to } => assert_eq!(to, from.offset(0, 1)),
            EnemyAction::Held | EnemyAction::Attacked { .. } => {}
        }
        game.check_invariants().expect("occupancy stays consistent");
    }
    assert_eq!(game.enemy(enemy).map(|e| e.pos), Some(pos(5, 2)));
    assert!(game.player().hp < 100);
}

#[test]
fn blocked_step_has_no_fallback_axis() {
    let mut game = corridor_game(6);
    game.place_item(pos(4, 1), Item::HealthPotion);
    let enemy = game.spawn_enemy(pos(5, 1), 100, 10).expect("free floor");

    // The x step hits the potion and the y step is a no-op; items block enemies.
    for _ in 0..50 {
        let report = game.advance_enemies();
        assert_eq!(report.actions, vec![(enemy, EnemyAction::Held)]);
    }
    assert_eq!(game.grid().tag_at(pos(4, 1)), CellTag::HealthPotion);
    assert_eq!(game.enemy(enemy).map(|e| e.pos), Some(pos(5, 1)));
}

#[test]
fn walls_block_enemy_steps() {
    let mut grid = Grid::new(5, 5);
    grid.fill_row(2, Terrain::Floor);
    grid.fill_column(0, Terrain::Floor);
    let mut game = Game::with_layout(3, grid, pos(0, 0)).expect("corner is floor");
    let enemy = game.spawn_enemy(pos(4, 2), 100, 10).expect("free floor");

    for _ in 0..100 {
        game.advance_enemies();
        let at = game.enemy(enemy).map(|e| e.pos).expect("enemy alive");
        assert_eq!(game.grid().terrain_at(at), Terrain::Floor);
    }
}

#[test]
fn enemies_never_share_a_cell() {
    let mut game = arena_game(pos(9, 9));
    for x in 0..5 {
        game.spawn_enemy(pos(x, 0), 100, 10);
        game.spawn_enemy(pos(0, x + 1), 100, 10);
    }
    for _ in 0..60 {
        game.advance_enemies();
        game.check_invariants().expect("each enemy owns exactly one cell");
    }
    assert_eq!(game.enemy_count(), 10);
}

#[test]
fn tick_counter_advances_with_no_enemies() {
    let mut game = arena_game(pos(1, 1));
    let before = game.grid().clone();
    assert!(game.advance_enemies().actions.is_empty());
    assert!(game.advance_enemies().actions.is_empty());
    assert_eq!(game.tick(), 2);
    assert_eq!(game.grid(), &before);
}
