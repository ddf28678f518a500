use std::time::Duration;

use delve::app_loop::{LoopControl, dispatch};
use delve::input::KeyAction;
use delve::session::{SessionError, SessionWorker};
use delve_core::{
    AttackReport, BlockReason, Command, EnemyAction, Game, Grid, MoveOutcome, Pos, Terrain,
    TurnReport,
};

const TICK: Duration = Duration::from_millis(800);

fn at(x: i32, y: i32) -> Pos {
    Pos { y, x }
}

fn arena_game() -> Game {
    let mut grid = Grid::new(10, 10);
    for y in 0..10 {
        grid.fill_row(y, Terrain::Floor);
    }
    Game::with_layout(5, grid, at(3, 4)).expect("free floor")
}

#[tokio::test(start_paused = true)]
async fn timer_drives_one_enemy_step_per_period() {
    let mut game = arena_game();
    game.spawn_enemy(at(3, 3), 100, 10).expect("free floor");
    let (handle, worker) = SessionWorker::spawn(game, TICK);

    tokio::time::sleep(TICK * 3 + Duration::from_millis(10)).await;
    let view = handle.snapshot().await.expect("worker alive");
    assert_eq!(view.tick, 3);
    assert_eq!(view.player.hp, 70);

    handle.shutdown().await.expect("worker alive");
    let game = worker.await.expect("worker joined");
    assert_eq!(game.tick(), 3);
}

#[tokio::test(start_paused = true)]
async fn no_tick_fires_before_the_first_period() {
    let (handle, _worker) = SessionWorker::spawn(arena_game(), TICK);
    tokio::time::sleep(TICK - Duration::from_millis(1)).await;
    assert_eq!(handle.snapshot().await.expect("worker alive").tick, 0);
}

#[tokio::test(start_paused = true)]
async fn commands_apply_and_publish_views() {
    let (handle, _worker) = SessionWorker::spawn(arena_game(), TICK);
    let mut views = handle.subscribe();

    let report = handle.send(Command::MOVE_RIGHT).await.expect("worker alive");
    assert_eq!(report, TurnReport::Move(MoveOutcome::Moved { to: at(4, 4), pickup: None }));

    views.changed().await.expect("view published");
    assert_eq!(views.borrow_and_update().player.pos, at(4, 4));
}

#[tokio::test(start_paused = true)]
async fn rejected_commands_publish_nothing() {
    let mut grid = Grid::new(3, 1);
    grid.fill_row(0, Terrain::Floor);
    let game = Game::with_layout(5, grid, at(0, 0)).expect("free floor");
    let (handle, _worker) = SessionWorker::spawn(game, Duration::from_secs(3_600));
    let mut views = handle.subscribe();
    views.borrow_and_update();

    let report = handle.send(Command::MOVE_UP).await.expect("worker alive");
    assert_eq!(report, TurnReport::Move(MoveOutcome::Blocked(BlockReason::OutOfBounds)));
    let attack = handle.send(Command::Attack).await.expect("worker alive");
    assert_eq!(attack, TurnReport::Attack(AttackReport::default()));
    assert!(!views.has_changed().expect("worker alive"));
}

#[tokio::test(start_paused = true)]
async fn manual_ticks_report_enemy_actions() {
    let mut game = arena_game();
    let enemy = game.spawn_enemy(at(3, 3), 100, 10).expect("free floor");
    let (handle, _worker) = SessionWorker::spawn(game, Duration::from_secs(3_600));

    let report = handle.advance_enemies().await.expect("worker alive");
    assert_eq!(report.tick, 1);
    assert_eq!(report.actions, vec![(enemy, EnemyAction::Attacked { damage: 10 })]);
}

#[tokio::test(start_paused = true)]
async fn interleaved_commands_and_ticks_keep_state_consistent() {
    let game = Game::new(2_024).expect("default grid always generates");
    let (handle, worker) = SessionWorker::spawn(game, Duration::from_millis(5));

    let commands = [Command::MOVE_UP, Command::MOVE_LEFT, Command::Attack, Command::MOVE_DOWN];
    let mut tasks = Vec::new();
    for lane in 0..4 {
        let handle = handle.clone();
        tasks.push(tokio::spawn(async move {
            for step in 0..50 {
                let command = commands[(lane + step) % commands.len()];
                handle.send(command).await.expect("worker alive");
                tokio::time::sleep(Duration::from_millis(3)).await;
            }
        }));
    }
    for task in tasks {
        task.await.expect("lane finished");
    }

    handle.shutdown().await.expect("worker alive");
    let game = worker.await.expect("worker joined");
    assert!(game.tick() > 0);
    game.check_invariants().expect("single writer keeps occupancy consistent");
}

#[tokio::test(start_paused = true)]
async fn closed_session_reports_closed() {
    let (handle, worker) = SessionWorker::spawn(arena_game(), TICK);
    handle.shutdown().await.expect("worker alive");
    worker.await.expect("worker joined");

    let err = handle.send(Command::Attack).await.expect_err("worker gone");
    assert!(matches!(err, SessionError::Closed));
}

#[tokio::test(start_paused = true)]
async fn dispatch_maps_key_actions() {
    let (handle, _worker) = SessionWorker::spawn(arena_game(), TICK);

    assert_eq!(dispatch(&handle, KeyAction::None).await.expect("ok"), LoopControl::Continue);
    assert_eq!(
        dispatch(&handle, KeyAction::Submit(Command::MOVE_DOWN)).await.expect("ok"),
        LoopControl::Continue
    );
    assert_eq!(handle.snapshot().await.expect("worker alive").player.pos, at(3, 5));
    assert_eq!(dispatch(&handle, KeyAction::Quit).await.expect("ok"), LoopControl::Quit);
}
