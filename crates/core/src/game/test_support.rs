//! Shared fixtures for the `game` test suites.

use super::*;

/// A `width` x `height` grid that is floor everywhere.
pub(super) fn open_arena(width: usize, height: usize) -> Grid {
    let mut grid = Grid::new(width, height);
    for y in 0..height {
        grid.fill_row(y, Terrain::Floor);
    }
    grid
}

/// Open 10x10 arena with the player at `player` and no enemies.
pub(super) fn arena_game(player: Pos) -> Game {
    Game::with_layout(7, open_arena(10, 10), player).expect("player cell is free floor")
}

/// Single-row corridor `length` cells long with the player at its west end.
pub(super) fn corridor_game(length: usize) -> Game {
    let mut grid = Grid::new(length, 3);
    grid.fill_row(1, Terrain::Floor);
    Game::with_layout(7, grid, Pos { y: 1, x: 0 }).expect("corridor start is free floor")
}

pub(super) fn pos(x: i32, y: i32) -> Pos {
    Pos { y, x }
}
