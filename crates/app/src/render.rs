//! Terminal rendering of [`GameView`] snapshots.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use delve_core::{CellTag, GameView};

const HP_BAR_WIDTH: usize = 20;
const MESSAGE_LINES: usize = 4;

fn tag_color(tag: CellTag) -> Color {
    match tag {
        CellTag::Wall => Color::DarkGrey,
        CellTag::Floor => Color::Grey,
        CellTag::HealthPotion => Color::Red,
        CellTag::Sword => Color::Cyan,
        CellTag::PlayerOccupied => Color::Green,
        CellTag::EnemyOccupied => Color::Magenta,
    }
}

/// Fixed-width bar such as `[#####-----]`.
pub fn hp_bar(ratio: f32, width: usize) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * width as f32).round() as usize).min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

pub fn status_line(view: &GameView) -> String {
    let player = &view.player;
    let mut line = format!(
        "HP {} {}/{}  ATK {}  Enemies {}  Tick {}",
        hp_bar(player.hp_ratio(), HP_BAR_WIDTH),
        player.hp,
        player.max_hp,
        player.attack,
        view.enemies.len(),
        view.tick
    );
    if player.hp <= 0 {
        line.push_str("  (defeated)");
    }
    line
}

/// Draws the whole frame: grid, status line, then the most recent messages.
pub fn draw<W: Write>(out: &mut W, view: &GameView) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for (y, row) in view.rows().enumerate() {
        queue!(out, MoveTo(0, y as u16))?;
        let mut current = None;
        for &tag in row {
            let color = tag_color(tag);
            if current != Some(color) {
                queue!(out, SetForegroundColor(color))?;
                current = Some(color);
            }
            queue!(out, Print(tag.glyph()))?;
        }
    }
    queue!(out, ResetColor)?;

    let mut line = view.height as u16 + 1;
    queue!(out, MoveTo(0, line), Print(status_line(view)))?;
    line += 1;

    let skip = view.messages.len().saturating_sub(MESSAGE_LINES);
    for message in &view.messages[skip..] {
        line += 1;
        queue!(out, MoveTo(0, line), Print(message))?;
    }
    queue!(out, MoveTo(0, line + 2), Print("WASD/arrows move, Space attacks, q quits"))?;

    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{Game, Grid, Pos, Terrain};

    fn view() -> GameView {
        let mut grid = Grid::new(6, 3);
        grid.fill_row(1, Terrain::Floor);
        let mut game = Game::with_layout(1, grid, Pos { y: 1, x: 1 }).expect("free floor");
        game.spawn_enemy(Pos { y: 1, x: 4 }, 50, 10);
        game.set_player_hp(40);
        game.view()
    }

    #[test]
    fn hp_bar_scales_with_ratio() {
        assert_eq!(hp_bar(1.0, 4), "[####]");
        assert_eq!(hp_bar(0.5, 4), "[##--]");
        assert_eq!(hp_bar(0.0, 4), "[----]");
        assert_eq!(hp_bar(-3.0, 4), "[----]");
    }

    #[test]
    fn status_line_reports_player_and_enemies() {
        let line = status_line(&view());
        assert!(line.contains("40/100"), "{line}");
        assert!(line.contains("ATK 10"), "{line}");
        assert!(line.contains("Enemies 1"), "{line}");
        assert!(!line.contains("defeated"));
    }

    #[test]
    fn frame_contains_every_glyph_row() {
        let mut out = Vec::new();
        draw(&mut out, &view()).expect("writing to a buffer cannot fail");
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('@'));
        assert!(text.contains('E'));
        assert!(text.contains("ATK 10"));
    }
}
