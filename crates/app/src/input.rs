//! Keyboard-to-command mapping.
//!
//! Only this module knows about concrete key bindings; the rest of the app sees
//! [`KeyAction`] values.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use delve_core::Command;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit(Command),
    None,
}

pub fn handle_key(key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => KeyAction::Quit,
            _ => KeyAction::None,
        };
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => {
            KeyAction::Submit(Command::MOVE_UP)
        }
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
            KeyAction::Submit(Command::MOVE_DOWN)
        }
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => {
            KeyAction::Submit(Command::MOVE_LEFT)
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => {
            KeyAction::Submit(Command::MOVE_RIGHT)
        }
        KeyCode::Char(' ') => KeyAction::Submit(Command::Attack),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,
        _ => KeyAction::None,
    }
}
