//! Key mapping from terminal events to input events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::{Direction, InputEvent};

/// Map a key press to an input event.
///
/// WASD and Y/Q match the original bindings; arrow keys and Ctrl+C follow
/// terminal convention. The session decides what an event means in its
/// current state (Q ends the run while playing and exits while game over).
pub fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::CloseRequested);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputEvent::Turn(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputEvent::Turn(Direction::Down))
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputEvent::Turn(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputEvent::Turn(Direction::Right))
        }
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Some(InputEvent::Restart)
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
        _ => None,
    }
}
