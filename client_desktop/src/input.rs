//! Keyboard input handling

use game_core::{Command, PaddleDirection};
use ggez::event::KeyCode;

/// Handle key down event
pub fn command_for_key(keycode: KeyCode) -> Option<Command> {
    match keycode {
        KeyCode::Left | KeyCode::A => Some(Command::Move(PaddleDirection::Left)),
        KeyCode::Right | KeyCode::D => Some(Command::Move(PaddleDirection::Right)),
        KeyCode::Escape | KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}
