//! Game action definitions
//!
//! Keyboard layout: WASD to move, Escape to quit.

use macroquad::input::KeyCode;

/// All actions the input snapshot tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    Quit,
}

impl Action {
    /// The four movement actions, in axis order (x-, x+, y-, y+)
    pub const MOVEMENT: [Action; 4] = [
        Action::MoveLeft,
        Action::MoveRight,
        Action::MoveUp,
        Action::MoveDown,
    ];

    /// Default key binding
    pub fn key(&self) -> KeyCode {
        match self {
            Action::MoveLeft => KeyCode::A,
            Action::MoveRight => KeyCode::D,
            Action::MoveUp => KeyCode::W,
            Action::MoveDown => KeyCode::S,
            Action::Quit => KeyCode::Escape,
        }
    }
}
