//! Input snapshot
//!
//! Polled once per outer loop iteration. Directional flags mirror the
//! physical key state at poll time and are recomputed from scratch on
//! every poll. The quit flag is the only state that survives across polls:
//! once latched it stays set.

use macroquad::math::Vec2;

use super::Action;

/// Where the snapshot reads keys from.
///
/// Implemented for the real window in `platform`; tests script it.
pub trait KeyboardSource {
    /// Window close button (or OS equivalent) was used since the last poll
    fn close_requested(&mut self) -> bool;
    /// Action went down since the last poll (edge, not level)
    fn action_pressed(&self, action: Action) -> bool;
    /// Action is currently held
    fn action_down(&self, action: Action) -> bool;
}

/// Quit flag and movement state for one outer iteration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputSnapshot {
    pub quit: bool,
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refresh from the keyboard. Call once per outer iteration.
    pub fn poll(&mut self, keyboard: &mut impl KeyboardSource) {
        if keyboard.close_requested() || keyboard.action_pressed(Action::Quit) {
            if !self.quit {
                log::debug!("quit requested");
            }
            self.quit = true;
        }

        let [left, right, up, down] = Action::MOVEMENT.map(|action| keyboard.action_down(action));
        self.left = left;
        self.right = right;
        self.up = up;
        self.down = down;
    }

    /// Horizontal axis in {-1, 0, 1}; opposing keys cancel
    pub fn axis_x(&self) -> f32 {
        axis(self.left, self.right)
    }

    /// Vertical axis in {-1, 0, 1}, positive towards the bottom of the screen
    pub fn axis_y(&self) -> f32 {
        axis(self.up, self.down)
    }

    pub fn axis(&self) -> Vec2 {
        Vec2::new(self.axis_x(), self.axis_y())
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    let mut value = 0.0;
    if negative { value -= 1.0; }
    if positive { value += 1.0; }
    value
}
