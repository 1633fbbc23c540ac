//! Input handling
//!
//! Produces one `InputSnapshot` per outer loop iteration from whatever
//! implements `KeyboardSource` (the macroquad window in production).

mod actions;
mod state;

pub use actions::*;
pub use state::*;

#[cfg(test)]
pub(crate) use state::tests::FakeKeyboard;
