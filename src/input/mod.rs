//! Provides access to the keyboard state of the current frame.
//!
//! ```rust,ignore
//! // Checks if a key is currently held down.
//! ctx.input().is_key_down(Key::A);
//!
//! // Checks if a key has been pressed down during the last frame.
//! ctx.input().is_key_press(Key::Space);
//!
//! // Checks if a key has been released during the last frame.
//! ctx.input().is_key_release(Key::Space);
//! ```
//!
//! The key codes are virtual keycodes of physical keys, they don't necessarily
//! represent what's actually printed on the key cap.

pub mod events;
pub mod keyboard;

pub mod prelude {
    pub use super::events::InputEvent;
    pub use super::keyboard::Key;
    pub use super::Input;
}

use self::events::InputEvent;
use self::keyboard::{Key, Keyboard};

/// The input state that is handed to applications every frame.
#[derive(Debug, Default)]
pub struct Input {
    keyboard: Keyboard,
}

impl Input {
    pub fn new() -> Self {
        Default::default()
    }

    /// Clears the per-frame transitions. Called once before the events of a
    /// new frame are dispatched.
    #[inline]
    pub fn advance(&mut self) {
        self.keyboard.advance();
    }

    /// Forgets every key state, e.g. after the window lost focus.
    #[inline]
    pub fn reset(&mut self) {
        self.keyboard.reset();
    }

    pub fn update(&mut self, v: InputEvent) {
        match v {
            InputEvent::KeyboardPressed { key } => self.keyboard.on_key_pressed(key),
            InputEvent::KeyboardReleased { key } => self.keyboard.on_key_released(key),
        }
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keyboard.is_key_down(key)
    }

    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.keyboard.is_key_press(key)
    }

    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.keyboard.is_key_release(key)
    }
}
