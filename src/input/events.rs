use super::keyboard::Key;

/// Input device event, keyboard only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pressed event on keyboard has been received.
    KeyboardPressed { key: Key },
    /// Released event from keyboard has been received.
    KeyboardReleased { key: Key },
}
