use std::collections::HashSet;

/// Symbolic name for a keyboard key.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Key {
    /// The '1' key over the letters.
    Key1,
    /// The '2' key over the letters.
    Key2,
    /// The '3' key over the letters.
    Key3,
    /// The '4' key over the letters.
    Key4,
    /// The '5' key over the letters.
    Key5,
    /// The '6' key over the letters.
    Key6,
    /// The '7' key over the letters.
    Key7,
    /// The '8' key over the letters.
    Key8,
    /// The '9' key over the letters.
    Key9,
    /// The '0' key over the 'O' and 'P' keys.
    Key0,

    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    /// The Escape key, next to F1.
    Escape,

    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    Left,
    Up,
    Right,
    Down,

    /// The Backspace key, right over Enter.
    Back,
    /// The Enter key.
    Return,
    /// The space bar.
    Space,
    Tab,

    LAlt,
    LControl,
    LShift,
    RAlt,
    RControl,
    RShift,
}

/// Keyboard state of the current frame.
///
/// A key that goes down stays in `downs` until it is released. `presses` and
/// `releases` only hold the transitions observed since the last `advance`.
#[derive(Debug, Default)]
pub struct Keyboard {
    downs: HashSet<Key>,
    presses: HashSet<Key>,
    releases: HashSet<Key>,
}

impl Keyboard {
    pub fn new() -> Self {
        Default::default()
    }

    #[inline]
    pub fn reset(&mut self) {
        self.downs.clear();
        self.presses.clear();
        self.releases.clear();
    }

    /// Forgets the transitions of last frame, keys held down stay down.
    #[inline]
    pub fn advance(&mut self) {
        self.presses.clear();
        self.releases.clear();
    }

    #[inline]
    pub fn on_key_pressed(&mut self, key: Key) {
        // Auto-repeated pressed events must not count as new presses.
        if self.downs.insert(key) {
            self.presses.insert(key);
        }
    }

    #[inline]
    pub fn on_key_released(&mut self, key: Key) {
        self.downs.remove(&key);
        self.releases.insert(key);
    }

    /// Checks if a key is currently held down.
    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.downs.contains(&key)
    }

    /// Checks if a key has been pressed down during the last frame.
    #[inline]
    pub fn is_key_press(&self, key: Key) -> bool {
        self.presses.contains(&key)
    }

    /// Checks if a key has been released during the last frame.
    #[inline]
    pub fn is_key_release(&self, key: Key) -> bool {
        self.releases.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_is_edge_triggered() {
        let mut kb = Keyboard::new();
        kb.on_key_pressed(Key::Space);
        assert!(kb.is_key_press(Key::Space));
        assert!(kb.is_key_down(Key::Space));

        kb.advance();
        kb.on_key_pressed(Key::Space);
        assert!(!kb.is_key_press(Key::Space));
        assert!(kb.is_key_down(Key::Space));

        kb.advance();
        kb.on_key_released(Key::Space);
        assert!(kb.is_key_release(Key::Space));
        assert!(!kb.is_key_down(Key::Space));

        kb.advance();
        assert!(!kb.is_key_release(Key::Space));
    }

    #[test]
    fn press_and_release_in_one_frame() {
        let mut kb = Keyboard::new();
        kb.on_key_pressed(Key::E);
        kb.on_key_released(Key::E);
        assert!(kb.is_key_press(Key::E));
        assert!(kb.is_key_release(Key::E));
        assert!(!kb.is_key_down(Key::E));
    }
}
