use std::collections::HashSet;

use super::types::{Key, MouseButton};

/// Per-frame input deltas.
///
/// `InputState` holds levels (what is down now); `InputFrame` holds the edges
/// and text recorded since the last frame. The runtime clears it after every
/// frame callback.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Keys pressed this frame, auto-repeats included.
    pub keys_pressed: HashSet<Key>,

    /// Mouse buttons that went down this frame.
    pub buttons_pressed: HashSet<MouseButton>,

    /// Text committed this frame, control characters removed.
    pub text: String,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.keys_pressed.clear();
        self.buttons_pressed.clear();
        self.text.clear();
    }

    #[inline]
    pub fn key_pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    #[inline]
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }
}
