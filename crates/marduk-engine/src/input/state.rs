use std::collections::HashSet;

use crate::coords::Vec2;

use super::frame::InputFrame;
use super::types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};

/// Current input state for a single window.
///
/// Holds "is down" information and the pointer position. Per-frame
/// transitions are recorded into an `InputFrame`.
#[derive(Debug, Default)]
pub struct InputState {
    pub modifiers: Modifiers,

    /// Whether the window has keyboard focus.
    pub focused: bool,

    /// Last known pointer position in logical pixels. Not reset when the
    /// pointer leaves the window, so a drag in progress keeps its anchor.
    pub pointer_pos: Vec2,

    /// Whether the pointer is currently over the window.
    pub pointer_inside: bool,

    pub keys_down: HashSet<Key>,
    pub buttons_down: HashSet<MouseButton>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state and writes deltas to `frame`.
    pub fn apply_event(&mut self, frame: &mut InputFrame, ev: InputEvent) {
        match ev {
            InputEvent::ModifiersChanged(m) => {
                self.modifiers = m;
            }

            InputEvent::Focused(f) => {
                self.focused = f;
                if !f {
                    // Avoids stuck keys/buttons when focus changes mid-press.
                    self.keys_down.clear();
                    self.buttons_down.clear();
                }
            }

            InputEvent::PointerMoved(pos) => {
                self.pointer_pos = pos;
                self.pointer_inside = true;
            }

            InputEvent::PointerLeft => {
                self.pointer_inside = false;
            }

            InputEvent::Key { key, state, repeat, text } => match state {
                KeyState::Pressed => {
                    if self.keys_down.insert(key) || repeat {
                        frame.keys_pressed.insert(key);
                    }
                    if let Some(text) = text {
                        push_printable(&mut frame.text, &text);
                    }
                }
                KeyState::Released => {
                    self.keys_down.remove(&key);
                }
            },

            InputEvent::PointerButton { button, state } => match state {
                MouseButtonState::Pressed => {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                }
                MouseButtonState::Released => {
                    self.buttons_down.remove(&button);
                }
            },

            InputEvent::Text(text) => push_printable(&mut frame.text, &text),
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn button_down(&self, btn: MouseButton) -> bool {
        self.buttons_down.contains(&btn)
    }
}

/// Keys like Backspace and Enter report control characters as their text;
/// those are handled as key edges, never as inserted text.
fn push_printable(out: &mut String, text: &str) {
    out.extend(text.chars().filter(|c| !c.is_control()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool, text: Option<&str>) -> InputEvent {
        InputEvent::Key { key, state, repeat, text: text.map(str::to_owned) }
    }

    // ── keys ──────────────────────────────────────────────────────────────

    #[test]
    fn press_records_edge_once() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::Backspace, KeyState::Pressed, false, None));
        assert!(frame.key_pressed(Key::Backspace));
        frame.clear();
        // held without repeat flag: no new edge
        state.apply_event(&mut frame, key(Key::Backspace, KeyState::Pressed, false, None));
        assert!(!frame.key_pressed(Key::Backspace));
        assert!(state.key_down(Key::Backspace));
    }

    #[test]
    fn auto_repeat_counts_as_press() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, false, None));
        frame.clear();
        state.apply_event(&mut frame, key(Key::ArrowLeft, KeyState::Pressed, true, None));
        assert!(frame.key_pressed(Key::ArrowLeft));
    }

    #[test]
    fn control_text_is_filtered() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, key(Key::Unknown(1), KeyState::Pressed, false, Some("a")));
        state.apply_event(&mut frame, key(Key::Backspace, KeyState::Pressed, false, Some("\u{8}")));
        state.apply_event(&mut frame, key(Key::Enter, KeyState::Pressed, false, Some("\r")));
        assert_eq!(frame.text, "a");
    }

    // ── pointer ───────────────────────────────────────────────────────────

    #[test]
    fn pointer_position_survives_leave() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(&mut frame, InputEvent::PointerMoved(Vec2::new(4.0, 5.0)));
        state.apply_event(&mut frame, InputEvent::PointerLeft);
        assert_eq!(state.pointer_pos, Vec2::new(4.0, 5.0));
        assert!(!state.pointer_inside);
    }

    #[test]
    fn focus_loss_releases_everything() {
        let (mut state, mut frame) = (InputState::default(), InputFrame::default());
        state.apply_event(
            &mut frame,
            InputEvent::PointerButton { button: MouseButton::Left, state: MouseButtonState::Pressed },
        );
        assert!(frame.button_pressed(MouseButton::Left));
        state.apply_event(&mut frame, InputEvent::Focused(false));
        assert!(!state.button_down(MouseButton::Left));
    }
}
