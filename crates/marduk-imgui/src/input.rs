//! Per-frame input snapshot consumed by [`Context::begin`](crate::Context::begin).

use marduk_engine::coords::Vec2;
use marduk_engine::input::{InputFrame, InputState, Key, MouseButton};

/// Keyboard edges and committed text for one frame.
///
/// Borrowed, never stored: the context drops it when the frame ends. Each
/// flag is a press edge (auto-repeat included), not a level.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct KeyboardSample<'a> {
    /// Bytes to insert at the cursor.
    pub text: &'a [u8],
    pub backspace: bool,
    pub delete: bool,
    pub left: bool,
    pub right: bool,
    pub home: bool,
    pub end: bool,
    pub escape: bool,
    pub enter: bool,
}

impl<'a> KeyboardSample<'a> {
    /// Sample carrying only inserted text.
    pub fn text(text: &'a [u8]) -> Self {
        Self { text, ..Self::default() }
    }

    /// Edges from an engine input frame.
    pub fn from_engine(frame: &'a InputFrame) -> Self {
        Self {
            text: frame.text.as_bytes(),
            backspace: frame.key_pressed(Key::Backspace),
            delete: frame.key_pressed(Key::Delete),
            left: frame.key_pressed(Key::ArrowLeft),
            right: frame.key_pressed(Key::ArrowRight),
            home: frame.key_pressed(Key::Home),
            end: frame.key_pressed(Key::End),
            escape: frame.key_pressed(Key::Escape),
            enter: frame.key_pressed(Key::Enter),
        }
    }
}

/// Pointer + keyboard snapshot for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameInput<'a> {
    /// Pointer position in logical pixels.
    pub pointer: Vec2,
    /// Primary button level.
    pub pointer_down: bool,
    pub keys: KeyboardSample<'a>,
}

impl<'a> FrameInput<'a> {
    pub fn new(pointer: Vec2, pointer_down: bool, keys: KeyboardSample<'a>) -> Self {
        Self { pointer, pointer_down, keys }
    }

    /// Pulls the snapshot from the engine's window input.
    ///
    /// A press that was already released again before the frame ran still
    /// reads as down for this frame, so a fast click yields a press edge now
    /// and a release edge next frame.
    pub fn from_engine(state: &InputState, frame: &'a InputFrame) -> Self {
        let pointer_down =
            state.button_down(MouseButton::Left) || frame.button_pressed(MouseButton::Left);
        Self {
            pointer: state.pointer_pos,
            pointer_down,
            keys: KeyboardSample::from_engine(frame),
        }
    }
}
