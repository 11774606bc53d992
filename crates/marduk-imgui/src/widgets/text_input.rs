use marduk_engine::coords::Rect;

use crate::context::{Frame, Place};
use crate::id::WidgetId;
use crate::interaction::Sense;
use crate::text_edit::TextInputState;

use super::palette;

const TEXT_INSET: f32 = 6.0;
const CURSOR_WIDTH: f32 = 2.0;

/// Outcome of [`Frame::text_input`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TextInputResponse {
    /// Has keyboard focus after this frame's declaration.
    pub focused: bool,
    /// Buffer content changed this frame.
    pub changed: bool,
    /// Enter was pressed while focused.
    pub submitted: bool,
}

impl Frame<'_> {
    /// Single-line text field over a caller-owned byte buffer.
    ///
    /// Takes focus when clicked. While focused, this frame's keyboard sample
    /// is applied to `state`.
    pub fn text_input<B>(
        &mut self,
        id: WidgetId,
        place: impl Into<Place>,
        state: &mut TextInputState<B>,
    ) -> TextInputResponse
    where
        B: AsRef<[u8]> + AsMut<[u8]>,
    {
        let Some(rect) = self.place(place.into()) else {
            return TextInputResponse::default();
        };
        let response = self.interact(id, rect, Sense::Focus);

        let mut out = TextInputResponse { focused: response.focused, ..Default::default() };
        if response.focused {
            let keys = self.keys();
            match state.apply_keyboard(&keys) {
                Ok(outcome) => {
                    if outcome.dropped {
                        log::trace!("{id}: insert of {} byte(s) dropped", keys.text.len());
                    }
                    out.changed = outcome.edit.is_some();
                }
                Err(e) => log::debug!("{id}: keyboard input ignored: {e}"),
            }
            out.submitted = keys.enter;
        }

        let text = state.text();
        let caret = state.cursor.min(text.len());
        let focused = out.focused;

        let mut painter = self.painter();
        painter.fill_rect(rect, palette::FIELD);
        let border = if focused {
            palette::ACCENT
        } else if response.hovered {
            palette::HOVER
        } else {
            palette::BORDER
        };
        painter.stroke_rect(rect, 1.0, border);

        let x = rect.origin.x + TEXT_INSET;
        painter.text_left(rect, x, text, palette::TEXT);

        if focused {
            let line = painter.line_height().min(rect.size.y);
            let cx = x + painter.measure_text(&text[..caret]);
            let cy = rect.origin.y + (rect.size.y - line) * 0.5;
            painter.fill_rect(Rect::new(cx, cy, CURSOR_WIDTH, line), palette::TEXT);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use marduk_engine::coords::{Rect, Vec2};
    use marduk_engine::text::MonoAtlas;

    use crate::{Context, FrameInput, KeyboardSample, TextInputResponse, TextInputState, WidgetId};

    const FIELD: Rect = Rect::new(0.0, 0.0, 200.0, 28.0);
    const INSIDE: Vec2 = Vec2::new(40.0, 14.0);

    fn run(
        ctx: &mut Context,
        pointer: Vec2,
        down: bool,
        keys: KeyboardSample<'_>,
        state: &mut TextInputState<[u8; 16]>,
    ) -> TextInputResponse {
        let atlas = MonoAtlas::new(8.0, 16.0);
        let mut frame = ctx.begin(&atlas, FrameInput::new(pointer, down, keys));
        let r = frame.text_input(WidgetId::from_const(5), FIELD, state);
        frame.end();
        r
    }

    fn focus(ctx: &mut Context, state: &mut TextInputState<[u8; 16]>) {
        run(ctx, INSIDE, false, KeyboardSample::default(), state);
        run(ctx, INSIDE, true, KeyboardSample::default(), state);
        let r = run(ctx, INSIDE, false, KeyboardSample::default(), state);
        assert!(r.focused);
    }

    #[test]
    fn unfocused_field_ignores_typing() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        let r = run(&mut ctx, INSIDE, false, KeyboardSample::text(b"abc"), &mut state);
        assert!(!r.focused && !r.changed);
        assert_eq!(state.text(), b"");
    }

    #[test]
    fn click_focuses_then_typing_edits() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        focus(&mut ctx, &mut state);

        let r = run(&mut ctx, INSIDE, false, KeyboardSample::text(b"hi"), &mut state);
        assert!(r.changed);
        assert_eq!(state.text(), b"hi");

        let keys = KeyboardSample { backspace: true, ..KeyboardSample::default() };
        let r = run(&mut ctx, INSIDE, false, keys, &mut state);
        assert!(r.changed);
        assert_eq!(state.text(), b"h");
    }

    #[test]
    fn enter_submits_while_focused() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        focus(&mut ctx, &mut state);

        let keys = KeyboardSample { enter: true, ..KeyboardSample::default() };
        let r = run(&mut ctx, INSIDE, false, keys, &mut state);
        assert!(r.submitted && !r.changed);
    }

    #[test]
    fn escape_unfocuses() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        focus(&mut ctx, &mut state);

        let keys = KeyboardSample { escape: true, text: b"x", ..KeyboardSample::default() };
        let r = run(&mut ctx, INSIDE, false, keys, &mut state);
        assert!(!r.focused);
        assert_eq!(state.text(), b"");
        assert_eq!(ctx.focused(), None);
    }

    #[test]
    fn press_elsewhere_unfocuses() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        focus(&mut ctx, &mut state);

        run(&mut ctx, Vec2::new(500.0, 500.0), true, KeyboardSample::default(), &mut state);
        assert_eq!(ctx.focused(), None);
    }

    #[test]
    fn corrupt_state_is_left_alone() {
        let mut ctx = Context::new();
        let mut state = TextInputState::from_buffer([0u8; 16]);
        focus(&mut ctx, &mut state);
        state.len = 99;

        let r = run(&mut ctx, INSIDE, false, KeyboardSample::text(b"a"), &mut state);
        assert!(r.focused && !r.changed);
    }
}
