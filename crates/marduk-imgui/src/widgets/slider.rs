use std::ops::RangeInclusive;

use marduk_engine::coords::Rect;

use crate::context::{Frame, Place};
use crate::id::WidgetId;
use crate::interaction::Sense;

use super::{palette, surface_color};

const TRACK_HEIGHT: f32 = 4.0;
const THUMB_WIDTH: f32 = 10.0;

impl Frame<'_> {
    /// Horizontal slider over `range`.
    ///
    /// While dragged the value tracks the pointer's x position, clamped to the
    /// rect, so dragging past either end pins it to that end. Returns `true`
    /// when the value changed this frame.
    pub fn slider(
        &mut self,
        id: WidgetId,
        place: impl Into<Place>,
        range: RangeInclusive<f32>,
        value: &mut f32,
    ) -> bool {
        let Some(rect) = self.place(place.into()) else { return false; };
        let response = self.interact(id, rect, Sense::Click);
        let (lo, hi) = (*range.start(), *range.end());

        let mut changed = false;
        if response.dragging && rect.size.x > 0.0 {
            let t = ((self.pointer().x - rect.origin.x) / rect.size.x).clamp(0.0, 1.0);
            if t.is_finite() {
                let next = lo + t * (hi - lo);
                if next != *value {
                    *value = next;
                    changed = true;
                }
            }
        }

        let t = if hi != lo { ((*value - lo) / (hi - lo)).clamp(0.0, 1.0) } else { 0.0 };
        let t = if t.is_finite() { t } else { 0.0 };

        let track = Rect::new(
            rect.origin.x,
            rect.origin.y + (rect.size.y - TRACK_HEIGHT) * 0.5,
            rect.size.x,
            TRACK_HEIGHT,
        );
        let fill = Rect::new(track.origin.x, track.origin.y, track.size.x * t, track.size.y);
        let thumb_w = THUMB_WIDTH.min(rect.size.x);
        let thumb = Rect::new(
            rect.origin.x + (rect.size.x - thumb_w) * t,
            rect.origin.y,
            thumb_w,
            rect.size.y,
        );

        let mut painter = self.painter();
        painter.fill_rect(track, palette::FIELD);
        painter.fill_rect(fill, palette::ACCENT);
        painter.fill_rect(thumb, surface_color(&response));
        painter.stroke_rect(thumb, 1.0, palette::BORDER);

        changed
    }
}

#[cfg(test)]
mod tests {
    use std::ops::RangeInclusive;

    use marduk_engine::coords::{Rect, Vec2};
    use marduk_engine::text::MonoAtlas;

    use crate::{Context, FrameInput, KeyboardSample, WidgetId};

    const RECT: Rect = Rect::new(20.0, 0.0, 200.0, 20.0);

    fn run_range(
        ctx: &mut Context,
        x: f32,
        down: bool,
        range: RangeInclusive<f32>,
        value: &mut f32,
    ) -> bool {
        let atlas = MonoAtlas::new(8.0, 16.0);
        let input = FrameInput::new(Vec2::new(x, 10.0), down, KeyboardSample::default());
        let mut frame = ctx.begin(&atlas, input);
        let changed = frame.slider(WidgetId::from_const(3), RECT, range, value);
        frame.end();
        changed
    }

    fn run(ctx: &mut Context, x: f32, down: bool, value: &mut f32) -> bool {
        run_range(ctx, x, down, 0.0..=100.0, value)
    }

    #[test]
    fn press_sets_value_from_pointer() {
        let mut ctx = Context::new();
        let mut value = 0.0;
        assert!(!run(&mut ctx, 70.0, false, &mut value));
        assert!(run(&mut ctx, 70.0, true, &mut value));
        assert_eq!(value, 25.0);
    }

    #[test]
    fn drag_past_end_clamps_to_max() {
        let mut ctx = Context::new();
        let mut value = 0.0;
        run(&mut ctx, 120.0, false, &mut value);
        run(&mut ctx, 120.0, true, &mut value);
        assert_eq!(value, 50.0);
        run(&mut ctx, 280.0, true, &mut value);
        assert_eq!(value, 100.0);

        run(&mut ctx, -50.0, true, &mut value);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn hover_without_press_leaves_value() {
        let mut ctx = Context::new();
        let mut value = 42.0;
        assert!(!run(&mut ctx, 120.0, false, &mut value));
        assert_eq!(value, 42.0);
    }

    #[test]
    fn inverted_range_maps_left_edge_to_start() {
        let mut ctx = Context::new();
        let mut value = 0.0;
        run_range(&mut ctx, 20.0, false, 10.0..=-10.0, &mut value);
        run_range(&mut ctx, 20.0, true, 10.0..=-10.0, &mut value);
        assert_eq!(value, 10.0);
    }

    #[test]
    fn overlapping_sliders_only_move_the_top_one() {
        let atlas = MonoAtlas::new(8.0, 16.0);
        let track = Rect::new(0.0, 0.0, 200.0, 20.0);
        let (under_id, over_id) = (WidgetId::from_const(1), WidgetId::from_const(2));
        let (mut under, mut over) = (0.0, 0.0);
        let mut ctx = Context::new();

        for down in [false, true, true] {
            let input = FrameInput::new(Vec2::new(100.0, 10.0), down, KeyboardSample::default());
            let mut frame = ctx.begin(&atlas, input);
            assert!(!frame.slider(under_id, track, 0.0..=100.0, &mut under));
            frame.slider(over_id, track, 0.0..=100.0, &mut over);
            frame.end();
        }

        assert_eq!(under, 0.0);
        assert_eq!(over, 50.0);
        assert_eq!(ctx.active(), Some(over_id));
    }
}
