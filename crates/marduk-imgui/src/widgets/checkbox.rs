use marduk_engine::coords::{Axis, Rect};

use crate::context::{Frame, Place};
use crate::id::WidgetId;
use crate::interaction::Sense;

use super::{palette, surface_color};

const BOX_SIZE: f32 = 16.0;
const GAP: f32 = 8.0;

impl Frame<'_> {
    /// Checkbox with a label to its right. The whole rect is clickable.
    ///
    /// Toggles `checked` once per completed click and returns `true` on that frame.
    pub fn checkbox(
        &mut self,
        id: WidgetId,
        place: impl Into<Place>,
        label: &str,
        checked: &mut bool,
    ) -> bool {
        let Some(rect) = self.place(place.into()) else { return false; };
        let response = self.interact(id, rect, Sense::Click);
        if response.clicked {
            *checked = !*checked;
        }

        let side = BOX_SIZE.min(rect.size.y);
        let check = Rect::new(
            rect.origin.x,
            rect.origin.y + (rect.size.y - side) * 0.5,
            side,
            side,
        );

        let mut painter = self.painter();
        painter.fill_rect(check, surface_color(&response));
        painter.stroke_rect(check, 1.0, palette::BORDER);
        if *checked {
            painter.fill_rect(check.inset(4.0), palette::ACCENT);
        }
        painter.text_left(rect, check.end(Axis::X) + GAP, label.as_bytes(), palette::TEXT);

        response.clicked
    }
}
