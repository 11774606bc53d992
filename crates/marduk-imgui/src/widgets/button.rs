use crate::context::{Frame, Place};
use crate::id::WidgetId;
use crate::interaction::Sense;

use super::{palette, surface_color};

impl Frame<'_> {
    /// Push button. Returns `true` on the frame the press is released over it.
    pub fn button(&mut self, id: WidgetId, place: impl Into<Place>, label: &str) -> bool {
        let Some(rect) = self.place(place.into()) else { return false; };
        let response = self.interact(id, rect, Sense::Click);

        let mut painter = self.painter();
        painter.fill_rect(rect, surface_color(&response));
        painter.text_centered(rect, label.as_bytes(), palette::TEXT);

        response.clicked
    }
}
