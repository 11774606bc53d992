use crate::context::{Frame, Place};

use super::palette;

impl Frame<'_> {
    /// Static text, left-aligned and vertically centered. Not interactive.
    pub fn label(&mut self, place: impl Into<Place>, text: &str) {
        let Some(rect) = self.place(place.into()) else { return; };
        self.painter()
            .text_left(rect, rect.origin.x, text.as_bytes(), palette::TEXT_DIM);
    }
}
