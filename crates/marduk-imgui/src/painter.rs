use marduk_engine::coords::{Rect, Vec2};
use marduk_engine::geometry::Mesh;
use marduk_engine::paint::Color;
use marduk_engine::text::GlyphAtlas;

/// Drawing surface for widget declarations.
///
/// Appends to the frame's mesh in call order, so later calls paint on top.
pub struct Painter<'a> {
    pub(crate) mesh: &'a mut Mesh,
    pub(crate) atlas: &'a dyn GlyphAtlas,
}

impl<'a> Painter<'a> {
    pub fn new(mesh: &'a mut Mesh, atlas: &'a dyn GlyphAtlas) -> Self {
        Self { mesh, atlas }
    }

    // ── measurement ───────────────────────────────────────────────────────

    #[inline]
    pub fn measure_text(&self, text: &[u8]) -> f32 {
        self.atlas.measure(text)
    }

    #[inline]
    pub fn line_height(&self) -> f32 {
        self.atlas.line_height()
    }

    // ── drawing ───────────────────────────────────────────────────────────

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.mesh.push_rect(self.atlas, rect, color);
    }

    /// Rect outline of width `thickness`, drawn inside `rect`.
    pub fn stroke_rect(&mut self, rect: Rect, thickness: f32, color: Color) {
        let t = thickness.min(rect.size.x * 0.5).min(rect.size.y * 0.5);
        let Rect { origin: o, size: s } = rect;
        self.fill_rect(Rect::new(o.x, o.y, s.x, t), color);
        self.fill_rect(Rect::new(o.x, o.y + s.y - t, s.x, t), color);
        self.fill_rect(Rect::new(o.x, o.y + t, t, s.y - 2.0 * t), color);
        self.fill_rect(Rect::new(o.x + s.x - t, o.y + t, t, s.y - 2.0 * t), color);
    }

    /// Text with the line's top-left at `origin`. Returns the end pen x.
    pub fn text(&mut self, origin: Vec2, text: &[u8], color: Color) -> f32 {
        self.mesh.push_text(self.atlas, origin, text, color)
    }

    /// Text starting at `x`, vertically centered in `rect`.
    pub fn text_left(&mut self, rect: Rect, x: f32, text: &[u8], color: Color) -> f32 {
        let y = rect.origin.y + (rect.size.y - self.line_height()) * 0.5;
        self.text(Vec2::new(x, y), text, color)
    }

    /// Text centered in `rect` on both axes.
    pub fn text_centered(&mut self, rect: Rect, text: &[u8], color: Color) {
        let x = rect.center().x - self.measure_text(text) * 0.5;
        self.text_left(rect, x, text, color);
    }
}
