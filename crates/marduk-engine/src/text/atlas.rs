use crate::coords::Vec2;
use crate::geometry::UvRect;

/// Placement data for one baked glyph.
///
/// `offset` is measured from the pen position at the *top* of the line, so a
/// glyph quad is `pen + offset` with extent `size`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Glyph {
    pub uv: UvRect,
    pub offset: Vec2,
    pub size: Vec2,
    pub advance: f32,
}

/// Byte-indexed glyph lookup backed by a single texture.
pub trait GlyphAtlas {
    /// Glyph for `byte`, or `None` if the atlas has no entry for it.
    fn glyph(&self, byte: u8) -> Option<Glyph>;

    /// UV rect of a fully opaque texel block, used for solid fills.
    fn solid_uv(&self) -> UvRect;

    fn line_height(&self) -> f32;

    /// Horizontal advance of `text` in logical pixels.
    fn measure(&self, text: &[u8]) -> f32 {
        text.iter()
            .filter_map(|&b| self.glyph(b))
            .map(|g| g.advance)
            .sum()
    }
}
