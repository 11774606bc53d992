use crate::coords::Vec2;
use crate::geometry::UvRect;

use super::{Glyph, GlyphAtlas};

/// Fixed-advance atlas without a texture.
///
/// Every printable ASCII byte except space maps to a full-cell glyph of
/// `advance × line_height`. Useful for tests and for sizing layouts before a
/// real font is loaded.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MonoAtlas {
    advance: f32,
    line_height: f32,
}

impl MonoAtlas {
    pub fn new(advance: f32, line_height: f32) -> Self {
        Self { advance, line_height }
    }
}

impl GlyphAtlas for MonoAtlas {
    fn glyph(&self, byte: u8) -> Option<Glyph> {
        match byte {
            b' ' => Some(Glyph { advance: self.advance, ..Glyph::default() }),
            0x21..=0x7e => Some(Glyph {
                uv: UvRect::default(),
                offset: Vec2::zero(),
                size: Vec2::new(self.advance, self.line_height),
                advance: self.advance,
            }),
            _ => None,
        }
    }

    fn solid_uv(&self) -> UvRect {
        UvRect::default()
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
