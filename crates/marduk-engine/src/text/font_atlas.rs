use thiserror::Error;

use crate::coords::Vec2;
use crate::geometry::UvRect;

use super::{Glyph, GlyphAtlas};

// ── constants ─────────────────────────────────────────────────────────────

const FIRST_BYTE: u8 = 0x20;
const LAST_BYTE: u8 = 0x7e;
const GLYPH_PADDING: u32 = 1; // pixels between glyphs in the atlas
const SOLID_BLOCK: u32 = 4;

// ── config / errors ───────────────────────────────────────────────────────

/// Bake parameters for [`FontAtlas::new`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AtlasConfig {
    /// Rasterization size in pixels.
    pub px_size: f32,
    /// Texture width in pixels. Height grows to fit.
    pub width: u32,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self { px_size: 16.0, width: 512 }
    }
}

#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("font parse error: {0}")]
    Font(String),

    #[error("invalid pixel size {0}")]
    InvalidSize(f32),

    #[error("font has no horizontal line metrics")]
    NoLineMetrics,

    #[error("glyph {byte:#04x} is {width}px wide, atlas is {atlas_width}px")]
    GlyphTooWide { byte: u8, width: u32, atlas_width: u32 },
}

// ── atlas ─────────────────────────────────────────────────────────────────

/// Printable ASCII baked into a single-channel (R8) coverage texture.
///
/// The texture also holds a small block of fully opaque texels so rects and
/// text share one pipeline and one draw call.
pub struct FontAtlas {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
    glyphs: Vec<Option<Glyph>>,
    solid: UvRect,
    line_height: f32,
}

struct Bitmap {
    byte: u8,
    metrics: fontdue::Metrics,
    coverage: Vec<u8>,
}

/// Simple shelf packer: left to right, new row when the current one is full.
struct Shelf {
    width: u32,
    x: u32,
    y: u32,
    row_height: u32,
}

impl Shelf {
    fn new(width: u32) -> Self {
        Self { width, x: GLYPH_PADDING, y: GLYPH_PADDING, row_height: 0 }
    }

    fn place(&mut self, w: u32, h: u32) -> Option<(u32, u32)> {
        if w + 2 * GLYPH_PADDING > self.width {
            return None;
        }
        if self.x + w + GLYPH_PADDING > self.width {
            self.y += self.row_height + GLYPH_PADDING;
            self.x = GLYPH_PADDING;
            self.row_height = 0;
        }
        let at = (self.x, self.y);
        self.x += w + GLYPH_PADDING;
        self.row_height = self.row_height.max(h);
        Some(at)
    }

    fn used_height(&self) -> u32 {
        self.y + self.row_height + GLYPH_PADDING
    }
}

impl FontAtlas {
    /// Parses a TrueType/OpenType font and bakes bytes `0x20..=0x7e`.
    pub fn new(font_bytes: &[u8], config: AtlasConfig) -> Result<Self, AtlasError> {
        if !(config.px_size.is_finite() && config.px_size > 0.0) {
            return Err(AtlasError::InvalidSize(config.px_size));
        }

        let settings = fontdue::FontSettings { scale: config.px_size, ..Default::default() };
        let font = fontdue::Font::from_bytes(font_bytes, settings)
            .map_err(|e| AtlasError::Font(e.to_string()))?;

        let line = font
            .horizontal_line_metrics(config.px_size)
            .ok_or(AtlasError::NoLineMetrics)?;

        let bitmaps: Vec<Bitmap> = (FIRST_BYTE..=LAST_BYTE)
            .map(|byte| {
                let (metrics, coverage) = font.rasterize(byte as char, config.px_size);
                Bitmap { byte, metrics, coverage }
            })
            .collect();

        // ── pack ───────────────────────────────────────────────────────────
        let mut shelf = Shelf::new(config.width);
        let solid_at = shelf
            .place(SOLID_BLOCK, SOLID_BLOCK)
            .ok_or(AtlasError::GlyphTooWide {
                byte: 0,
                width: SOLID_BLOCK,
                atlas_width: config.width,
            })?;

        let mut placed = Vec::with_capacity(bitmaps.len());
        for bmp in &bitmaps {
            let (w, h) = (bmp.metrics.width as u32, bmp.metrics.height as u32);
            if w == 0 || h == 0 {
                placed.push(None);
                continue;
            }
            let at = shelf.place(w, h).ok_or(AtlasError::GlyphTooWide {
                byte: bmp.byte,
                width: w,
                atlas_width: config.width,
            })?;
            placed.push(Some(at));
        }

        let width = config.width;
        let height = shelf.used_height().next_power_of_two();

        // ── blit ───────────────────────────────────────────────────────────
        let mut pixels = vec![0u8; (width * height) as usize];
        for row in 0..SOLID_BLOCK {
            let start = ((solid_at.1 + row) * width + solid_at.0) as usize;
            pixels[start..start + SOLID_BLOCK as usize].fill(255);
        }

        let mut glyphs = vec![None; 128];
        for (bmp, at) in bitmaps.iter().zip(&placed) {
            let m = &bmp.metrics;
            let mut glyph = Glyph { advance: m.advance_width, ..Glyph::default() };

            if let Some((gx, gy)) = *at {
                let w = m.width;
                for (row, src) in bmp.coverage.chunks_exact(w).enumerate() {
                    let start = (gy as usize + row) * width as usize + gx as usize;
                    pixels[start..start + w].copy_from_slice(src);
                }
                glyph.uv = UvRect::from_pixels(gx, gy, w as u32, m.height as u32, width, height);
                glyph.offset = Vec2::new(
                    m.xmin as f32,
                    line.ascent - (m.ymin as f32 + m.height as f32),
                );
                glyph.size = Vec2::new(w as f32, m.height as f32);
            }

            glyphs[bmp.byte as usize] = Some(glyph);
        }

        // Sample the middle of the block so linear filtering never reaches
        // a transparent neighbour.
        let inner = SOLID_BLOCK - 2;
        let solid = UvRect::from_pixels(solid_at.0 + 1, solid_at.1 + 1, inner, inner, width, height);

        log::debug!(
            "baked font atlas: {}x{} px, {} glyphs at {}px",
            width,
            height,
            glyphs.iter().flatten().count(),
            config.px_size,
        );

        Ok(Self {
            pixels,
            width,
            height,
            glyphs,
            solid,
            line_height: line.new_line_size,
        })
    }

    /// R8 coverage, row-major, `width * height` bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

impl GlyphAtlas for FontAtlas {
    fn glyph(&self, byte: u8) -> Option<Glyph> {
        self.glyphs.get(byte as usize).copied().flatten()
    }

    fn solid_uv(&self) -> UvRect {
        self.solid
    }

    fn line_height(&self) -> f32 {
        self.line_height
    }
}
