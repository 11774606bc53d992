//! CPU-side geometry emission.
//!
//! A [`Mesh`] is a triangle list in logical pixels, built fresh every frame and
//! handed to [`MeshRenderer`](crate::render::MeshRenderer) in one draw call.
//! Rects and glyphs share a single vertex format: solid fills sample the atlas
//! solid block, so the fragment stage never has to branch.

use bytemuck::{Pod, Zeroable};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::GlyphAtlas;

/// Texture-space rectangle, normalized to `[0, 1]`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UvRect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl UvRect {
    #[inline]
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    /// Converts a pixel rect inside a `width × height` texture.
    #[inline]
    pub fn from_pixels(x: u32, y: u32, w: u32, h: u32, width: u32, height: u32) -> Self {
        let (tw, th) = (width.max(1) as f32, height.max(1) as f32);
        Self {
            min: [x as f32 / tw, y as f32 / th],
            max: [(x + w) as f32 / tw, (y + h) as f32 / th],
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    /// Premultiplied linear RGBA.
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2,
        1 => Float32x2,
        2 => Float32x4,
    ];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Growable vertex + index arrays (triangle list, `u32` indices).
///
/// Every quad is wound top-left, top-right, bottom-right, bottom-left and
/// split into triangles `0-1-2` and `0-2-3`.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties both arrays, keeping their allocations.
    #[inline]
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends one textured quad.
    pub fn push_quad(&mut self, rect: Rect, uv: UvRect, color: Color) {
        let base = self.vertices.len() as u32;
        let min = rect.origin;
        let max = rect.max();
        let color = color.to_array();

        self.vertices.extend_from_slice(&[
            Vertex { pos: [min.x, min.y], uv: [uv.min[0], uv.min[1]], color },
            Vertex { pos: [max.x, min.y], uv: [uv.max[0], uv.min[1]], color },
            Vertex { pos: [max.x, max.y], uv: [uv.max[0], uv.max[1]], color },
            Vertex { pos: [min.x, max.y], uv: [uv.min[0], uv.max[1]], color },
        ]);
        self.indices
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    /// Appends a solid rectangle sampling the atlas solid block.
    #[inline]
    pub fn push_rect(&mut self, atlas: &dyn GlyphAtlas, rect: Rect, color: Color) {
        self.push_quad(rect, atlas.solid_uv(), color);
    }

    /// Appends one quad per visible glyph of `text`, starting with the line's
    /// top-left at `origin`. Returns the pen x after the last glyph.
    ///
    /// Bytes the atlas has no glyph for are skipped without advancing; glyphs
    /// with an empty bitmap (space) advance the pen but emit nothing.
    pub fn push_text(
        &mut self,
        atlas: &dyn GlyphAtlas,
        origin: Vec2,
        text: &[u8],
        color: Color,
    ) -> f32 {
        let mut pen_x = origin.x;
        for &byte in text {
            let Some(glyph) = atlas.glyph(byte) else { continue; };
            if glyph.size.x > 0.0 && glyph.size.y > 0.0 {
                let pos = Vec2::new(pen_x, origin.y) + glyph.offset;
                self.push_quad(Rect::from_origin_size(pos, glyph.size), glyph.uv, color);
            }
            pen_x += glyph.advance;
        }
        pen_x
    }
}
