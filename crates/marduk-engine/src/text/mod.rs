//! Glyph atlases.
//!
//! The UI core only sees the [`GlyphAtlas`] trait. [`FontAtlas`] bakes a real
//! font into a coverage texture for the GPU path; [`MonoAtlas`] is a
//! fixed-advance stand-in with no pixels, for headless use.

mod atlas;
mod font_atlas;
mod mono;

pub use atlas::{Glyph, GlyphAtlas};
pub use font_atlas::{AtlasConfig, AtlasError, FontAtlas};
pub use mono::MonoAtlas;
