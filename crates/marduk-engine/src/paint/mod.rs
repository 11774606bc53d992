//! Color model shared by the geometry emitter and the renderer.
//!
//! Colors are linear premultiplied RGBA. Geometry types live in `coords`.

mod color;

pub use color::Color;
