//! GPU rendering.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - The vertex shader converts to NDC using a viewport uniform.

mod ctx;
mod mesh;

pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::MeshRenderer;
