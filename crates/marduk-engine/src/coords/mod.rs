//! Coordinate and geometry types shared by the engine and the UI core.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! The mesh renderer converts to NDC in its vertex shader using a viewport uniform.

mod rect;
mod vec2;
mod viewport;

pub use rect::Rect;
pub use vec2::{Axis, Vec2};
pub use viewport::Viewport;
