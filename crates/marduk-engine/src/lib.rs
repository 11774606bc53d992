//! Marduk engine crate.
//!
//! Platform and GPU collaborators for the immediate-mode UI core: geometry
//! types, the mesh emitter, glyph atlases, input sampling, the wgpu mesh
//! renderer and the winit runtime.

pub mod core;
pub mod device;
pub mod input;
pub mod window;

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod text;
