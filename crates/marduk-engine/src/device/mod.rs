//! GPU device + surface management.
//!
//! Creates the wgpu device/queue for a window, keeps the surface configured
//! across resizes, and hands out one encoder + view per frame.

mod gpu;

pub use gpu::{Gpu, GpuFrame, GpuInit, SurfaceErrorAction};
