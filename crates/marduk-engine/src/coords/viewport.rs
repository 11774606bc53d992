/// Viewport size in logical pixels.
///
/// Uploaded by the mesh renderer as the basis for the logical px → NDC transform.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Size clamped to at least one pixel per axis; safe to divide by.
    #[inline]
    pub fn clamped(self) -> [f32; 2] {
        [self.width.max(1.0), self.height.max(1.0)]
    }
}
