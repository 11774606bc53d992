use super::{Axis, Vec2};

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Plain value type. Widgets and layouts pass these around by copy.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        self.origin + self.size
    }

    /// Far edge along `axis` (`x + w` or `y + h`).
    #[inline]
    pub fn end(self, axis: Axis) -> f32 {
        self.origin.get(axis) + self.size.get(axis)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        self.origin + self.size * 0.5
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// Half-open containment: `x <= p.x < x + w` and `y <= p.y < y + h`.
    ///
    /// A rect with a non-positive extent contains nothing.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.x
            && p.y < self.origin.y + self.size.y
    }

    /// Shrinks the rect by `amount` on every side. Size never goes negative.
    #[inline]
    pub fn inset(self, amount: f32) -> Rect {
        Rect::from_origin_size(
            self.origin + Vec2::splat(amount),
            (self.size - Vec2::splat(amount * 2.0)).max_zero(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_interior_point() {
        assert!(r(0.0, 0.0, 100.0, 30.0).contains(Vec2::new(50.0, 15.0)));
    }

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, 10.0)));
    }

    #[test]
    fn contains_outside() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(-1.0, 5.0)));
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(5.0, -1.0)));
    }

    #[test]
    fn negative_extent_contains_nothing() {
        assert!(!r(10.0, 0.0, -4.0, 5.0).contains(Vec2::new(8.0, 1.0)));
    }

    // ── inset / end ───────────────────────────────────────────────────────

    #[test]
    fn inset_shrinks_each_side() {
        assert_eq!(r(10.0, 10.0, 300.0, 200.0).inset(16.0), r(26.0, 26.0, 268.0, 168.0));
    }

    #[test]
    fn inset_larger_than_rect_clamps_to_zero() {
        let i = r(0.0, 0.0, 10.0, 10.0).inset(8.0);
        assert_eq!(i.size, Vec2::zero());
        assert!(i.is_empty());
    }

    #[test]
    fn end_per_axis() {
        let rect = r(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.end(Axis::X), 40.0);
        assert_eq!(rect.end(Axis::Y), 60.0);
    }
}
