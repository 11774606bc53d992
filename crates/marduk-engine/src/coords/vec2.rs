use core::ops::{Add, Mul, Sub};

/// One of the two screen axes.
///
/// Layout code is written once against a *primary* and a *cross* axis and
/// uses [`Vec2::get`] / [`Vec2::set`] instead of branching on `x` vs `y`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The perpendicular axis.
    #[inline]
    pub const fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// 2D vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self { x: v, y: v }
    }

    #[inline]
    pub const fn get(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: Axis, v: f32) {
        match axis {
            Axis::X => self.x = v,
            Axis::Y => self.y = v,
        }
    }

    /// Component-wise `max(self, 0)`.
    #[inline]
    pub fn max_zero(self) -> Self {
        Self::new(self.x.max(0.0), self.y.max(0.0))
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_set_by_axis() {
        let mut v = Vec2::new(1.0, 2.0);
        assert_eq!(v.get(Axis::X), 1.0);
        assert_eq!(v.get(Axis::Y), 2.0);
        v.set(Axis::Y, 7.0);
        assert_eq!(v, Vec2::new(1.0, 7.0));
    }

    #[test]
    fn cross_axis_flips() {
        assert_eq!(Axis::X.cross(), Axis::Y);
        assert_eq!(Axis::Y.cross(), Axis::X);
    }

    #[test]
    fn max_zero_clamps_negative_components() {
        assert_eq!(Vec2::new(-3.0, 4.0).max_zero(), Vec2::new(0.0, 4.0));
    }
}
