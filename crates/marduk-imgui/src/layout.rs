//! Stack-based layout.
//!
//! A layout frame is a region with a placement cursor. [`LayoutStack::next`]
//! hands out the next rect along the frame's primary axis; the cross axis
//! always spans the full padded region. Frames nest up to
//! [`MAX_LAYOUT_DEPTH`] deep.

use thiserror::Error;

use marduk_engine::coords::{Axis, Rect, Vec2};

pub const MAX_LAYOUT_DEPTH: usize = 8;

#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout stack is full (max depth {max})")]
    StackFull { max: usize },

    #[error("layout stack is empty")]
    StackEmpty,
}

/// Placement direction of a layout frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Stacked,
    /// Left to right.
    Row,
}

impl Direction {
    #[inline]
    pub const fn primary(self) -> Axis {
        match self {
            Direction::Stacked => Axis::Y,
            Direction::Row => Axis::X,
        }
    }
}

/// One layout frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Layout {
    pub region: Rect,
    pub direction: Direction,
    pub padding: f32,
    pub spacing: f32,
    /// Origin of the next item.
    pub cursor: Vec2,
    /// Padded region size, never negative.
    pub remaining: Vec2,
    pub item_count: usize,
}

impl Layout {
    pub fn new(region: Rect, direction: Direction, padding: f32, spacing: f32) -> Self {
        Self {
            region,
            direction,
            padding,
            spacing,
            cursor: region.origin + Vec2::splat(padding),
            remaining: (region.size - Vec2::splat(padding * 2.0)).max_zero(),
            item_count: 0,
        }
    }

    /// Places an item of extent `size` along the primary axis.
    pub fn next(&mut self, size: f32) -> Rect {
        let primary = self.direction.primary();
        let cross = primary.cross();

        if self.item_count > 0 {
            let at = self.cursor.get(primary) + self.spacing;
            self.cursor.set(primary, at);
        }

        let mut extent = Vec2::zero();
        extent.set(primary, size);
        extent.set(cross, self.remaining.get(cross));
        let rect = Rect::from_origin_size(self.cursor, extent);

        let at = self.cursor.get(primary) + size;
        self.cursor.set(primary, at);
        self.item_count += 1;
        rect
    }

    /// Distance from the cursor to the region's far edge on the primary axis.
    ///
    /// Measured to the region edge, not the padded edge.
    pub fn remaining_primary(&self) -> f32 {
        let primary = self.direction.primary();
        (self.region.end(primary) - self.cursor.get(primary)).max(0.0)
    }
}

/// Fixed-capacity stack of layout frames. Only the top frame places items.
#[derive(Debug, Default)]
pub struct LayoutStack {
    frames: [Layout; MAX_LAYOUT_DEPTH],
    depth: usize,
}

impl LayoutStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn clear(&mut self) {
        self.depth = 0;
    }

    pub fn top(&self) -> Option<&Layout> {
        self.depth.checked_sub(1).map(|i| &self.frames[i])
    }

    /// Pushes a frame covering `region`. At max depth the stack is unchanged.
    pub fn push(
        &mut self,
        region: Rect,
        direction: Direction,
        padding: f32,
        spacing: f32,
    ) -> Result<(), LayoutError> {
        let slot = self
            .frames
            .get_mut(self.depth)
            .ok_or(LayoutError::StackFull { max: MAX_LAYOUT_DEPTH })?;
        *slot = Layout::new(region, direction, padding, spacing);
        self.depth += 1;
        Ok(())
    }

    /// Removes the top frame; the parent continues where it left off.
    pub fn pop(&mut self) -> Result<Layout, LayoutError> {
        let top = self.depth.checked_sub(1).ok_or(LayoutError::StackEmpty)?;
        self.depth = top;
        Ok(self.frames[top])
    }

    /// Next rect from the top frame, or `None` with no frame pushed.
    pub fn next(&mut self, size: f32) -> Option<Rect> {
        let top = self.depth.checked_sub(1)?;
        Some(self.frames[top].next(size))
    }

    pub fn remaining_primary(&self) -> Option<f32> {
        self.top().map(Layout::remaining_primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PANEL: Rect = Rect::new(10.0, 10.0, 300.0, 200.0);

    // ── placement ─────────────────────────────────────────────────────────

    #[test]
    fn stacked_items_advance_down() {
        let mut stack = LayoutStack::new();
        stack.push(PANEL, Direction::Stacked, 16.0, 8.0).unwrap();

        let a = stack.next(30.0).unwrap();
        let b = stack.next(30.0).unwrap();
        let c = stack.next(30.0).unwrap();

        assert_eq!(a, Rect::new(26.0, 26.0, 268.0, 30.0));
        assert_eq!(b, Rect::new(26.0, 64.0, 268.0, 30.0));
        assert_eq!(c, Rect::new(26.0, 102.0, 268.0, 30.0));
    }

    #[test]
    fn row_items_advance_right_with_full_height() {
        let mut stack = LayoutStack::new();
        stack.push(PANEL, Direction::Row, 16.0, 8.0).unwrap();

        let a = stack.next(100.0).unwrap();
        let b = stack.next(50.0).unwrap();
        assert_eq!(a, Rect::new(26.0, 26.0, 100.0, 168.0));
        assert_eq!(b, Rect::new(134.0, 26.0, 50.0, 168.0));
    }

    #[test]
    fn remaining_primary_measures_to_region_edge() {
        let mut stack = LayoutStack::new();
        stack.push(PANEL, Direction::Stacked, 16.0, 8.0).unwrap();
        assert_eq!(stack.remaining_primary(), Some(210.0 - 26.0));
        stack.next(30.0);
        assert_eq!(stack.remaining_primary(), Some(210.0 - 56.0));
    }

    #[test]
    fn oversized_padding_clamps_remaining() {
        let layout = Layout::new(Rect::new(0.0, 0.0, 20.0, 20.0), Direction::Row, 16.0, 0.0);
        assert_eq!(layout.remaining, Vec2::zero());
    }

    // ── nesting ───────────────────────────────────────────────────────────

    #[test]
    fn parent_resumes_after_pop() {
        let mut stack = LayoutStack::new();
        stack.push(PANEL, Direction::Stacked, 16.0, 8.0).unwrap();
        let row = stack.next(40.0).unwrap();

        stack.push(row, Direction::Row, 0.0, 4.0).unwrap();
        stack.next(60.0);
        stack.next(60.0);
        stack.pop().unwrap();

        assert_eq!(stack.next(30.0), Some(Rect::new(26.0, 74.0, 268.0, 30.0)));
    }

    #[test]
    fn push_past_max_depth_fails_untouched() {
        let mut stack = LayoutStack::new();
        for _ in 0..MAX_LAYOUT_DEPTH {
            stack.push(PANEL, Direction::Stacked, 0.0, 0.0).unwrap();
        }
        let top = *stack.top().unwrap();
        assert_eq!(
            stack.push(Rect::default(), Direction::Row, 1.0, 1.0),
            Err(LayoutError::StackFull { max: MAX_LAYOUT_DEPTH })
        );
        assert_eq!(stack.depth(), MAX_LAYOUT_DEPTH);
        assert_eq!(*stack.top().unwrap(), top);
    }

    #[test]
    fn empty_stack_refuses() {
        let mut stack = LayoutStack::new();
        assert_eq!(stack.pop(), Err(LayoutError::StackEmpty));
        assert_eq!(stack.next(10.0), None);
        assert_eq!(stack.remaining_primary(), None);
    }
}
