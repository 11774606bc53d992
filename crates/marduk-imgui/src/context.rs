use marduk_engine::coords::{Rect, Vec2};
use marduk_engine::geometry::Mesh;
use marduk_engine::text::GlyphAtlas;

use crate::id::WidgetId;
use crate::input::{FrameInput, KeyboardSample};
use crate::interaction::{Interaction, Response, Sense};
use crate::layout::{Direction, Layout, LayoutError, LayoutStack};
use crate::painter::Painter;

/// Where a widget goes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Place {
    /// An explicit rect.
    At(Rect),
    /// The next slot of the current layout, `size` along its primary axis.
    Next(f32),
}

impl From<Rect> for Place {
    fn from(rect: Rect) -> Self {
        Place::At(rect)
    }
}

/// Cross-frame UI state for one surface.
///
/// Create once, then bracket every frame with [`Context::begin`] and
/// [`Frame::end`]. Holds interaction state, the layout stack and the output
/// mesh, whose allocation is reused frame to frame.
#[derive(Debug, Default)]
pub struct Context {
    pub(crate) interaction: Interaction,
    pub(crate) layouts: LayoutStack,
    pub(crate) mesh: Mesh,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a frame: snapshots `input`, clears the mesh and the layout stack.
    ///
    /// The returned [`Frame`] borrows the context exclusively until
    /// [`Frame::end`].
    pub fn begin<'a>(&'a mut self, atlas: &'a dyn GlyphAtlas, input: FrameInput<'a>) -> Frame<'a> {
        self.mesh.clear();
        self.layouts.clear();
        self.interaction
            .begin(input.pointer, input.pointer_down, input.keys.escape);
        Frame { ctx: self, atlas, keys: input.keys }
    }

    pub fn hot(&self) -> Option<WidgetId> {
        self.interaction.hot()
    }

    pub fn active(&self) -> Option<WidgetId> {
        self.interaction.active()
    }

    pub fn focused(&self) -> Option<WidgetId> {
        self.interaction.focused()
    }

    /// Moves keyboard focus, or clears it with `None`.
    pub fn set_focus(&mut self, id: Option<WidgetId>) {
        self.interaction.set_focus(id);
    }

    /// Geometry of the last completed frame.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }
}

/// One frame of widget declarations.
///
/// Widgets are declared as methods on `Frame` in paint order (see
/// [`crate::widgets`]). Custom widgets combine [`Frame::interact`] with
/// [`Frame::painter`].
pub struct Frame<'a> {
    ctx: &'a mut Context,
    atlas: &'a dyn GlyphAtlas,
    keys: KeyboardSample<'a>,
}

impl<'a> Frame<'a> {
    /// Commits hover and release transitions and returns the frame's mesh.
    pub fn end(self) -> &'a Mesh {
        let Frame { ctx, .. } = self;
        ctx.interaction.end();
        if ctx.layouts.depth() > 0 {
            log::debug!("frame ended with {} layout(s) still pushed", ctx.layouts.depth());
        }
        let ctx: &'a Context = ctx;
        &ctx.mesh
    }

    // ── layout ────────────────────────────────────────────────────────────

    pub fn push_layout(
        &mut self,
        region: Rect,
        direction: Direction,
        padding: f32,
        spacing: f32,
    ) -> Result<(), LayoutError> {
        self.ctx
            .layouts
            .push(region, direction, padding, spacing)
            .inspect_err(|e| log::debug!("push_layout: {e}"))
    }

    /// Takes the next `size` slot of the current layout and pushes a nested
    /// layout over it.
    pub fn push_nested(
        &mut self,
        size: f32,
        direction: Direction,
        padding: f32,
        spacing: f32,
    ) -> Result<(), LayoutError> {
        let region = self.next_rect(size).ok_or(LayoutError::StackEmpty)?;
        self.push_layout(region, direction, padding, spacing)
    }

    pub fn pop_layout(&mut self) -> Result<Layout, LayoutError> {
        self.ctx
            .layouts
            .pop()
            .inspect_err(|e| log::debug!("pop_layout: {e}"))
    }

    /// Next rect from the current layout; `None` with no layout pushed.
    pub fn next_rect(&mut self, size: f32) -> Option<Rect> {
        self.ctx.layouts.next(size)
    }

    /// Space left on the current layout's primary axis.
    pub fn remaining(&self) -> Option<f32> {
        self.ctx.layouts.remaining_primary()
    }

    /// Resolves a [`Place`] to a rect.
    pub fn place(&mut self, place: Place) -> Option<Rect> {
        match place {
            Place::At(rect) => Some(rect),
            Place::Next(size) => {
                let rect = self.next_rect(size);
                if rect.is_none() {
                    log::debug!("Place::Next({size}) with no layout pushed, widget skipped");
                }
                rect
            }
        }
    }

    // ── interaction ───────────────────────────────────────────────────────

    /// Runs the hover/press/focus state machine for one widget.
    pub fn interact(&mut self, id: WidgetId, rect: Rect, sense: Sense) -> Response {
        self.ctx.interaction.interact(id, rect, sense)
    }

    pub fn is_focused(&self, id: WidgetId) -> bool {
        self.ctx.interaction.focused() == Some(id)
    }

    pub fn pointer(&self) -> Vec2 {
        self.ctx.interaction.pointer()
    }

    pub fn pointer_down(&self) -> bool {
        self.ctx.interaction.pointer_down()
    }

    /// This frame's keyboard sample.
    pub fn keys(&self) -> KeyboardSample<'a> {
        self.keys
    }

    // ── painting ──────────────────────────────────────────────────────────

    pub fn painter(&mut self) -> Painter<'_> {
        Painter::new(&mut self.ctx.mesh, self.atlas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marduk_engine::text::MonoAtlas;

    fn atlas() -> MonoAtlas {
        MonoAtlas::new(8.0, 16.0)
    }

    fn input(x: f32, y: f32, down: bool) -> FrameInput<'static> {
        FrameInput::new(Vec2::new(x, y), down, KeyboardSample::default())
    }

    // ── frame lifecycle ───────────────────────────────────────────────────

    #[test]
    fn begin_clears_previous_mesh_and_layouts() {
        let atlas = atlas();
        let mut ctx = Context::new();

        let mut frame = ctx.begin(&atlas, input(0.0, 0.0, false));
        frame.push_layout(Rect::new(0.0, 0.0, 100.0, 100.0), Direction::Stacked, 0.0, 0.0).unwrap();
        frame.painter().fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), marduk_engine::paint::Color::WHITE);
        assert!(!frame.end().is_empty());

        let mut frame = ctx.begin(&atlas, input(0.0, 0.0, false));
        assert_eq!(frame.next_rect(10.0), None);
        assert!(frame.end().is_empty());
    }

    #[test]
    fn place_next_without_layout_is_none() {
        let atlas = atlas();
        let mut ctx = Context::new();
        let mut frame = ctx.begin(&atlas, input(0.0, 0.0, false));
        assert_eq!(frame.place(Place::Next(20.0)), None);
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(frame.place(r.into()), Some(r));
        frame.end();
    }

    #[test]
    fn push_nested_without_parent_fails() {
        let atlas = atlas();
        let mut ctx = Context::new();
        let mut frame = ctx.begin(&atlas, input(0.0, 0.0, false));
        assert_eq!(
            frame.push_nested(30.0, Direction::Row, 0.0, 4.0),
            Err(LayoutError::StackEmpty)
        );
        frame.end();
    }

    #[test]
    fn set_focus_is_visible_in_frame() {
        let atlas = atlas();
        let mut ctx = Context::new();
        let id = WidgetId::new(3).unwrap();
        ctx.set_focus(Some(id));
        let frame = ctx.begin(&atlas, input(0.0, 0.0, false));
        assert!(frame.is_focused(id));
        frame.end();
        assert_eq!(ctx.focused(), Some(id));
    }

    // ── manual vs layout ──────────────────────────────────────────────────

    #[test]
    fn manual_and_layout_placement_emit_identical_meshes() {
        let atlas = atlas();
        let ids: Vec<WidgetId> = (1..=3).filter_map(WidgetId::new).collect();

        let mut manual = Context::new();
        let mut frame = manual.begin(&atlas, input(30.0, 30.0, false));
        frame.button(ids[0], Rect::new(26.0, 26.0, 268.0, 30.0), "One");
        frame.button(ids[1], Rect::new(26.0, 64.0, 268.0, 30.0), "Two");
        frame.label(Rect::new(26.0, 102.0, 268.0, 30.0), "Three");
        let manual_mesh = frame.end().clone();

        let mut laid_out = Context::new();
        let mut frame = laid_out.begin(&atlas, input(30.0, 30.0, false));
        frame.push_layout(Rect::new(10.0, 10.0, 300.0, 200.0), Direction::Stacked, 16.0, 8.0).unwrap();
        frame.button(ids[0], Place::Next(30.0), "One");
        frame.button(ids[1], Place::Next(30.0), "Two");
        frame.label(Place::Next(30.0), "Three");
        frame.pop_layout().unwrap();
        let layout_mesh = frame.end().clone();

        assert!(!manual_mesh.is_empty());
        assert_eq!(manual_mesh, layout_mesh);
        assert_eq!(manual.hot(), laid_out.hot());
    }
}
