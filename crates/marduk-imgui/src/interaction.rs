//! Hover / press / keyboard-focus state machine.
//!
//! Three slots carry state across frames:
//!
//! - `hot`: widget under the pointer as of the last frame end.
//! - `active`: widget that took the current press. Owns the pointer until
//!   release, even outside its rect. While set, `hot` does not change.
//! - `focused`: widget receiving keyboard input.
//!
//! Widgets are resolved one at a time in declaration (paint) order through
//! [`Interaction::interact`]. Each frame collects a hover candidate; where
//! rects overlap the last declaration is the candidate, and it becomes `hot`
//! at frame end. Hover and press are granted only to the widget that is
//! already `hot`, so an earlier overlapping declaration never acts on a
//! pointer that belongs to a later one. Hover therefore trails the pointer
//! by one frame.

use marduk_engine::coords::{Rect, Vec2};

use crate::id::WidgetId;

/// What a widget wants from the pointer.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Sense {
    /// Press/release outcome only.
    Click,
    /// Like `Click`, and a completed click takes keyboard focus. Pressing a
    /// `Focus` widget does not clear the current focus.
    Focus,
}

/// Result of resolving one widget declaration.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Response {
    /// Pointer is over the widget and no other widget holds the pointer.
    pub hovered: bool,
    /// The widget took the press this frame.
    pub pressed: bool,
    /// The widget is active with the button held (press frame included).
    pub dragging: bool,
    /// Released while still over the widget. True for exactly one frame.
    pub clicked: bool,
    /// The widget has keyboard focus after this declaration.
    pub focused: bool,
}

#[derive(Debug, Default)]
pub(crate) struct Interaction {
    hot: Option<WidgetId>,
    active: Option<WidgetId>,
    focused: Option<WidgetId>,

    /// Hover candidate so far this frame; committed to `hot` in `end`.
    next_hot: Option<WidgetId>,
    /// `active` as of `begin`. While set, only this widget may be hovered.
    held: Option<WidgetId>,
    /// Sense of the widget that took this frame's press.
    press_sense: Option<Sense>,

    pointer: Vec2,
    pointer_down: bool,
    was_down: bool,
    press_edge: bool,
}

impl Interaction {
    pub(crate) fn hot(&self) -> Option<WidgetId> {
        self.hot
    }

    pub(crate) fn active(&self) -> Option<WidgetId> {
        self.active
    }

    pub(crate) fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    pub(crate) fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub(crate) fn pointer_down(&self) -> bool {
        self.pointer_down
    }

    pub(crate) fn set_focus(&mut self, id: Option<WidgetId>) {
        if self.focused != id {
            log::debug!("focus {:?} -> {:?} (programmatic)", self.focused, id);
        }
        self.focused = id;
    }

    /// Snapshots the pointer and derives this frame's edges.
    ///
    /// Escape drops focus and any active widget, and swallows a press that
    /// lands in the same frame.
    pub(crate) fn begin(&mut self, pointer: Vec2, pointer_down: bool, escape: bool) {
        self.pointer = pointer;
        self.pointer_down = pointer_down;
        self.press_edge = pointer_down && !self.was_down;
        self.next_hot = None;
        self.press_sense = None;

        if escape {
            if self.focused.is_some() || self.active.is_some() {
                log::debug!("escape: focus {:?} and active {:?} cleared", self.focused, self.active);
            }
            self.focused = None;
            self.active = None;
            self.press_edge = false;
        }

        self.held = self.active;
    }

    /// Resolves one widget declaration against this frame's pointer.
    pub(crate) fn interact(&mut self, id: WidgetId, rect: Rect, sense: Sense) -> Response {
        let hit = rect.contains(self.pointer);
        if hit && self.held.is_none_or(|held| held == id) {
            self.next_hot = Some(id);
        }

        let hovered = hit
            && match self.held {
                Some(held) => held == id,
                None => self.hot == Some(id),
            };
        let mut response = Response { hovered, ..Response::default() };

        if self.press_edge && hovered && self.active.is_none() {
            self.active = Some(id);
            self.press_sense = Some(sense);
            response.pressed = true;
        }

        if self.active == Some(id) {
            if self.pointer_down {
                response.dragging = true;
            } else {
                self.active = None;
                response.clicked = hit;
                if hit && sense == Sense::Focus && self.focused != Some(id) {
                    log::debug!("focus {:?} -> {id}", self.focused);
                    self.focused = Some(id);
                }
            }
        }

        response.focused = self.focused == Some(id);
        response
    }

    /// Commits the frame: focus loss on an unclaimed press, release of the
    /// pointer, hover transition.
    pub(crate) fn end(&mut self) {
        if self.press_edge && self.press_sense != Some(Sense::Focus) && self.focused.is_some() {
            log::debug!("focus {:?} -> None (press elsewhere)", self.focused);
            self.focused = None;
        }

        // Covers an active widget that was not redeclared this frame.
        if !self.pointer_down {
            self.active = None;
        }

        if self.active.is_none() {
            self.hot = self.next_hot;
        }

        self.was_down = self.pointer_down;
    }
}
