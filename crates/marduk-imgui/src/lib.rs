//! Marduk imgui: immediate-mode widgets on top of `marduk-engine`.
//!
//! The caller owns all widget values. Every frame it samples input, declares
//! widgets in paint order, and hands the resulting mesh to a renderer.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use marduk_imgui::prelude::*;
//!
//! let mut ui = Context::new();
//! let mut volume = 0.5;
//! let mut name = TextInputState::from_buffer([0u8; 64]);
//!
//! // In your frame callback:
//! let mut frame = ui.begin(&atlas, FrameInput::from_engine(input, input_frame));
//! frame.push_layout(panel, Direction::Stacked, 16.0, 8.0)?;
//! if frame.button(WidgetId::from_const(1), Place::Next(32.0), "Reset") {
//!     volume = 0.5;
//! }
//! frame.slider(WidgetId::from_const(2), Place::Next(24.0), 0.0..=1.0, &mut volume);
//! frame.text_input(WidgetId::from_const(3), Place::Next(28.0), &mut name);
//! frame.pop_layout()?;
//! let mesh = frame.end();
//! // Pass mesh to MeshRenderer::render.
//! ```
//!
//! # Custom widgets
//!
//! Combine [`Frame::interact`] with [`Frame::painter`]:
//!
//! ```rust,ignore
//! let rect = frame.place(place).unwrap_or_default();
//! let response = frame.interact(id, rect, Sense::Click);
//! frame.painter().fill_rect(rect, if response.hovered { hover } else { idle });
//! ```

mod context;
mod id;
mod input;
mod interaction;
mod layout;
mod painter;
mod text_edit;
pub mod widgets;

pub use context::{Context, Frame, Place};
pub use id::WidgetId;
pub use input::{FrameInput, KeyboardSample};
pub use interaction::{Response, Sense};
pub use layout::{Direction, Layout, LayoutError, LayoutStack, MAX_LAYOUT_DEPTH};
pub use painter::Painter;
pub use text_edit::{Edit, EditOutcome, TextInputState, TextStateError};
pub use widgets::TextInputResponse;

/// Everything needed to declare a frame.
pub mod prelude {
    pub use crate::{
        Context, Direction, Frame, FrameInput, KeyboardSample, Place, Response, Sense,
        TextInputResponse, TextInputState, WidgetId,
    };

    pub use marduk_engine::coords::{Rect, Vec2};
    pub use marduk_engine::paint::Color;
}
