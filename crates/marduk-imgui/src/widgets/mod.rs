//! Built-in widgets, declared as methods on [`Frame`](crate::Frame).
//!
//! Each takes a [`Place`](crate::Place) (an explicit rect or the next layout
//! slot) and returns its outcome for this frame. A `Place::Next` with no
//! layout pushed skips the widget and returns the "nothing happened" value.

mod button;
mod checkbox;
mod label;
mod slider;
mod text_input;

pub use text_input::TextInputResponse;

/// Widget colours.
pub(crate) mod palette {
    use marduk_engine::paint::Color;

    pub const TEXT: Color = Color::from_premul(0.88, 0.89, 0.92, 1.0);
    pub const TEXT_DIM: Color = Color::from_premul(0.55, 0.57, 0.62, 1.0);

    pub const IDLE: Color = Color::from_premul(0.16, 0.18, 0.23, 1.0);
    pub const HOVER: Color = Color::from_premul(0.22, 0.25, 0.32, 1.0);
    pub const PRESSED: Color = Color::from_premul(0.11, 0.13, 0.17, 1.0);

    pub const ACCENT: Color = Color::from_premul(0.20, 0.55, 0.95, 1.0);
    pub const BORDER: Color = Color::from_premul(0.30, 0.34, 0.42, 1.0);
    pub const FIELD: Color = Color::from_premul(0.08, 0.09, 0.12, 1.0);
}

/// Background for a clickable surface.
pub(crate) fn surface_color(response: &crate::Response) -> marduk_engine::paint::Color {
    if response.dragging && response.hovered {
        palette::PRESSED
    } else if response.hovered || response.dragging {
        palette::HOVER
    } else {
        palette::IDLE
    }
}
