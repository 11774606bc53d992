//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `translate` maps winit window events into `InputEvent`s for the runtime.

mod frame;
mod state;
mod types;

pub(crate) mod translate;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState, Modifiers, MouseButton, MouseButtonState};
