//! Input subsystem.
//!
//! Public API is platform-agnostic. The runtime translates winit events into
//! `InputEvent`s through `platform::winit`; demos only look at keys pressed
//! this frame (Escape closes the window).

mod frame;
mod state;
mod types;

pub(crate) mod platform;

pub use frame::InputFrame;
pub use state::InputState;
pub use types::{InputEvent, Key, KeyState};
