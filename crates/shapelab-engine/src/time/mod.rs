//! Time subsystem.
//!
//! One `FrameClock` per window. `tick()` once per presented frame yields the
//! delta used for logging and the elapsed seconds fed to time-driven shaders.

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
