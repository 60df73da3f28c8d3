//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window and wires them to the GPU layer.
//! This is the "open window with context" half of the shared utilities.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
