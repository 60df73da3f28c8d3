//! Coordinate types shared by the geometry generators and the renderer.
//!
//! Geometry lives directly in normalized device coordinates:
//! - origin at the window center
//! - +X right, +Y up
//! - the visible square is [-1, 1] x [-1, 1]

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
