//! Color model shared between demos and the draw layer.
//!
//! Colors are straight (non-premultiplied) RGBA in `[0, 1]`. Demo shapes are
//! opaque, so no blending policy lives here.

pub mod color;

pub use color::Color;
