//! shapelab engine crate.
//!
//! Window, GPU context, shader compilation and the small draw layer shared by
//! every shapelab demo. Demos describe geometry and colors; this crate turns
//! them into buffers, pipelines and frames.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod paint;
pub mod render;
pub mod shader;
