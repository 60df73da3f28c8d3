//! shapelab demos.
//!
//! Shape generators, embedded shader programs and the harness every demo
//! binary under `src/bin/` runs on.

pub mod geometry;
pub mod harness;
pub mod shaders;
