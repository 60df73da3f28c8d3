//! Shader compiler.
//!
//! `compile_program` turns a vertex source and a fragment source into a
//! `ShaderProgram`. It never fails: compile and link diagnostics go to the
//! log and a failed program renders with a solid black fallback pair.
//!
//! Conventions every program follows:
//! - the vertex source defines `@vertex fn vs_main`, the fragment source
//!   `@fragment fn fs_main`
//! - the only vertex input is the position at `@location(0)` (`vec3<f32>`)
//! - the only resource is the draw uniform block at `@group(0) @binding(0)`

mod check;
mod error;
mod program;
mod source;

pub use check::check_program;
pub use error::{ShaderError, ShaderStage};
pub use program::{compile_program, ProgramId, ProgramStatus, ShaderProgram};
pub use source::{ProgramSource, FRAGMENT_ENTRY, VERTEX_ENTRY};
