//! Embedded WGSL programs.
//!
//! Every program reads the draw uniform block at `@group(0) @binding(0)`
//! (`color: vec4<f32>, time: f32`).

use shapelab_engine::shader::ProgramSource;

/// Passes positions through and fills with the uniform color.
pub fn flat() -> ProgramSource {
    ProgramSource::new(
        "flat",
        include_str!("flat_vs.wgsl"),
        include_str!("flat_fs.wgsl"),
    )
}

/// Ripple pattern tinted by the uniform color, animated by the uniform time.
pub fn wave() -> ProgramSource {
    ProgramSource::new(
        "wave",
        include_str!("wave_vs.wgsl"),
        include_str!("wave_fs.wgsl"),
    )
}

/// Fragment stage that does not compile; the program draws with the
/// black fallback.
pub fn broken() -> ProgramSource {
    ProgramSource::new(
        "broken",
        include_str!("flat_vs.wgsl"),
        include_str!("broken_fs.wgsl"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapelab_engine::shader::{check_program, ProgramStatus, ShaderStage};

    #[test]
    fn flat_links() {
        assert_eq!(check_program(&flat()), ProgramStatus::Linked);
    }

    #[test]
    fn wave_links() {
        assert_eq!(check_program(&wave()), ProgramStatus::Linked);
    }

    #[test]
    fn broken_fails_in_the_fragment_stage() {
        let status = check_program(&broken());
        let errors = status.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].stage(), Some(ShaderStage::Fragment));
    }
}
