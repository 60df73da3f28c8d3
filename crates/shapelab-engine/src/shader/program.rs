use std::num::NonZeroU32;
use std::sync::atomic::{AtomicU32, Ordering};

use super::check::check_program;
use super::error::ShaderError;
use super::source::ProgramSource;

const FALLBACK_VS: &str = include_str!("wgsl/fallback_vs.wgsl");
const FALLBACK_FS: &str = include_str!("wgsl/fallback_fs.wgsl");

static NEXT_PROGRAM_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque program handle. Never zero, unique per process.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct ProgramId(NonZeroU32);

impl ProgramId {
    fn next() -> Self {
        let raw = NEXT_PROGRAM_ID.fetch_add(1, Ordering::Relaxed);
        // Counter starts at 1.
        Self(NonZeroU32::new(raw).unwrap_or(NonZeroU32::MIN))
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

/// Outcome of compiling and linking a program.
#[derive(Debug, Clone, PartialEq)]
pub enum ProgramStatus {
    Linked,
    /// Diagnostics in the order they were found. The program renders with the
    /// fallback pair.
    Failed(Vec<ShaderError>),
}

impl ProgramStatus {
    #[inline]
    pub fn is_linked(&self) -> bool {
        matches!(self, ProgramStatus::Linked)
    }

    pub fn errors(&self) -> &[ShaderError] {
        match self {
            ProgramStatus::Linked => &[],
            ProgramStatus::Failed(errors) => errors,
        }
    }
}

/// A compiled vertex + fragment pair.
pub struct ShaderProgram {
    id: ProgramId,
    label: String,
    vertex: wgpu::ShaderModule,
    fragment: wgpu::ShaderModule,
    status: ProgramStatus,
}

impl ShaderProgram {
    #[inline]
    pub fn id(&self) -> ProgramId {
        self.id
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn status(&self) -> &ProgramStatus {
        &self.status
    }

    #[inline]
    pub fn is_linked(&self) -> bool {
        self.status.is_linked()
    }

    /// Module holding `vs_main`. For a failed program this is the fallback.
    #[inline]
    pub fn vertex_module(&self) -> &wgpu::ShaderModule {
        &self.vertex
    }

    /// Module holding `fs_main`. For a failed program this is the fallback.
    #[inline]
    pub fn fragment_module(&self) -> &wgpu::ShaderModule {
        &self.fragment
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Compiles both stages and links them into a program.
///
/// Never fails. Every diagnostic is logged at error level and the returned
/// program draws solid black; rendering continues.
pub fn compile_program(device: &wgpu::Device, source: &ProgramSource) -> ShaderProgram {
    let id = ProgramId::next();
    let status = check_program(source);

    let (vs_text, fs_text) = match &status {
        ProgramStatus::Linked => {
            log::debug!("program \"{}\" ({}) linked", source.label(), id.get());
            (source.vertex(), source.fragment())
        }
        ProgramStatus::Failed(errors) => {
            for err in errors {
                log::error!("program \"{}\": {err}", source.label());
            }
            log::warn!(
                "program \"{}\" ({}) falls back to solid black",
                source.label(),
                id.get()
            );
            (FALLBACK_VS, FALLBACK_FS)
        }
    };

    let vertex = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{} vertex", source.label())),
        source: wgpu::ShaderSource::Wgsl(vs_text.into()),
    });
    let fragment = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(&format!("{} fragment", source.label())),
        source: wgpu::ShaderSource::Wgsl(fs_text.into()),
    });

    ShaderProgram {
        id,
        label: source.label().to_string(),
        vertex,
        fragment,
        status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shader::ShaderStage;

    #[test]
    fn program_ids_are_nonzero_and_unique() {
        let a = ProgramId::next();
        let b = ProgramId::next();
        assert_ne!(a.get(), 0);
        assert_ne!(b.get(), 0);
        assert_ne!(a, b);
    }

    #[test]
    fn status_exposes_errors() {
        assert!(ProgramStatus::Linked.errors().is_empty());

        let failed = ProgramStatus::Failed(vec![ShaderError::Compile {
            stage: ShaderStage::Fragment,
            message: "boom".into(),
        }]);
        assert!(!failed.is_linked());
        assert_eq!(failed.errors().len(), 1);
    }
}
