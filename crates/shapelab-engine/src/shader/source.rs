use std::borrow::Cow;

/// Entry point the vertex source must define.
pub const VERTEX_ENTRY: &str = "vs_main";

/// Entry point the fragment source must define.
pub const FRAGMENT_ENTRY: &str = "fs_main";

/// WGSL text for one program: a vertex stage and a fragment stage.
///
/// Built once at startup (usually from `include_str!`) and passed to
/// `compile_program`; never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgramSource {
    label: Cow<'static, str>,
    vertex: Cow<'static, str>,
    fragment: Cow<'static, str>,
}

impl ProgramSource {
    pub fn new(
        label: impl Into<Cow<'static, str>>,
        vertex: impl Into<Cow<'static, str>>,
        fragment: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            label: label.into(),
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[inline]
    pub fn vertex(&self) -> &str {
        &self.vertex
    }

    #[inline]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}
