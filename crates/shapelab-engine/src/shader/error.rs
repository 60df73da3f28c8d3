use std::fmt;

/// Pipeline stage a diagnostic belongs to.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// A compile or link diagnostic.
///
/// These are reported, never propagated: a program with errors still exists.
#[derive(Debug, Clone, PartialEq)]
pub enum ShaderError {
    /// One stage failed to parse or validate on its own.
    Compile { stage: ShaderStage, message: String },
    /// Both stages compiled but do not fit together (or do not fit the
    /// vertex/uniform layout the draw layer binds).
    Link { message: String },
}

impl ShaderError {
    pub(crate) fn link(message: impl Into<String>) -> Self {
        Self::Link { message: message.into() }
    }

    pub fn stage(&self) -> Option<ShaderStage> {
        match self {
            ShaderError::Compile { stage, .. } => Some(*stage),
            ShaderError::Link { .. } => None,
        }
    }
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Compile { stage, message } => {
                write!(f, "{stage} shader failed to compile: {message}")
            }
            ShaderError::Link { message } => write!(f, "program failed to link: {message}"),
        }
    }
}

impl std::error::Error for ShaderError {}
