//! Logging utilities.
//!
//! One place to install the `env_logger` backend behind the `log` facade.
//! Shader diagnostics, GPU selection and teardown all report through it.

mod init;

pub use init::{init_logging, resolve_filter, LoggingConfig};
