use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "shapelab_engine=debug,wgpu_core=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

/// Level used when neither the config nor `RUST_LOG` name a filter.
///
/// wgpu is chatty at info level, so its crates are held at warn.
const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn,naga=warn";

static INIT: Once = Once::new();

/// Picks the filter string: explicit config first, then `RUST_LOG`, then the default.
pub fn resolve_filter(config: &LoggingConfig, rust_log: Option<&str>) -> String {
    config
        .env_filter
        .as_deref()
        .or(rust_log)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call it first thing in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = resolve_filter(&config, rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);

        // try_init: a test harness may already have installed a logger.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized with filter `{filter}`");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins_over_env() {
        let cfg = LoggingConfig {
            env_filter: Some("debug".into()),
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_filter(&cfg, Some("warn")), "debug");
    }

    #[test]
    fn env_used_when_config_is_empty() {
        assert_eq!(resolve_filter(&LoggingConfig::default(), Some("trace")), "trace");
    }

    #[test]
    fn blank_env_falls_back_to_default() {
        assert_eq!(resolve_filter(&LoggingConfig::default(), Some("  ")), DEFAULT_FILTER);
        assert_eq!(resolve_filter(&LoggingConfig::default(), None), DEFAULT_FILTER);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::default());
        init_logging(LoggingConfig::default());
    }
}
