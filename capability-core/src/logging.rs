//! Logging initialization.
//!
//! Native builds wire `tracing-subscriber` with an `EnvFilter` so
//! `RUST_LOG` keeps working; wasm builds forward everything to the
//! browser console through `tracing-wasm`.

use capability_bridge::error::{BridgeError, Result};

/// Log output format (native only; the browser console has its own).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable, colored.
    Pretty,
    /// Single-line, for terminals and CI.
    Compact,
    /// Structured JSON for log shippers.
    Json,
}

impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        return Self::Pretty;

        #[cfg(not(debug_assertions))]
        return Self::Compact;
    }
}

/// Logging configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Default filter directive when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            default_filter: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_default_filter(mut self, directive: impl Into<String>) -> Self {
        self.default_filter = directive.into();
        self
    }
}

/// Install the global subscriber. Fails if one is already installed.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|err| {
        BridgeError::OperationFailed(format!("logging already initialized: {err}"))
    })
}

/// Install the browser-console subscriber. Fails if one is already
/// installed.
#[cfg(target_arch = "wasm32")]
pub fn init_logging(_config: LoggingConfig) -> Result<()> {
    tracing_wasm::try_set_as_global_default().map_err(|err| {
        BridgeError::OperationFailed(format!("logging already initialized: {err:?}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = LoggingConfig::default()
            .with_format(LogFormat::Json)
            .with_default_filter("capability_core=debug");

        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.default_filter, "capability_core=debug");
    }
}
