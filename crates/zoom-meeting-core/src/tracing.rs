//! Tracing setup for zoom-meeting
//!
//! Logs always go to stderr; stdout is reserved for the meeting link.
//!
//! # Usage
//!
//! ```ignore
//! use zoom_meeting_core::tracing::{init_tracing, TracingConfig};
//!
//! init_tracing(TracingConfig::default())?;
//! ```

use thiserror::Error;
use tracing::Level;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Errors that can occur during tracing initialization
#[derive(Debug, Error)]
pub enum TracingError {
    /// Failed to set global subscriber
    #[error("failed to set global tracing subscriber: {0}")]
    SetGlobalSubscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Configuration for tracing initialization
///
/// Output is always the compact single-line format.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// The default log level when RUST_LOG is not set
    pub default_level: Level,
    /// Whether to include file/line information in logs
    pub include_location: bool,
    /// Whether to include target (module path) in logs
    pub include_target: bool,
    /// Whether to include timestamps
    pub include_timestamp: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            default_level: Level::WARN,
            include_location: false,
            include_target: false,
            include_timestamp: false,
        }
    }
}

impl TracingConfig {
    /// Create a config suitable for CLI usage with debug mode
    #[must_use]
    pub fn cli_debug() -> Self {
        Self {
            default_level: Level::DEBUG,
            include_location: true,
            include_target: true,
            include_timestamp: true,
        }
    }

    /// Returns the filter directive used when `RUST_LOG` is not set.
    pub fn default_directive(&self) -> String {
        format!("zoom_meeting={}", self.default_level)
    }
}

/// Initialize tracing with the given configuration.
///
/// This should be called once at the start of the application.
/// The `RUST_LOG` environment variable can be used to override the default level.
///
/// # Errors
///
/// Returns an error if the global subscriber has already been set.
pub fn init_tracing(config: TracingConfig) -> Result<(), TracingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    let layer = fmt::layer()
        .compact()
        .with_writer(std::io::stderr)
        .with_file(config.include_location)
        .with_line_number(config.include_location)
        .with_target(config.include_target);

    let layer = if config.include_timestamp {
        layer.boxed()
    } else {
        layer.without_time().boxed()
    };

    let subscriber = tracing_subscriber::registry().with(env_filter).with(layer);
    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TracingConfig::default();
        assert_eq!(config.default_level, Level::WARN);
        assert!(!config.include_location);
        assert!(!config.include_target);
        assert!(!config.include_timestamp);
        assert_eq!(config.default_directive(), "zoom_meeting=WARN");
    }

    #[test]
    fn test_cli_debug_config() {
        let config = TracingConfig::cli_debug();
        assert_eq!(config.default_level, Level::DEBUG);
        assert!(config.include_location);
        assert!(config.include_timestamp);
        assert_eq!(config.default_directive(), "zoom_meeting=DEBUG");
    }

    #[test]
    fn test_init_tracing_installs_subscriber_once() {
        init_tracing(TracingConfig::cli_debug()).unwrap();
        tracing::debug!("subscriber installed");

        let err = init_tracing(TracingConfig::default()).unwrap_err();
        assert!(matches!(err, TracingError::SetGlobalSubscriber(_)));
    }
}
