//! Logging setup for applications built on the ConnectBox client
//!
//! The library itself only emits `tracing` events. Call [`init_logging`] once
//! from the application to install a subscriber; leave it out (or use
//! [`LoggingMode::Silent`]) to keep the output clean.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Environment variable overriding the log filter, e.g. `connectbox=debug`.
pub const LOG_LEVEL_ENV: &str = "CONNECTBOX_LOG_LEVEL";

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No subscriber is installed
    Silent,
    /// Compact stderr output at `info`
    Development,
    /// Verbose output at `debug` with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to initialize tracing subscriber: {0}")]
    TracingInit(String),

    #[error("invalid log filter {value:?}: {reason}")]
    InvalidFilter { value: String, reason: String },
}

/// Initialize logging with the specified mode
///
/// # Examples
///
/// ```rust,ignore
/// connectbox::logging::init_logging(LoggingMode::Development)?;
/// ```
///
/// # Environment Variables
///
/// - `CONNECTBOX_LOG_LEVEL`: filter directive replacing the mode's default level
/// - `RUST_LOG`: used when `CONNECTBOX_LOG_LEVEL` is not set
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => {
            let filter = create_env_filter("info")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_file(false)
                        .with_line_number(false)
                        .compact(),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
        LoggingMode::Debug => {
            let filter = create_env_filter("debug")?;

            Registry::default()
                .with(
                    fmt::layer()
                        .pretty()
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
                .map_err(|e| LoggingError::TracingInit(e.to_string()))
        }
    }
}

/// Check if a global subscriber has already been installed
pub fn is_initialized() -> bool {
    tracing::dispatcher::has_been_set()
}

fn create_env_filter(default_level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var(LOG_LEVEL_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| default_level.to_string());
    parse_filter(&directive)
}

fn parse_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        value: directive.to_string(),
        reason: e.to_string(),
    })
}
