//! Structured logging with tracing
//!
//! Console output always goes to stderr; stdout is reserved for the plan
//! artifact. An optional daily-rolling file receives the same events.

use crate::constants::{LOG_FILE_STEM, LOG_FILTER_ENV};
use diwire_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, debug, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// Re-export LoggingConfig for convenience
pub use crate::config::LoggingConfig;

/// Initialize logging with the provided configuration
///
/// `DIWIRE_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent().unwrap_or_else(|| Path::new(".")),
            path.file_stem().unwrap_or_else(|| OsStr::new(LOG_FILE_STEM)),
        )
    });

    // Layer types differ per format, hence the separate branches
    let installed = if config.json_format {
        let console = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .json()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    } else {
        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false);
        let registry = Registry::default().with(filter);
        if let Some(appender) = file_appender {
            let file = fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true);
            registry.with(console).with(file).try_init()
        } else {
            registry.with(console).try_init()
        }
    };

    installed.map_err(|err| Error::configuration_with_source("failed to install logger", err))?;
    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.trim().to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}

/// Log where the configuration came from
///
/// Call after [`init_logging`]; loading happens before a subscriber exists.
pub fn log_config_loaded(config_path: Option<&Path>) {
    match config_path {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => debug!("No configuration file found, using defaults"),
    }
}
