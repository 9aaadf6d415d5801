//! Main application configuration

use super::logging::LoggingConfig;
use super::output::OutputConfig;
use serde::{Deserialize, Serialize};

pub use diwire_domain::value_objects::{AnnotationTags, ResolverConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Resolution settings passed to the core
    pub resolver: ResolverConfig,

    /// Plan output settings
    pub output: OutputConfig,
}
