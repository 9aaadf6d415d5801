//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Resolution constants are defined in `diwire_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "diwire.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "diwire";

/// Environment variable prefix for configuration (`DIWIRE__RESOLVER__TOKEN_SUFFIX`)
pub const CONFIG_ENV_PREFIX: &str = "DIWIRE";

/// Separator between the prefix and nested configuration keys
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DIWIRE_LOG";

/// Fallback file stem for rolling log files
pub const LOG_FILE_STEM: &str = "diwire";

// ============================================================================
// OUTPUT CONSTANTS
// ============================================================================

/// Pretty-print plans by default
pub const DEFAULT_PRETTY_OUTPUT: bool = true;
