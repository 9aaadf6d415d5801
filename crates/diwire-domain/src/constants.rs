//! Domain layer constants
//!
//! Contains constants that are part of the resolution rules. Infrastructure
//! constants (config file names, env prefixes) live in
//! `diwire_infrastructure::constants`.

// ============================================================================
// TOKEN CONSTANTS
// ============================================================================

/// Suffix appended to a type's display name to form its token id
pub const DEFAULT_TOKEN_SUFFIX: &str = "Token";

/// Module a factory belongs to when it carries no module annotation
pub const DEFAULT_MODULE: &str = "default";

/// Type names that never become dependency tokens
pub const PRIMITIVE_TYPES: &[&str] = &["string", "number", "boolean", "any", "void", "unknown"];

// ============================================================================
// ANNOTATION CONSTANTS
// ============================================================================

/// Tag marking a type as a service
pub const SERVICE_TAG: &str = "service";

/// Payload keyword on the service tag selecting multi cardinality
pub const MULTI_KEYWORD: &str = "multi";

/// Tag marking a declaration as a factory
pub const INJECTABLE_TAG: &str = "injectable";

/// Tag carrying a lifecycle payload
pub const LIFECYCLE_TAG: &str = "lifecycle";

/// Tag carrying the module partition name
pub const MODULE_TAG: &str = "module";
