//! Resolver configuration value objects
//!
//! These are the only knobs the resolution core reads. They are embedded in
//! the application configuration and loaded by the infrastructure layer.

use crate::constants::{
    DEFAULT_MODULE, DEFAULT_TOKEN_SUFFIX, INJECTABLE_TAG, LIFECYCLE_TAG, MODULE_TAG,
    MULTI_KEYWORD, SERVICE_TAG,
};
use serde::{Deserialize, Serialize};

/// Tag names recognised during annotation normalisation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationTags {
    /// Service marker tag
    pub service: String,

    /// Service payload keyword selecting multi cardinality
    pub multi_keyword: String,

    /// Factory marker tag
    pub injectable: String,

    /// Lifecycle tag
    pub lifecycle: String,

    /// Module tag
    pub module: String,
}

impl Default for AnnotationTags {
    fn default() -> Self {
        Self {
            service: SERVICE_TAG.to_string(),
            multi_keyword: MULTI_KEYWORD.to_string(),
            injectable: INJECTABLE_TAG.to_string(),
            lifecycle: LIFECYCLE_TAG.to_string(),
            module: MODULE_TAG.to_string(),
        }
    }
}

/// Resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Module assigned to factories without a module annotation
    pub default_module: String,

    /// Suffix appended to display names to form token ids
    pub token_suffix: String,

    /// Recognised annotation tags
    pub annotations: AnnotationTags,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_module: DEFAULT_MODULE.to_string(),
            token_suffix: DEFAULT_TOKEN_SUFFIX.to_string(),
            annotations: AnnotationTags::default(),
        }
    }
}
