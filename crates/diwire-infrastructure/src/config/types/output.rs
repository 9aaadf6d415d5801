//! Plan output configuration types

use crate::constants::DEFAULT_PRETTY_OUTPUT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where and how the plan artifact is written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Indent the JSON artifact
    pub pretty: bool,

    /// Destination file; stdout when unset
    pub path: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: DEFAULT_PRETTY_OUTPUT,
            path: None,
        }
    }
}
