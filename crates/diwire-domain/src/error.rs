//! Error handling types

use crate::value_objects::TokenId;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal resolution failure
///
/// Any of these aborts the whole resolution run; no partial plan is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An anonymous or structural type was used where a named token identity is required
    #[error("structural type `{type_text}` cannot be used as a dependency key in `{declaration}`")]
    StructuralType {
        /// Qualified name of the offending declaration
        declaration: String,
        /// Textual representation of the offending type
        type_text: String,
    },

    /// The token dependency graph contains a cycle
    #[error("cyclic token dependency: {}", format_chain(.chain))]
    Cycle {
        /// Tokens on the cycle, starting and ending with the same token
        chain: Vec<TokenId>,
    },
}

impl ResolveError {
    /// Create a structural type error
    pub fn structural_type<D: Into<String>, T: Into<String>>(declaration: D, type_text: T) -> Self {
        Self::StructuralType {
            declaration: declaration.into(),
            type_text: type_text.into(),
        }
    }

    /// Create a cycle error from the detected token chain
    pub fn cycle(chain: Vec<TokenId>) -> Self {
        Self::Cycle { chain }
    }
}

fn format_chain(chain: &[TokenId]) -> String {
    chain
        .iter()
        .map(TokenId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Main error type for diwire
#[derive(Error, Debug)]
pub enum Error {
    /// Fatal resolution error
    #[error("Resolution failed: {0}")]
    Resolution(#[from] ResolveError),

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A semantic snapshot is internally inconsistent
    #[error("Invalid snapshot: {message}")]
    InvalidSnapshot {
        /// Description of the inconsistency
        message: String,
    },
}

// Basic error creation methods
impl Error {
    /// Create an invalid snapshot error
    pub fn invalid_snapshot<S: Into<String>>(message: S) -> Self {
        Self::InvalidSnapshot {
            message: message.into(),
        }
    }

    /// Whether this error originates from the resolution pipeline
    pub fn is_resolution(&self) -> bool {
        matches!(self, Self::Resolution(_))
    }
}

// I/O error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
