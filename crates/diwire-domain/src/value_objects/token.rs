//! Token value objects
//!
//! A token is the dependency-injection key for one named type. Its id is
//! derived from the display name and never changes once minted.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable token identifier, e.g. `LoggerToken`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenId(String);

impl TokenId {
    /// Wrap an already-formed token id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the token id for a display name
    ///
    /// # Example
    ///
    /// ```
    /// use diwire_domain::value_objects::TokenId;
    ///
    /// let id = TokenId::derive("Logger", "Token");
    /// assert_eq!(id.as_str(), "LoggerToken");
    /// ```
    pub fn derive(display_name: &str, suffix: &str) -> Self {
        Self(format!("{display_name}{suffix}"))
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TokenId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Whether a token admits exactly one implementation or many
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cardinality {
    /// Exactly one implementation binds the token
    #[default]
    Single,
    /// Every implementation receives its own per-factory token
    Multi,
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single => write!(f, "single"),
            Self::Multi => write!(f, "multi"),
        }
    }
}

/// How a token entered the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenOrigin {
    /// Explicitly annotated as a service
    Annotated,
    /// Inherited through aliasing or extension of a tokenized type
    AutoDetected,
    /// Required as a parameter, produced type or generic argument
    Implicit,
    /// Synthetic per-factory token of a multi-implementation
    Factory,
}

/// Dependency-injection key for a named type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Unique identifier
    pub id: TokenId,

    /// Name of the type (or factory) the token stands for
    pub display_name: String,

    /// Cardinality, fixed at mint time
    pub cardinality: Cardinality,
}

impl Token {
    /// Mint a token for a display name
    pub fn new(display_name: impl Into<String>, suffix: &str, cardinality: Cardinality) -> Self {
        let display_name = display_name.into();
        Self {
            id: TokenId::derive(&display_name, suffix),
            display_name,
            cardinality,
        }
    }

    /// Whether the token is multi-cardinality
    pub fn is_multi(&self) -> bool {
        self.cardinality == Cardinality::Multi
    }
}
