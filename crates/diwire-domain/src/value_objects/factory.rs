//! Factory value objects

use super::token::TokenId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Declaration shape of a factory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactoryKind {
    /// Class constructed through its constructor
    Class,
    /// Function, callable variable or namespaced callable member
    Function,
}

/// Instantiation policy of a factory
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifecycle {
    /// New instance per resolution
    #[default]
    Transient,
    /// One instance per container
    Singleton,
    /// One instance per logical scope
    Scoped,
}

impl Lifecycle {
    /// Parse a lifecycle name, case-insensitively
    ///
    /// # Example
    ///
    /// ```
    /// use diwire_domain::value_objects::Lifecycle;
    ///
    /// assert_eq!(Lifecycle::parse("Singleton"), Some(Lifecycle::Singleton));
    /// assert_eq!(Lifecycle::parse("eternal"), None);
    /// ```
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "transient" => Some(Self::Transient),
            "singleton" => Some(Self::Singleton),
            "scoped" => Some(Self::Scoped),
            _ => None,
        }
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transient => write!(f, "transient"),
            Self::Singleton => write!(f, "singleton"),
            Self::Scoped => write!(f, "scoped"),
        }
    }
}

/// Interfaces a type realizes and the tokens of its generic arguments
///
/// Both lists are de-duplicated and keep first-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeMetadata {
    /// Tokens of realized interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<TokenId>,

    /// Tokens of generic arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub generics: Vec<TokenId>,
}

impl TypeMetadata {
    /// Whether neither list has entries
    pub fn is_empty(&self) -> bool {
        self.implements.is_empty() && self.generics.is_empty()
    }

    /// Every referenced token, implements first
    pub fn references(&self) -> impl Iterator<Item = &TokenId> {
        self.implements.iter().chain(self.generics.iter())
    }
}

/// A declaration that produces an instance of a token's type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factory {
    /// Qualified declaration name
    pub name: String,

    /// Class or function
    pub kind: FactoryKind,

    /// File the factory is declared in
    pub declaring_module_path: PathBuf,

    /// Dependency tokens, one per non-primitive parameter in declaration order
    pub deps: Vec<TokenId>,

    /// Display name of the produced type
    pub produced_type: String,

    /// Token of the produced type
    pub produced_token: TokenId,

    /// Per-factory token derived from the factory name
    pub own_token: TokenId,

    /// Whether the produced type is a multi-cardinality service
    pub multi: bool,

    /// Instantiation policy
    pub lifecycle: Lifecycle,

    /// Module partition
    pub module: String,

    /// Reflective metadata, attached after factory resolution
    #[serde(default)]
    pub metadata: TypeMetadata,
}
