//! Plan artifact
//!
//! The complete, deterministic output of a resolution run. An external
//! emitter turns it into registration source text.

use super::diagnostic::Diagnostic;
use super::factory::{Factory, TypeMetadata};
use super::token::{Token, TokenId, TokenOrigin};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A token in emission order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedToken {
    /// The token
    #[serde(flatten)]
    pub token: Token,

    /// How the token entered the registry
    pub origin: TokenOrigin,

    /// Realized interfaces and generic arguments
    #[serde(flatten)]
    pub metadata: TypeMetadata,
}

/// A factory together with the token it is registered under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryPlan {
    /// The factory
    #[serde(flatten)]
    pub factory: Factory,

    /// Binding target
    pub target: TokenId,
}

/// One `(token, factory)` registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    /// Token the factory is registered under
    pub token: TokenId,

    /// Qualified factory name
    pub factory: String,
}

/// Ordered registrations of one module partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModulePlan {
    /// Module name
    pub name: String,

    /// Registrations in factory discovery order
    pub bindings: Vec<Binding>,
}

/// The complete resolution artifact
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Tokens in topologically safe emission order
    pub tokens: Vec<PlannedToken>,

    /// Factories in discovery order
    pub factories: Vec<FactoryPlan>,

    /// Module partitions in first-seen order
    pub modules: Vec<ModulePlan>,

    /// Declaring file per token, for import bookkeeping
    pub imports: IndexMap<TokenId, PathBuf>,

    /// Recoverable diagnostics reported during resolution
    pub diagnostics: Vec<Diagnostic>,
}

impl Plan {
    /// Look up a planned token by id
    pub fn token(&self, id: &str) -> Option<&PlannedToken> {
        self.tokens.iter().find(|t| t.token.id.as_str() == id)
    }

    /// Position of a token in emission order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.tokens.iter().position(|t| t.token.id.as_str() == id)
    }

    /// Look up a factory by qualified name
    pub fn factory(&self, name: &str) -> Option<&FactoryPlan> {
        self.factories.iter().find(|f| f.factory.name == name)
    }

    /// Look up a module partition by name
    pub fn module(&self, name: &str) -> Option<&ModulePlan> {
        self.modules.iter().find(|m| m.name == name)
    }

    /// Total number of bindings across modules
    pub fn binding_count(&self) -> usize {
        self.modules.iter().map(|m| m.bindings.len()).sum()
    }
}
