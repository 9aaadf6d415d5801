//! Immutable semantic snapshot
//!
//! `SourceSnapshot` is the serialisable form a front end exports after
//! parsing and type-checking a codebase. It answers every
//! [`SemanticOracle`] query from two tables: types and declarations.

mod builder;

pub use builder::SnapshotBuilder;

use crate::error::{Error, Result};
use crate::ports::SemanticOracle;
use crate::value_objects::{Declaration, Signature, TypeId, TypeSymbol};
use serde::{Deserialize, Serialize};

/// One entry of the type table, addressed by its position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeEntry {
    /// Textual representation including generic arguments
    pub text: String,

    /// Named symbol, absent for anonymous and primitive types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<TypeSymbol>,

    /// Generic type arguments
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<TypeId>,

    /// Extended or implemented base types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bases: Vec<TypeId>,

    /// Call signatures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signatures: Vec<Signature>,
}

impl TypeEntry {
    /// Entry with text only
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            symbol: None,
            arguments: Vec::new(),
            bases: Vec::new(),
            signatures: Vec::new(),
        }
    }
}

/// Immutable semantic snapshot of a codebase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceSnapshot {
    /// Type table
    #[serde(default)]
    pub types: Vec<TypeEntry>,

    /// Declarations in discovery order
    #[serde(default)]
    pub declarations: Vec<Declaration>,
}

impl SourceSnapshot {
    /// Parse a snapshot from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check that every type reference points into the type table
    pub fn validate(&self) -> Result<()> {
        let count = self.types.len();
        let check = |ty: TypeId, site: &dyn Fn() -> String| -> Result<()> {
            if ty.index() < count {
                Ok(())
            } else {
                Err(Error::invalid_snapshot(format!(
                    "{} references unknown type {ty} (table has {count} entries)",
                    site()
                )))
            }
        };

        for (idx, entry) in self.types.iter().enumerate() {
            let site = || format!("type #{idx} `{}`", entry.text);
            for &ty in entry.arguments.iter().chain(entry.bases.iter()) {
                check(ty, &site)?;
            }
            for signature in &entry.signatures {
                check(signature.returns, &site)?;
                for param in &signature.parameters {
                    check(param.ty, &site)?;
                }
            }
        }

        for decl in &self.declarations {
            let site = || format!("declaration `{}`", decl.qualified_name());
            if decl.name.trim().is_empty() {
                return Err(Error::invalid_snapshot("declaration with an empty name"));
            }
            check(decl.ty, &site)?;
            if let Some(target) = decl.aliased {
                check(target, &site)?;
            }
            for param in &decl.parameters {
                check(param.ty, &site)?;
            }
        }
        Ok(())
    }

    fn entry(&self, ty: TypeId) -> Option<&TypeEntry> {
        self.types.get(ty.index())
    }
}

impl SemanticOracle for SourceSnapshot {
    fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    fn symbol(&self, ty: TypeId) -> Option<&TypeSymbol> {
        self.entry(ty).and_then(|e| e.symbol.as_ref())
    }

    fn type_text(&self, ty: TypeId) -> &str {
        self.entry(ty).map_or("", |e| e.text.as_str())
    }

    fn type_arguments(&self, ty: TypeId) -> &[TypeId] {
        self.entry(ty)
            .map(|e| e.arguments.as_slice())
            .unwrap_or_default()
    }

    fn base_types(&self, ty: TypeId) -> &[TypeId] {
        self.entry(ty)
            .map(|e| e.bases.as_slice())
            .unwrap_or_default()
    }

    fn call_signatures(&self, ty: TypeId) -> &[Signature] {
        self.entry(ty)
            .map(|e| e.signatures.as_slice())
            .unwrap_or_default()
    }
}
