//! Programmatic snapshot construction

use super::{SourceSnapshot, TypeEntry};
use crate::value_objects::{Declaration, Parameter, Signature, SymbolKind, TypeId, TypeSymbol};
use std::path::PathBuf;

/// Builds a [`SourceSnapshot`] type by type
///
/// Every constructor returns the [`TypeId`] of the entry it appended.
///
/// # Example
///
/// ```
/// use diwire_domain::value_objects::{Declaration, SymbolKind};
/// use diwire_domain::SnapshotBuilder;
///
/// let mut builder = SnapshotBuilder::new();
/// let logger = builder.named("Logger", SymbolKind::Interface, "src/logger.ts");
/// let create = builder.callable(vec![], logger);
/// builder
///     .declare(Declaration::interface("Logger", logger).in_file("src/logger.ts").annotated("service"))
///     .declare(Declaration::function("createLogger", create).in_file("src/logger.ts").annotated("injectable"));
///
/// let snapshot = builder.build();
/// assert_eq!(snapshot.declarations.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SnapshotBuilder {
    types: Vec<TypeEntry>,
    declarations: Vec<Declaration>,
}

impl SnapshotBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: TypeEntry) -> TypeId {
        let id = TypeId(u32::try_from(self.types.len()).unwrap_or(u32::MAX));
        self.types.push(entry);
        id
    }

    /// Primitive type such as `string`
    pub fn primitive(&mut self, name: &str) -> TypeId {
        self.push(TypeEntry::new(name))
    }

    /// Named type declared in `file`
    pub fn named(&mut self, name: &str, kind: SymbolKind, file: impl Into<PathBuf>) -> TypeId {
        let mut entry = TypeEntry::new(name);
        entry.symbol = Some(TypeSymbol {
            name: name.to_string(),
            kind,
            file: Some(file.into()),
        });
        self.push(entry)
    }

    /// Generic type parameter such as `T`
    pub fn type_parameter(&mut self, name: &str) -> TypeId {
        let mut entry = TypeEntry::new(name);
        entry.symbol = Some(TypeSymbol {
            name: name.to_string(),
            kind: SymbolKind::TypeParameter,
            file: None,
        });
        self.push(entry)
    }

    /// Anonymous structural type, e.g. `{ port: number }`
    pub fn anonymous(&mut self, text: &str) -> TypeId {
        self.push(TypeEntry::new(text))
    }

    /// Instantiation of a generic type, e.g. `Store<User>`
    ///
    /// The instantiation shares the generic type's symbol and copies its
    /// current base types.
    pub fn instantiate(&mut self, generic: TypeId, arguments: &[TypeId]) -> TypeId {
        let base = self.types.get(generic.index()).cloned();
        let (head, symbol, bases) = match base {
            Some(entry) => (entry.text, entry.symbol, entry.bases),
            None => (String::new(), None, Vec::new()),
        };
        let args = arguments
            .iter()
            .map(|a| self.text(*a))
            .collect::<Vec<_>>()
            .join(", ");
        let mut entry = TypeEntry::new(format!("{head}<{args}>"));
        entry.symbol = symbol;
        entry.arguments = arguments.to_vec();
        entry.bases = bases;
        self.push(entry)
    }

    /// Anonymous callable type with a single call signature
    pub fn callable(&mut self, parameters: Vec<Parameter>, returns: TypeId) -> TypeId {
        let params = parameters
            .iter()
            .map(|p| format!("{}: {}", p.name, self.text(p.ty)))
            .collect::<Vec<_>>()
            .join(", ");
        let mut entry = TypeEntry::new(format!("({params}) => {}", self.text(returns)));
        entry.signatures.push(Signature {
            parameters,
            returns,
        });
        self.push(entry)
    }

    /// Replace the base types of an existing entry
    pub fn set_bases(&mut self, ty: TypeId, bases: &[TypeId]) -> &mut Self {
        if let Some(entry) = self.types.get_mut(ty.index()) {
            entry.bases = bases.to_vec();
        }
        self
    }

    /// Append a call signature to an existing entry
    pub fn add_signature(&mut self, ty: TypeId, signature: Signature) -> &mut Self {
        if let Some(entry) = self.types.get_mut(ty.index()) {
            entry.signatures.push(signature);
        }
        self
    }

    /// Append a declaration
    pub fn declare(&mut self, declaration: Declaration) -> &mut Self {
        self.declarations.push(declaration);
        self
    }

    /// Text of an already-built type
    pub fn text(&self, ty: TypeId) -> String {
        self.types
            .get(ty.index())
            .map(|e| e.text.clone())
            .unwrap_or_default()
    }

    /// Finish the snapshot
    pub fn build(self) -> SourceSnapshot {
        SourceSnapshot {
            types: self.types,
            declarations: self.declarations,
        }
    }
}
