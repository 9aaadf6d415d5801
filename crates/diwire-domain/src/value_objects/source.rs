//! Source declarations and type references
//!
//! This is the vocabulary the semantic oracle speaks: exported declarations
//! with their raw annotations, and opaque [`TypeId`] handles that the oracle
//! can be queried about.

use super::annotation::RawAnnotation;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Opaque handle to a type known to the semantic oracle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Position of the type in a snapshot's type table
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What kind of symbol names a type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    /// Interface declaration
    Interface,
    /// Class declaration
    Class,
    /// Type alias declaration
    TypeAlias,
    /// Generic type parameter
    TypeParameter,
    /// Enum declaration
    Enum,
    /// Any other named symbol
    Other,
}

/// The symbol behind a named type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSymbol {
    /// Symbol name without generic arguments
    pub name: String,

    /// Symbol kind
    pub kind: SymbolKind,

    /// File the symbol is declared in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Declaration kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    /// `interface` declaration
    Interface,
    /// `type` alias declaration
    TypeAlias,
    /// `class` declaration
    Class,
    /// Function declaration
    Function,
    /// Variable holding a callable
    Variable,
}

impl DeclarationKind {
    /// Interfaces and aliases, the candidates for token auto-detection
    pub fn is_type_like(self) -> bool {
        matches!(self, Self::Interface | Self::TypeAlias)
    }
}

/// A named parameter of a call or construct signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Parameter name
    pub name: String,

    /// Parameter type
    #[serde(rename = "type")]
    pub ty: TypeId,
}

impl Parameter {
    /// Create a parameter
    pub fn new(name: impl Into<String>, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// One call signature of a callable type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<Parameter>,

    /// Return type
    pub returns: TypeId,
}

/// An exported (or not) top-level or namespaced declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Local name
    pub name: String,

    /// Enclosing namespace for namespaced members
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Declaration kind
    pub kind: DeclarationKind,

    /// Whether the declaration is exported from its module
    #[serde(default = "default_exported")]
    pub exported: bool,

    /// Declaring file
    #[serde(default)]
    pub file: PathBuf,

    /// Raw annotation tags in source order
    #[serde(default)]
    pub annotations: Vec<RawAnnotation>,

    /// Declared type: the instance type for classes and interfaces, the value
    /// type for functions and variables, the alias reference for aliases
    #[serde(rename = "type")]
    pub ty: TypeId,

    /// Target type of a type alias
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliased: Option<TypeId>,

    /// Constructor parameters of a class
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
}

fn default_exported() -> bool {
    true
}

impl Declaration {
    /// Create an exported declaration
    pub fn new(name: impl Into<String>, kind: DeclarationKind, ty: TypeId) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            kind,
            exported: true,
            file: PathBuf::new(),
            annotations: Vec::new(),
            ty,
            aliased: None,
            parameters: Vec::new(),
        }
    }

    /// Interface declaration
    pub fn interface(name: impl Into<String>, ty: TypeId) -> Self {
        Self::new(name, DeclarationKind::Interface, ty)
    }

    /// Type alias declaration aliasing `target`
    pub fn type_alias(name: impl Into<String>, ty: TypeId, target: TypeId) -> Self {
        let mut decl = Self::new(name, DeclarationKind::TypeAlias, ty);
        decl.aliased = Some(target);
        decl
    }

    /// Class declaration
    pub fn class(name: impl Into<String>, ty: TypeId) -> Self {
        Self::new(name, DeclarationKind::Class, ty)
    }

    /// Function declaration with callable type `ty`
    pub fn function(name: impl Into<String>, ty: TypeId) -> Self {
        Self::new(name, DeclarationKind::Function, ty)
    }

    /// Variable declaration with value type `ty`
    pub fn variable(name: impl Into<String>, ty: TypeId) -> Self {
        Self::new(name, DeclarationKind::Variable, ty)
    }

    /// Set the declaring file
    pub fn in_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = file.into();
        self
    }

    /// Place the declaration inside a namespace
    pub fn in_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Add a tag without payload
    pub fn annotated(mut self, tag: impl Into<String>) -> Self {
        self.annotations.push(RawAnnotation::new(tag));
        self
    }

    /// Add a tag with payload
    pub fn annotated_with(mut self, tag: impl Into<String>, text: impl Into<String>) -> Self {
        self.annotations.push(RawAnnotation::with_text(tag, text));
        self
    }

    /// Set class constructor parameters
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Mark the declaration as not exported
    pub fn unexported(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Name including the namespace, e.g. `Http.createClient`
    pub fn qualified_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }

    /// Type walked for reflective metadata: the alias target for aliases
    pub fn subject_type(&self) -> TypeId {
        self.aliased.unwrap_or(self.ty)
    }
}
