//! Annotation value objects
//!
//! Declarations arrive with raw `(tag, text)` pairs. Before any resolution
//! pass runs they are normalised once into [`Annotations`], and every pass
//! reads the structured form only.

use super::factory::Lifecycle;
use super::token::Cardinality;
use serde::{Deserialize, Serialize};

/// Annotation tag exactly as reported by the semantic oracle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawAnnotation {
    /// Tag name without the leading marker, e.g. `service`
    pub tag: String,

    /// Free text following the tag, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl RawAnnotation {
    /// Create a tag without payload
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
        }
    }

    /// Create a tag with a free-text payload
    pub fn with_text(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
        }
    }

    /// Payload with surrounding whitespace removed, `None` when blank
    pub fn payload(&self) -> Option<&str> {
        self.text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}

/// Recognised annotation tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Service type marker with optional cardinality payload
    Service,
    /// Factory marker
    Injectable,
    /// Lifecycle, either as payload or as a shorthand tag
    Lifecycle,
    /// Module partition name
    Module,
}

/// One recognised tag with its trimmed payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Which tag was recognised
    pub kind: AnnotationKind,

    /// Trimmed payload, if any
    pub payload: Option<String>,
}

/// Structured annotations of a single declaration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Recognised tags in source order
    pub entries: Vec<Annotation>,

    /// Service cardinality when the declaration is a service type
    pub service: Option<Cardinality>,

    /// Whether the declaration is a factory
    pub injectable: bool,

    /// Explicit lifecycle
    pub lifecycle: Option<Lifecycle>,

    /// Lifecycle payload that did not name a known lifecycle
    pub invalid_lifecycle: Option<String>,

    /// Explicit module partition
    pub module: Option<String>,
}

impl Annotations {
    /// Whether no recognised tag was found
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a tag of the given kind is present
    pub fn has(&self, kind: AnnotationKind) -> bool {
        self.entries.iter().any(|a| a.kind == kind)
    }
}
