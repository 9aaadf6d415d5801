//! Recoverable diagnostics
//!
//! A diagnostic never aborts resolution: the offending declaration is
//! omitted (or defaulted) and the run continues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Something was skipped or defaulted
    Warning,
    /// Informational only
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
        }
    }
}

/// Kind of recoverable condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Callable factory without a resolvable call signature; skipped
    UnresolvableCallable,
    /// Lifecycle payload naming no known lifecycle; defaulted
    UnknownLifecycle,
    /// Factory producing a primitive or type parameter; skipped
    UnbindableProduct,
    /// Injectable tag on a declaration that cannot act as a factory; ignored
    IgnoredAnnotation,
}

impl DiagnosticKind {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnresolvableCallable => "DI001",
            Self::UnknownLifecycle => "DI002",
            Self::UnbindableProduct => "DI003",
            Self::IgnoredAnnotation => "DI004",
        }
    }
}

/// A recoverable condition attached to one declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// What happened
    pub kind: DiagnosticKind,

    /// How serious it is
    pub severity: Severity,

    /// Qualified name of the declaration
    pub declaration: String,

    /// File the declaration lives in
    pub file: PathBuf,

    /// Human-readable message
    pub message: String,
}

impl Diagnostic {
    /// Callable factory without a call signature
    pub fn unresolvable_callable(declaration: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        let declaration = declaration.into();
        Self {
            kind: DiagnosticKind::UnresolvableCallable,
            severity: Severity::Warning,
            message: format!("`{declaration}` has no resolvable call signature; skipped"),
            declaration,
            file: file.into(),
        }
    }

    /// Unknown lifecycle payload
    pub fn unknown_lifecycle(
        declaration: impl Into<String>,
        file: impl Into<PathBuf>,
        value: &str,
    ) -> Self {
        let declaration = declaration.into();
        Self {
            kind: DiagnosticKind::UnknownLifecycle,
            severity: Severity::Warning,
            message: format!(
                "`{declaration}` declares unknown lifecycle `{value}`; using transient"
            ),
            declaration,
            file: file.into(),
        }
    }

    /// Factory whose produced type cannot carry a token
    pub fn unbindable_product(
        declaration: impl Into<String>,
        file: impl Into<PathBuf>,
        type_text: &str,
    ) -> Self {
        let declaration = declaration.into();
        Self {
            kind: DiagnosticKind::UnbindableProduct,
            severity: Severity::Warning,
            message: format!("`{declaration}` produces `{type_text}`, which cannot be bound; skipped"),
            declaration,
            file: file.into(),
        }
    }

    /// Injectable tag on a type declaration
    pub fn ignored_annotation(
        declaration: impl Into<String>,
        file: impl Into<PathBuf>,
        tag: &str,
    ) -> Self {
        let declaration = declaration.into();
        Self {
            kind: DiagnosticKind::IgnoredAnnotation,
            severity: Severity::Info,
            message: format!("`@{tag}` has no effect on type declaration `{declaration}`"),
            declaration,
            file: file.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.kind.code(),
            self.severity,
            self.file.display(),
            self.message
        )
    }
}
