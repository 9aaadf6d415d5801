//! Domain Value Objects
//!
//! Immutable value objects produced and consumed by the resolution pipeline.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`Token`] | Stable dependency-injection key for a named type |
//! | [`Factory`] | Declaration producing an instance of a token's type |
//! | [`Annotations`] | Structured form of a declaration's annotation tags |
//! | [`Diagnostic`] | Recoverable condition reported during resolution |
//! | [`Plan`] | The complete resolution artifact |
//! | [`Declaration`] | An exported declaration as seen by the semantic oracle |

/// Annotation value objects
pub mod annotation;
/// Resolver configuration value objects
pub mod config;
/// Recoverable diagnostics
pub mod diagnostic;
/// Factory value objects
pub mod factory;
/// Plan artifact
pub mod plan;
/// Source declarations and type references
pub mod source;
/// Token value objects
pub mod token;

pub use annotation::{Annotation, AnnotationKind, Annotations, RawAnnotation};
pub use config::{AnnotationTags, ResolverConfig};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use factory::{Factory, FactoryKind, Lifecycle, TypeMetadata};
pub use plan::{Binding, FactoryPlan, ModulePlan, Plan, PlannedToken};
pub use source::{
    Declaration, DeclarationKind, Parameter, Signature, SymbolKind, TypeId, TypeSymbol,
};
pub use token::{Cardinality, Token, TokenId, TokenOrigin};
