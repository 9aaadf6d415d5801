//! Domain Port Interfaces
//!
//! Boundary contracts between the resolution core and the outer layers.
//!
//! - **oracle** - semantic queries over source declarations and types
//! - **diagnostics** - where recoverable diagnostics are delivered

/// Diagnostic sink port
pub mod diagnostics;
/// Semantic oracle port
pub mod oracle;

pub use diagnostics::{DiagnosticSink, NullSink};
pub use oracle::{SemanticOracle, strip_generic_arguments};
