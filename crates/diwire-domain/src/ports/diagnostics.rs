//! Diagnostic sink port

use crate::value_objects::Diagnostic;

/// Receives recoverable diagnostics as the pipeline driver drains them
///
/// Resolution passes never report directly; they record diagnostics in the
/// resolution context and the driver forwards them after each pass.
pub trait DiagnosticSink {
    /// Report one diagnostic
    fn report(&mut self, diagnostic: &Diagnostic);
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn report(&mut self, _diagnostic: &Diagnostic) {}
}
