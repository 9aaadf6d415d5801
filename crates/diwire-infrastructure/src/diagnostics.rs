//! Diagnostic sink forwarding to tracing

use diwire_domain::ports::DiagnosticSink;
use diwire_domain::value_objects::{Diagnostic, Severity};
use tracing::{info, warn};

/// Logs each diagnostic at its severity and counts them
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnosticSink {
    warnings: usize,
    infos: usize,
}

impl TracingDiagnosticSink {
    /// Create a sink with zero counts
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of warnings reported
    pub fn warnings(&self) -> usize {
        self.warnings
    }

    /// Number of informational diagnostics reported
    pub fn infos(&self) -> usize {
        self.infos
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        let code = diagnostic.kind.code();
        let file = diagnostic.file.display();
        match diagnostic.severity {
            Severity::Warning => {
                self.warnings += 1;
                warn!(code, declaration = %diagnostic.declaration, %file, "{}", diagnostic.message);
            }
            Severity::Info => {
                self.infos += 1;
                info!(code, declaration = %diagnostic.declaration, %file, "{}", diagnostic.message);
            }
        }
    }
}
