//! Tracing Diagnostic Sink Tests

use diwire_domain::ports::DiagnosticSink;
use diwire_domain::value_objects::Diagnostic;
use diwire_infrastructure::TracingDiagnosticSink;

#[test]
fn test_tracing_sink_counts_by_severity() {
    let mut sink = TracingDiagnosticSink::new();
    sink.report(&Diagnostic::unresolvable_callable("makeCache", "src/cache.ts"));
    sink.report(&Diagnostic::unknown_lifecycle("makeQueue", "src/queue.ts", "forever"));
    sink.report(&Diagnostic::ignored_annotation("Queue", "src/queue.ts", "injectable"));

    assert_eq!(sink.warnings(), 2);
    assert_eq!(sink.infos(), 1);
}
