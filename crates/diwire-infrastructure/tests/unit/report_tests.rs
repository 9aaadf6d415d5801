//! Plan Writer Tests

use diwire_domain::SnapshotBuilder;
use diwire_domain::value_objects::{Declaration, Plan, ResolverConfig, SymbolKind};
use diwire_infrastructure::config::OutputConfig;
use diwire_infrastructure::report::{PlanWriter, summarize};
use tempfile::TempDir;

fn plan() -> Plan {
    let mut b = SnapshotBuilder::new();
    let logger = b.named("Logger", SymbolKind::Interface, "src/logger.ts");
    let create = b.callable(vec![], logger);
    let opaque = b.anonymous("Lazy");
    b.declare(Declaration::interface("Logger", logger).in_file("src/logger.ts").annotated("service"))
        .declare(
            Declaration::function("createLogger", create)
                .in_file("src/logger.ts")
                .annotated_with("module", "core")
                .annotated("injectable"),
        )
        .declare(Declaration::variable("lazyLogger", opaque).in_file("src/lazy.ts").annotated("injectable"));
    diwire_resolver::resolve(&b.build(), &ResolverConfig::default()).unwrap()
}

#[test]
fn test_render_pretty_and_compact() {
    let plan = plan();

    let pretty = PlanWriter::new(&OutputConfig::default()).render(&plan).unwrap();
    let compact = PlanWriter::default().with_pretty(false).render(&plan).unwrap();

    assert!(pretty.contains("\n  \"tokens\""));
    assert_eq!(compact.lines().count(), 1);
    let reparsed: Plan = serde_json::from_str(&compact).unwrap();
    assert_eq!(reparsed, plan);
}

#[test]
fn test_write_to_nested_file() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out").join("plan.json");

    let writer = PlanWriter::default().with_path(&target);
    writer.write(&plan()).unwrap();

    assert_eq!(writer.path(), Some(target.as_path()));
    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(written["tokens"][0]["id"], "LoggerToken");
    assert_eq!(written["modules"][0]["name"], "core");
}

#[test]
fn test_summary_lists_bindings_and_diagnostics() {
    let summary = summarize(&plan());

    assert!(summary.starts_with("1 tokens, 1 factories, 1 modules, 1 diagnostics"));
    assert!(summary.contains("module core\n  LoggerToken <- createLogger\n"));
    assert!(summary.contains("[DI001] warning (src/lazy.ts)"));
}
